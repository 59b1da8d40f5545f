use crate::web::backend::client::ForwardedResponse;
use derive_getters::Getters;
use rocket::http::{Method, Status};
use rocket::request::{self, FromRequest, Outcome, Request};
use rocket::response::{self, Responder, Response};
use std::convert::Infallible;
use std::io::Cursor;

/// The parts of a browser request that are relayed to the backend.
#[derive(Debug, Getters, PartialEq)]
pub struct IncomingRequest {
    method: Method,
    path_and_query: String,
    content_type: Option<String>,
    cookie: Option<String>,
}

impl IncomingRequest {
    pub fn new(
        method: Method,
        path_and_query: &str,
        content_type: Option<&str>,
        cookie: Option<&str>,
    ) -> Self {
        Self {
            method,
            path_and_query: path_and_query.to_owned(),
            content_type: content_type.map(str::to_owned),
            cookie: cookie.map(str::to_owned),
        }
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for IncomingRequest {
    type Error = Infallible;

    async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        // Raw headers, not the cookie jar: names, values and order must reach the backend untouched
        let cookies = req.headers().get("Cookie").collect::<Vec<&str>>().join("; ");

        Outcome::Success(IncomingRequest::new(
            req.method(),
            &req.uri().to_string(),
            req.headers().get_one("Content-Type"),
            (!cookies.is_empty()).then_some(cookies.as_str()),
        ))
    }
}

/// The backend's status, `Content-Type`, `Location`, every `Set-Cookie` and the body are relayed as they are.
impl<'r> Responder<'r, 'static> for ForwardedResponse {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let mut response = Response::build();
        response.status(Status::new(*self.status()));
        if let Some(content_type) = self.content_type() {
            response.raw_header("Content-Type", content_type.clone());
        }
        if let Some(location) = self.location() {
            response.raw_header("Location", location.clone());
        }
        for set_cookie in self.set_cookies() {
            response.raw_header_adjoin("Set-Cookie", set_cookie.clone());
        }
        let body = self.body().clone();
        response.sized_body(body.len(), Cursor::new(body));
        response.ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rocket::http::{ContentType, Header};
    use rocket::local::asynchronous::Client;

    #[get("/echo")]
    fn echo() -> ForwardedResponse {
        ForwardedResponse::new(401, Some("application/json".to_owned()), r#"{"detail":"Não"}"#)
    }

    #[async_test]
    async fn should_extract_request() {
        let client = Client::tracked(rocket::build()).await.unwrap();
        let request = client
            .post("/patrimonio/upload?dry=1")
            .header(ContentType::Form)
            .header(Header::new("Cookie", "access_token=xyz"));

        let outcome = IncomingRequest::from_request(&request).await;

        let Outcome::Success(incoming_request) = outcome else {
            panic!("The guard should always succeed");
        };
        assert_eq!(
            IncomingRequest::new(
                Method::Post,
                "/patrimonio/upload?dry=1",
                Some("application/x-www-form-urlencoded"),
                Some("access_token=xyz")
            ),
            incoming_request
        );
    }

    #[async_test]
    async fn should_extract_request_without_cookie() {
        let client = Client::tracked(rocket::build()).await.unwrap();
        let request = client.get("/api/produtos");

        let outcome = IncomingRequest::from_request(&request).await;

        let Outcome::Success(incoming_request) = outcome else {
            panic!("The guard should always succeed");
        };
        assert_eq!(&None, incoming_request.cookie());
        assert_eq!(&None, incoming_request.content_type());
    }

    #[async_test]
    async fn should_relay_response() {
        let client = Client::tracked(rocket::build().mount("/", routes![echo]))
            .await
            .unwrap();

        let response = client.get("/echo").dispatch().await;

        assert_eq!(Status::Unauthorized, response.status());
        assert_eq!(Some(ContentType::JSON), response.content_type());
        assert_eq!(
            Some(r#"{"detail":"Não"}"#.to_owned()),
            response.into_string().await
        );
    }

    #[async_test]
    async fn should_keep_cookies_as_sent() {
        let client = Client::tracked(rocket::build()).await.unwrap();
        let request = client
            .get("/api/produtos")
            .header(Header::new("Cookie", r#"a=x%20y; b="quoted"; c=1; d=p=q"#))
            .header(Header::new("Cookie", "e=2"));

        let outcome = IncomingRequest::from_request(&request).await;

        let Outcome::Success(incoming_request) = outcome else {
            panic!("The guard should always succeed");
        };
        assert_eq!(
            &Some(r#"a=x%20y; b="quoted"; c=1; d=p=q; e=2"#.to_owned()),
            incoming_request.cookie()
        );
    }
}
