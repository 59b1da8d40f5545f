use crate::tools::{log_error_and_return, log_message_and_return};
use crate::web::backend::config::BackendConfig;
use crate::web::backend::forwarding::IncomingRequest;
use crate::web::error::{Result, WebError};
use derive_getters::Getters;
use reqwest::header::{CONTENT_TYPE, COOKIE, HeaderMap, LOCATION, SET_COOKIE};
use reqwest::{Client, Method};

/// What the backend answered, reduced to what the browser needs.
#[derive(Debug, Getters, PartialEq)]
pub struct ForwardedResponse {
    status: u16,
    content_type: Option<String>,
    location: Option<String>,
    set_cookies: Vec<String>,
    body: Vec<u8>,
}

impl ForwardedResponse {
    async fn read(response: reqwest::Response) -> Result<Self> {
        let status = response.status().as_u16();
        let headers = response.headers();
        let content_type = get_header(headers, CONTENT_TYPE.as_str());
        let location = get_header(headers, LOCATION.as_str());
        let set_cookies = headers
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .map(str::to_owned)
            .collect();
        let body = response
            .bytes()
            .await
            .map_err(log_error_and_return(WebError::CantReadResponse))?
            .to_vec();

        Ok(Self {
            status,
            content_type,
            location,
            set_cookies,
            body,
        })
    }
}

fn get_header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

pub struct BackendClient {
    client: Client,
    config: BackendConfig,
}

impl BackendClient {
    pub fn new(client: Client, config: BackendConfig) -> Self {
        Self { client, config }
    }

    /// Send `request` to the backend with the same method, path, query,
    /// `Content-Type` and cookies. `body` is sent unless it is empty.
    pub async fn forward(
        &self,
        request: &IncomingRequest,
        body: Vec<u8>,
    ) -> Result<ForwardedResponse> {
        let method = Method::from_bytes(request.method().as_str().as_bytes())
            .map_err(|_| WebError::UnsupportedMethod(request.method().to_string()))?;
        let url = self.config.url_for(request.path_and_query());
        debug!("Forwarding request [method: {method}, url: {url}]");

        let mut request_builder = self.client.request(method, &url);
        if let Some(content_type) = request.content_type() {
            request_builder = request_builder.header(CONTENT_TYPE, content_type);
        }
        if let Some(cookie) = request.cookie() {
            request_builder = request_builder.header(COOKIE, cookie);
        }
        if !body.is_empty() {
            request_builder = request_builder.body(body);
        }

        let response = request_builder
            .send()
            .await
            .map_err(log_message_and_return(
                &format!("Can't reach backend [url: {url}]"),
                WebError::ConnectionFailed,
            ))?;
        ForwardedResponse::read(response).await
    }
}

#[cfg(test)]
impl ForwardedResponse {
    pub fn new(status: u16, content_type: Option<String>, body: &str) -> Self {
        Self {
            status,
            content_type,
            location: None,
            set_cookies: vec![],
            body: body.as_bytes().to_vec(),
        }
    }
}
