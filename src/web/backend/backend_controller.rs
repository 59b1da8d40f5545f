use crate::tools::log_error_and_return;
use crate::web::backend::client::{BackendClient, ForwardedResponse};
use crate::web::backend::forwarding::IncomingRequest;
use crate::web::error::{Result, WebError};
use rocket::State;
use rocket::data::{Data, ToByteUnit};
use rocket::http::Status;

/// Spreadsheets above this size are refused without reaching the backend.
pub const BODY_LIMIT_MIB: usize = 25;

#[post("/login", data = "<body>")]
pub async fn login(
    backend: &State<BackendClient>,
    request: IncomingRequest,
    body: Data<'_>,
) -> Result<ForwardedResponse, Status> {
    forward(backend, request, Some(body)).await
}

#[post("/logout", data = "<body>")]
pub async fn logout(
    backend: &State<BackendClient>,
    request: IncomingRequest,
    body: Data<'_>,
) -> Result<ForwardedResponse, Status> {
    forward(backend, request, Some(body)).await
}

#[get("/api/<_..>")]
pub async fn api(
    backend: &State<BackendClient>,
    request: IncomingRequest,
) -> Result<ForwardedResponse, Status> {
    forward(backend, request, None).await
}

#[post("/patrimonio/upload", data = "<body>")]
pub async fn upload(
    backend: &State<BackendClient>,
    request: IncomingRequest,
    body: Data<'_>,
) -> Result<ForwardedResponse, Status> {
    forward(backend, request, Some(body)).await
}

async fn forward(
    backend: &BackendClient,
    request: IncomingRequest,
    body: Option<Data<'_>>,
) -> Result<ForwardedResponse, Status> {
    let body = match body {
        Some(body) => read_body(body).await,
        None => Ok(vec![]),
    }
    .map_err(|error| error.status())?;

    backend
        .forward(&request, body)
        .await
        .map_err(|error| error.status())
}

async fn read_body(body: Data<'_>) -> Result<Vec<u8>> {
    let body = body
        .open(BODY_LIMIT_MIB.mebibytes())
        .into_bytes()
        .await
        .map_err(log_error_and_return(WebError::CantReadRequestBody))?;
    if !body.is_complete() {
        warn!("Request body exceeds {BODY_LIMIT_MIB} MiB, refusing it");
        return Err(WebError::PayloadTooLarge);
    }

    Ok(body.into_inner())
}
