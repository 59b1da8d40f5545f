use rocket::http::Status;
use thiserror::Error;

pub type Result<T, E = WebError> = std::result::Result<T, E>;

#[derive(Debug, Error, PartialEq)]
pub enum WebError {
    #[error("Client couldn't be created.")]
    CantCreateClient,
    #[error("No backend URL has been provided: start the app with `--backend-url=<url>`.")]
    MissingBackendUrl,
    #[error("The method `{0}` can't be forwarded.")]
    UnsupportedMethod(String),
    #[error("The request body couldn't be read.")]
    CantReadRequestBody,
    #[error("The request body exceeds the size limit.")]
    PayloadTooLarge,
    #[error("The connection to the backend failed.")]
    ConnectionFailed,
    #[error("The backend response couldn't be read.")]
    CantReadResponse,
}

impl WebError {
    /// Status sent back to the browser when forwarding fails.
    pub fn status(&self) -> Status {
        match self {
            WebError::PayloadTooLarge => Status::PayloadTooLarge,
            WebError::CantReadRequestBody => Status::BadRequest,
            WebError::ConnectionFailed | WebError::CantReadResponse => Status::BadGateway,
            WebError::UnsupportedMethod(_) => Status::MethodNotAllowed,
            WebError::CantCreateClient | WebError::MissingBackendUrl => {
                Status::InternalServerError
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        error = {WebError::PayloadTooLarge, WebError::ConnectionFailed, WebError::CantReadResponse, WebError::CantReadRequestBody, WebError::MissingBackendUrl},
        expected_status = {Status::PayloadTooLarge, Status::BadGateway, Status::BadGateway, Status::BadRequest, Status::InternalServerError}
    )]
    fn should_map_error_to_status(error: WebError, expected_status: Status) {
        assert_eq!(expected_status, error.status());
    }
}
