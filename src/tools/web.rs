use crate::tools::log_message_and_return;
use crate::web::error::{Result, WebError};
use reqwest::Client;
use reqwest::redirect::Policy;

/// Client used to talk to the backend.
/// Redirections are never followed: they are relayed to the browser as they are.
pub fn build_client() -> Result<Client> {
    reqwest::ClientBuilder::new()
        .redirect(Policy::none())
        .build()
        .map_err(log_message_and_return(
            "Can't build HTTP client.",
            WebError::CantCreateClient,
        ))
}
