use crate::web::error::{Result, WebError};
use derive_getters::Getters;

pub const BACKEND_URL_ENV_ARG: &str = "--backend-url";

#[derive(Debug, Getters, Clone, PartialEq)]
pub struct BackendConfig {
    base_url: String,
}

impl BackendConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// `path_and_query` is expected to start with `/`, as Rocket's origin URIs do.
    pub fn url_for(&self, path_and_query: &str) -> String {
        format!("{}{path_and_query}", self.base_url)
    }

    #[cfg(not(feature = "demo"))]
    pub fn load() -> Result<Self> {
        use crate::tools::env_args::retrieve_expected_arg_value;

        let base_url =
            retrieve_expected_arg_value(BACKEND_URL_ENV_ARG, WebError::MissingBackendUrl)?;
        if base_url.trim().is_empty() {
            return Err(WebError::MissingBackendUrl);
        }
        Ok(Self::new(base_url.trim()))
    }

    /// In demo mode, the backend is the mock server started along with the app.
    #[cfg(feature = "demo")]
    pub fn load() -> Result<Self> {
        crate::demo_mock_server::BACKEND_MOCK_SERVER_URI
            .get()
            .map(|uri| Self::new(uri))
            .ok_or(WebError::MissingBackendUrl)
    }
}
