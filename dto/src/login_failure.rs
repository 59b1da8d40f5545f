use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Error body returned by the backend when it rejects a request,
/// e.g. `{"detail": "Usuário ou senha inválidos"}`.
#[derive(Debug, Getters, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginFailure {
    #[serde(default)]
    detail: Option<String>,
}

impl LoginFailure {
    pub fn new(detail: Option<String>) -> Self {
        Self { detail }
    }
}
