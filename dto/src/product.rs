use derive_getters::Getters;
use serde::{Deserialize, Serialize};

pub type ProductId = u64;

/// A product as listed by the backend catalogue.
/// `text` is the label shown to the user, usually `"<id> - <description>"`.
#[derive(Debug, Getters, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    text: String,
}

impl Product {
    pub fn new(id: ProductId, text: String) -> Self {
        Self { id, text }
    }

    /// Case-insensitive substring match against the label or the stringified id.
    /// An empty query matches every product.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.text.to_lowercase().contains(&query) || self.id.to_string().contains(&query)
    }
}
