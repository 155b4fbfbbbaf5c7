//! Catalogue Models

use serde::Deserialize;

/// Product metadata returned by the catalogue. Other catalogue fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub instock: Option<i64>,
}

impl Product {
    /// Only an explicit stock count of zero marks a product as unavailable.
    #[must_use]
    pub fn in_stock(&self) -> bool {
        self.instock != Some(0)
    }
}
