//! Cart Models

use std::fmt;

pub use trolley::prelude::{Cart, LineItem, Shipping};

const CART_KEY_PREFIX: &str = "cart:";

/// Caller-chosen cart identifier. Not validated; uniqueness is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CartId(String);

impl CartId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Store key the cart is persisted under.
    #[must_use]
    pub fn store_key(&self) -> String {
        format!("{CART_KEY_PREFIX}{}", self.0)
    }
}

impl From<String> for CartId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for CartId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl fmt::Display for CartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
