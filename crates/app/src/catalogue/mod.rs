//! Product catalogue

use async_trait::async_trait;
use mockall::automock;

mod client;
pub mod errors;
pub mod models;

pub use client::{CatalogueConfig, HttpCatalogueClient};
pub use errors::CatalogueError;
pub use models::Product;

/// Product lookups against the catalogue service.
#[automock]
#[async_trait]
pub trait CatalogueClient: Send + Sync {
    /// Look up a product by SKU. `Ok(None)` means the catalogue does not know the SKU.
    async fn product(&self, sku: &str) -> Result<Option<Product>, CatalogueError>;
}
