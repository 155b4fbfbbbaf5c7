//! Catalogue errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("catalogue request failed")]
    Http(#[from] reqwest::Error),

    #[error("catalogue returned a malformed product")]
    Malformed(#[source] serde_json::Error),
}
