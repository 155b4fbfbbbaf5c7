//! Carts service errors.

use thiserror::Error;

use crate::{catalogue::CatalogueError, store::StoreError};

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("cart not found")]
    NotFound,

    #[error("not in cart")]
    NotInCart,

    #[error("product not found")]
    ProductNotFound,

    #[error("out of stock")]
    OutOfStock,

    #[error("quantity {0} is below one")]
    QuantityBelowOne(i64),

    #[error("negative quantity {0}")]
    NegativeQuantity(i64),

    #[error("storage error")]
    Store(#[from] StoreError),

    #[error("catalogue error")]
    Catalogue(#[from] CatalogueError),

    #[error("cart serialization error")]
    Serialization(#[source] serde_json::Error),
}

impl From<serde_json::Error> for CartsServiceError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization(error)
    }
}

impl From<trolley::cart::CartError> for CartsServiceError {
    fn from(error: trolley::cart::CartError) -> Self {
        match error {
            trolley::cart::CartError::NotInCart(_) => Self::NotInCart,
        }
    }
}
