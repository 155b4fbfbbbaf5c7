//! Errors

use salvo::http::StatusError;
use tracing::error;

use trolley_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::NotFound => StatusError::not_found().brief("cart not found"),
        CartsServiceError::NotInCart => StatusError::not_found().brief("not in cart"),
        CartsServiceError::ProductNotFound => StatusError::not_found().brief("product not found"),
        CartsServiceError::OutOfStock => StatusError::not_found().brief("out of stock"),
        CartsServiceError::QuantityBelowOne(_) => {
            StatusError::bad_request().brief("quantity has to be greater than zero")
        }
        CartsServiceError::NegativeQuantity(_) => {
            StatusError::bad_request().brief("negative quantity not allowed")
        }
        CartsServiceError::Catalogue(source) => {
            error!("catalogue lookup failed: {source}");

            StatusError::internal_server_error()
        }
        CartsServiceError::Store(source) => {
            error!("cart store failed: {source}");

            StatusError::internal_server_error()
        }
        CartsServiceError::Serialization(source) => {
            error!("stored cart is unreadable: {source}");

            StatusError::internal_server_error()
        }
    }
}
