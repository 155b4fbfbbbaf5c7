//! Add Item Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use trolley_app::domain::carts::models::CartId;

use crate::{
    carts::{errors::into_status_error, models::CartResponse},
    extensions::*,
    state::State,
};

/// Add Item Handler
///
/// Looks the product up in the catalogue and adds `qty` of it, creating the cart if needed.
#[endpoint(
    tags("carts"),
    summary = "Add Item to Cart",
    responses(
        (status_code = StatusCode::OK, description = "Item added"),
        (status_code = StatusCode::BAD_REQUEST, description = "Quantity is not a positive number"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found or out of stock"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "carts.add",
    skip(id, sku, qty, depot),
    fields(
        cart_id = tracing::field::Empty,
        sku = tracing::field::Empty,
        qty = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    sku: PathParam<String>,
    qty: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let qty = qty.into_quantity()?;
    let id = CartId::from(id.into_inner());
    let sku = sku.into_inner();

    let span = tracing::Span::current();

    span.record("cart_id", tracing::field::display(&id));
    span.record("sku", sku.as_str());
    span.record("qty", qty);

    let cart = state
        .app
        .carts
        .add_item(id, sku, qty)
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}
