//! Rename Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use trolley_app::domain::carts::models::CartId;

use crate::{
    carts::{errors::into_status_error, models::CartResponse},
    extensions::*,
    state::State,
};

/// Rename Cart Handler
///
/// Copies a cart to a new id, typically an anonymous cart to a logged-in user. The source cart
/// is left in place.
#[endpoint(
    tags("carts"),
    summary = "Rename Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart copied"),
        (status_code = StatusCode::NOT_FOUND, description = "Source cart not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "carts.rename",
    skip(from, to, depot),
    fields(from = tracing::field::Empty, to = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    from: PathParam<String>,
    to: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let from = CartId::from(from.into_inner());
    let to = CartId::from(to.into_inner());

    let span = tracing::Span::current();

    span.record("from", tracing::field::display(&from));
    span.record("to", tracing::field::display(&to));

    let cart = state
        .app
        .carts
        .rename_cart(from, to)
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}
