//! Delete Cart Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use trolley_app::domain::carts::models::CartId;

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Delete Cart Handler
#[endpoint(
    tags("carts"),
    summary = "Delete Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "carts.delete",
    skip(id, depot, res),
    fields(cart_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = CartId::from(id.into_inner());

    tracing::Span::current().record("cart_id", tracing::field::display(&id));

    state
        .app
        .carts
        .delete_cart(id.clone())
        .await
        .map_err(into_status_error)?;

    tracing::info!(cart_id = %id, "deleted cart");

    res.render("OK");

    Ok(())
}
