//! Update Quantity Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use trolley_app::domain::carts::models::CartId;

use crate::{
    carts::{errors::into_status_error, models::CartResponse},
    extensions::*,
    state::State,
};

/// Update Quantity Handler
///
/// Overwrites the quantity of a line already in the cart. A quantity of zero removes the line.
#[endpoint(
    tags("carts"),
    summary = "Update Item Quantity",
    responses(
        (status_code = StatusCode::OK, description = "Quantity updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Quantity is not a number or negative"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found or item not in cart"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "carts.update",
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
        .update_quantity(id, sku, qty)
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use trolley_app::domain::carts::{CartsServiceError, MockCartsService, models::Cart};

    use crate::test_helpers::carts_service;

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(
            carts,
            Router::with_path("update/{id}/{sku}/{qty}").get(handler),
        )
    }

    #[tokio::test]
    async fn test_update_to_zero_returns_empty_cart() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_update_quantity()
            .once()
            .withf(|id, sku, qty| *id == CartId::from("abc") && sku == "TEE1" && *qty == 0)
            .return_once(|_, _, _| Ok(Cart::new()));

        let mut res = TestClient::get("http://example.com/update/abc/TEE1/0")
            .send(&make_service(carts))
            .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(body.items.is_empty(), "line should be removed");
        assert!(body.total.abs() < f64::EPSILON, "total 0");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_sku_not_in_cart_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_update_quantity()
            .once()
            .return_once(|_, _, _| Err(CartsServiceError::NotInCart));

        let res = TestClient::get("http://example.com/update/abc/MUG/1")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_negative_quantity_returns_400() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_update_quantity()
            .once()
            .withf(|_, _, qty| *qty == -1)
            .return_once(|_, _, qty| Err(CartsServiceError::NegativeQuantity(qty)));

        let res = TestClient::get("http://example.com/update/abc/TEE1/-1")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_non_numeric_quantity_returns_400() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_update_quantity().never();

        let res = TestClient::get("http://example.com/update/abc/TEE1/none")
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
