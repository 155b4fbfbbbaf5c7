//! Set Shipping Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use trolley_app::domain::carts::models::CartId;

use crate::{
    carts::{
        errors::into_status_error,
        models::{CartResponse, ShippingRequest},
    },
    extensions::*,
    state::State,
};

/// Set Shipping Handler
///
/// Adds the shipping line to a cart, replacing any earlier one.
#[endpoint(
    tags("carts"),
    summary = "Set Shipping",
    responses(
        (status_code = StatusCode::OK, description = "Shipping set"),
        (status_code = StatusCode::BAD_REQUEST, description = "Shipping details incomplete"),
        (status_code = StatusCode::NOT_FOUND, description = "Cart not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "carts.shipping",
    skip(id, json, depot),
    fields(
        cart_id = tracing::field::Empty,
        location = tracing::field::Empty,
        cost = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    json: JsonBody<ShippingRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let id = CartId::from(id.into_inner());
    let request = json.into_inner();

    let span = tracing::Span::current();

    span.record("cart_id", tracing::field::display(&id));
    span.record("location", request.location.as_str());
    span.record("cost", request.cost);

    let cart = state
        .app
        .carts
        .set_shipping(id, request.into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use trolley_app::domain::carts::{
        CartsServiceError, MockCartsService,
        models::{Cart, Shipping},
    };

    use crate::test_helpers::{carts_service, make_cart};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("shipping/{id}").post(handler))
    }

    fn shipped_cart(shipping: &Shipping) -> Cart {
        let mut cart = make_cart();

        cart.set_shipping(shipping);

        cart
    }

    #[tokio::test]
    async fn test_shipping_adds_ship_line() -> TestResult {
        let expected = Shipping {
            distance: 12.5,
            cost: 4.0,
            location: "York".to_owned(),
        };

        let cart = shipped_cart(&expected);

        let mut carts = MockCartsService::new();

        carts
            .expect_set_shipping()
            .once()
            .withf(move |id, shipping| *id == CartId::from("abc") && *shipping == expected)
            .return_once(move |_, _| Ok(cart));

        let mut res = TestClient::post("http://example.com/shipping/abc")
            .json(&json!({ "distance": 12.5, "cost": 4.0, "location": "York" }))
            .send(&make_service(carts))
            .await;

        let body: CartResponse = res.take_json().await?;

        let ship = body
            .items
            .iter()
            .find(|item| item.sku == "SHIP")
            .ok_or("Expected SHIP line")?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(ship.qty, 1);
        assert_eq!(ship.name, "shipping to York");
        assert!((body.total - 24.0).abs() < f64::EPSILON, "20 + 4 shipping");

        Ok(())
    }

    #[tokio::test]
    async fn test_shipping_missing_fields_returns_400() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_set_shipping().never();

        let res = TestClient::post("http://example.com/shipping/abc")
            .json(&json!({ "distance": 12.5, "location": "York" }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_shipping_for_missing_cart_returns_404() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_set_shipping()
            .once()
            .return_once(|_, _| Err(CartsServiceError::NotFound));

        let res = TestClient::post("http://example.com/shipping/abc")
            .json(&json!({ "distance": 1, "cost": 2, "location": "Leeds" }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
