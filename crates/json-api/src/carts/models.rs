//! Cart response models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use trolley_app::domain::carts::models::{Cart, LineItem, Shipping};

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// Sum of line subtotals, shipping included
    pub total: f64,

    /// Tax contained in the total
    pub tax: f64,

    /// The lines in the cart
    pub items: Vec<LineItemResponse>,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            total: cart.total,
            tax: cart.tax,
            items: cart.items.into_iter().map(LineItemResponse::from).collect(),
        }
    }
}

/// Line Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LineItemResponse {
    /// Quantity of the product
    pub qty: i64,

    /// Product SKU, or `SHIP` for the shipping line
    pub sku: String,

    /// Product name when the line was added
    pub name: String,

    /// Unit price when the line was added
    pub price: f64,

    /// `price * qty`
    pub subtotal: f64,
}

impl From<LineItem> for LineItemResponse {
    fn from(item: LineItem) -> Self {
        Self {
            qty: item.qty,
            sku: item.sku,
            name: item.name,
            price: item.price,
            subtotal: item.subtotal,
        }
    }
}

/// Shipping Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ShippingRequest {
    /// Distance to the destination
    pub distance: f64,

    /// Shipping cost
    pub cost: f64,

    /// Destination name
    pub location: String,
}

impl From<ShippingRequest> for Shipping {
    fn from(request: ShippingRequest) -> Self {
        Shipping {
            distance: request.distance,
            cost: request.cost,
            location: request.location,
        }
    }
}
