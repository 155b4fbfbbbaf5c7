//! Shipping

use serde::{Deserialize, Serialize};

use crate::items::LineItem;

/// Reserved SKU of the synthetic shipping line.
pub const SHIPPING_SKU: &str = "SHIP";

/// Shipping quote applied to a cart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shipping {
    /// Delivery distance reported by the shipping service.
    pub distance: f64,

    /// Shipping cost, used as the line price.
    pub cost: f64,

    /// Destination shown in the line name.
    pub location: String,
}

impl Shipping {
    /// Builds the synthetic line item representing this shipping quote.
    pub fn line_item(&self) -> LineItem {
        LineItem {
            qty: 1,
            sku: SHIPPING_SKU.to_owned(),
            name: format!("shipping to {}", self.location),
            price: self.cost,
            subtotal: self.cost,
        }
    }
}

/// Returns `true` if `item` is the shipping line.
pub fn is_shipping_line(item: &LineItem) -> bool {
    item.sku == SHIPPING_SKU
}

/// Replaces the shipping line in `items`, or appends one if there is none.
///
/// The replaced line keeps its position. After this call exactly one shipping line exists.
pub fn upsert_shipping_line(items: &mut Vec<LineItem>, shipping: &Shipping) {
    let line = shipping.line_item();

    let Some(index) = items.iter().position(is_shipping_line) else {
        items.push(line);

        return;
    };

    let mut position = 0;

    items.retain(|item| {
        let keep = position == index || !is_shipping_line(item);
        position += 1;

        keep
    });

    if let Some(slot) = items.get_mut(index) {
        *slot = line;
    }
}
