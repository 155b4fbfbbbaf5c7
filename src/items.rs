//! Line Items

use serde::{Deserialize, Serialize};
use tracing::error;

/// A single SKU's quantity, price snapshot and subtotal within a cart.
///
/// `name` and `price` are copied from the catalogue when the line is created and are never
/// refreshed afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Quantity of the SKU in the cart.
    pub qty: i64,

    /// Catalogue identifier.
    pub sku: String,

    /// Product name at the time the line was added.
    pub name: String,

    /// Unit price at the time the line was added.
    pub price: f64,

    /// `qty * price`.
    pub subtotal: f64,
}

impl LineItem {
    /// Creates a new line with its subtotal derived from `qty` and `price`.
    pub fn new(sku: impl Into<String>, name: impl Into<String>, qty: i64, price: f64) -> Self {
        Self {
            qty,
            sku: sku.into(),
            name: name.into(),
            price,
            subtotal: line_subtotal(price, qty),
        }
    }

    /// Overwrites the quantity and recomputes the subtotal from the recorded price.
    pub fn set_qty(&mut self, qty: i64) {
        self.qty = qty;
        self.subtotal = line_subtotal(self.price, qty);
    }
}

/// Subtotal of a line: `price * qty`.
pub fn line_subtotal(price: f64, qty: i64) -> f64 {
    #[expect(
        clippy::cast_precision_loss,
        reason = "cart quantities stay far below 2^52"
    )]
    let qty = qty as f64;

    price * qty
}

/// Merges `item` into `items`.
///
/// When a line with the same SKU exists its quantity is increased by `item.qty` and its subtotal
/// is recomputed from the price already on the line; the candidate's price is ignored and the
/// line keeps its position. Otherwise `item` is appended.
///
/// No validation is performed. This never fails: if the summed quantity would overflow, the error
/// is logged and `items` is left untouched.
pub fn merge_or_insert(items: &mut Vec<LineItem>, item: LineItem) {
    let Some(existing) = items.iter_mut().find(|line| line.sku == item.sku) else {
        items.push(item);

        return;
    };

    let Some(qty) = existing.qty.checked_add(item.qty) else {
        error!(
            sku = %item.sku,
            existing_qty = existing.qty,
            added_qty = item.qty,
            "line quantity overflow, leaving items unchanged"
        );

        return;
    };

    existing.set_qty(qty);
}
