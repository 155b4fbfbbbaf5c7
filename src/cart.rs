//! Cart

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    items::{LineItem, merge_or_insert},
    pricing::{compute_tax, compute_total},
    shipping::{Shipping, upsert_shipping_line},
};

/// Errors raised by cart mutations.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// The SKU has no line in the cart.
    #[error("{0} is not in the cart")]
    NotInCart(String),
}

/// A cart: ordered line items plus the derived total and tax.
///
/// `total` and `tax` are recomputed from scratch by every mutating method, so a cart at rest is
/// always consistent with its items.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    /// Sum of all line subtotals.
    #[serde(default)]
    pub total: f64,

    /// Tax embedded in `total`.
    #[serde(default)]
    pub tax: f64,

    /// Line items in insertion order.
    #[serde(default)]
    pub items: Vec<LineItem>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges `item` into the cart and recalculates.
    pub fn add_item(&mut self, item: LineItem) {
        merge_or_insert(&mut self.items, item);

        self.recalculate();
    }

    /// Sets the quantity of an existing line. A quantity of zero removes the line.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotInCart`] if no line has the given SKU.
    pub fn set_quantity(&mut self, sku: &str, qty: i64) -> Result<(), CartError> {
        let index = self
            .items
            .iter()
            .position(|item| item.sku == sku)
            .ok_or_else(|| CartError::NotInCart(sku.to_owned()))?;

        if qty == 0 {
            self.items.remove(index);
        } else if let Some(item) = self.items.get_mut(index) {
            item.set_qty(qty);
        }

        self.recalculate();

        Ok(())
    }

    /// Replaces or adds the shipping line and recalculates.
    pub fn set_shipping(&mut self, shipping: &Shipping) {
        upsert_shipping_line(&mut self.items, shipping);

        self.recalculate();
    }

    /// Recomputes `total` and `tax` from the items.
    pub fn recalculate(&mut self) {
        self.total = compute_total(&self.items);
        self.tax = compute_tax(self.total);
    }

    /// Returns the line for `sku`, if any.
    pub fn item(&self, sku: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.sku == sku)
    }

    /// Get the number of lines in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
