//! Trolley prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError},
    items::{LineItem, line_subtotal, merge_or_insert},
    pricing::{TAX_INCLUSIVE_DIVISOR, compute_tax, compute_total},
    shipping::{SHIPPING_SKU, Shipping, is_shipping_line, upsert_shipping_line},
};
