//! Pricing

use crate::items::LineItem;

/// Divisor that backs the tax out of a tax-inclusive total (20% rate).
pub const TAX_INCLUSIVE_DIVISOR: f64 = 1.2;

/// Sum of every line subtotal. Zero for no lines.
pub fn compute_total(items: &[LineItem]) -> f64 {
    items.iter().map(|item| item.subtotal).sum()
}

/// Tax embedded in a tax-inclusive `total`, unrounded.
pub fn compute_tax(total: f64) -> f64 {
    total - total / TAX_INCLUSIVE_DIVISOR
}
