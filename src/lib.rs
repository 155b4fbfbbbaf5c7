//! Trolley
//!
//! Trolley is the cart engine behind the cart service: line item merging, totals, tax and the
//! shipping line. Everything in this crate is synchronous and free of I/O.

pub mod cart;
pub mod items;
pub mod prelude;
pub mod pricing;
pub mod shipping;
