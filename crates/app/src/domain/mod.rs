//! Cart Service Domain Concerns

pub mod carts;
