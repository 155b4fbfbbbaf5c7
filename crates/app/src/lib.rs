//! Cart service application layer: persistence, catalogue lookups and cart operations.

pub mod catalogue;
pub mod context;
pub mod domain;
pub mod metrics;
pub mod store;

#[cfg(test)]
mod test;
