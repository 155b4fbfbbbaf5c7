//! Shared fixtures for service-level tests.

mod context;
mod store;

pub(crate) use catalogue::{CountingMetrics, StaticCatalogue};
pub(crate) use context::TestContext;
pub(crate) use store::BarrierStore;
