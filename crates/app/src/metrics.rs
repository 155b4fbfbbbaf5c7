//! Business metrics sink.

use mockall::automock;

/// Receives the running count of items added to carts.
#[automock]
pub trait MetricsSink: Send + Sync {
    /// Increase the items-added counter by `n`.
    fn increment(&self, n: u64);
}
