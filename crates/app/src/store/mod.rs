//! Cart storage

use async_trait::async_trait;
use mockall::automock;

pub mod errors;
mod memory;
mod redis_store;
pub mod retry;

pub use errors::StoreError;
pub use memory::MemoryCartStore;
pub use redis_store::RedisCartStore;
pub use retry::{ConnectError, RetryPolicy, connect_with_retry};

/// Key-value store holding serialized carts.
#[automock]
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Fetch the blob stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `blob` under `key`, expiring after `ttl_seconds` when given.
    async fn set(&self, key: &str, blob: &str, ttl_seconds: Option<u64>) -> Result<(), StoreError>;

    /// Delete `key`, returning how many entries were removed.
    async fn del(&self, key: &str) -> Result<u64, StoreError>;

    /// Check the store is reachable.
    async fn ping(&self) -> bool;
}
