//! Store double for forcing request interleavings.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::Barrier;

use crate::store::{CartStore, MemoryCartStore, StoreError};

/// Memory store whose reads, once armed, wait until `parties` readers have all read.
#[derive(Debug)]
pub(crate) struct BarrierStore {
    inner: MemoryCartStore,
    armed: AtomicBool,
    barrier: Barrier,
}

impl BarrierStore {
    pub(crate) fn new(parties: usize) -> Self {
        Self {
            inner: MemoryCartStore::new(),
            armed: AtomicBool::new(false),
            barrier: Barrier::new(parties),
        }
    }

    pub(crate) fn arm(&self) {
        self.armed.store(true, Ordering::SeqCst);
    }

    /// Let reads through without waiting again.
    pub(crate) fn disarm(&self) {
        self.armed.store(false, Ordering::SeqCst);
    }
}

#[async_trait]
impl CartStore for BarrierStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let blob = self.inner.get(key).await?;

        if self.armed.load(Ordering::SeqCst) {
            self.barrier.wait().await;
        }

        Ok(blob)
    }

    async fn set(&self, key: &str, blob: &str, ttl_seconds: Option<u64>) -> Result<(), StoreError> {
        self.inner.set(key, blob, ttl_seconds).await
    }

    async fn del(&self, key: &str) -> Result<u64, StoreError> {
        self.inner.del(key).await
    }

    async fn ping(&self) -> bool {
        self.inner.ping().await
    }
}
