//! In-process cart store.

use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{CartStore, StoreError};

#[derive(Debug)]
struct Entry {
    blob: String,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.is_none_or(|expires_at| now < expires_at)
    }
}

/// Cart store kept in memory, honouring TTLs on read.
#[derive(Debug, Default)]
pub struct MemoryCartStore {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryCartStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartStore for MemoryCartStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut entries = self.entries.lock().await;
        let now = Instant::now();

        if entries.get(key).is_some_and(|entry| !entry.is_live(now)) {
            entries.remove(key);
        }

        Ok(entries.get(key).map(|entry| entry.blob.clone()))
    }

    async fn set(&self, key: &str, blob: &str, ttl_seconds: Option<u64>) -> Result<(), StoreError> {
        let expires_at = ttl_seconds.map(|ttl| Instant::now() + Duration::from_secs(ttl));

        self.entries.lock().await.insert(
            key.to_owned(),
            Entry {
                blob: blob.to_owned(),
                expires_at,
            },
        );

        Ok(())
    }

    async fn del(&self, key: &str) -> Result<u64, StoreError> {
        let mut entries = self.entries.lock().await;
        let now = Instant::now();

        Ok(match entries.remove(key) {
            Some(entry) if entry.is_live(now) => 1,
            _ => 0,
        })
    }

    async fn ping(&self) -> bool {
        true
    }
}
