//! Store errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("redis error")]
    Redis(#[from] redis::RedisError),
}
