//! Redis-backed cart store.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::MultiplexedConnection};
use tracing::{info, warn};

use super::{CartStore, ConnectError, RetryPolicy, StoreError, connect_with_retry};

/// Cart store over a single multiplexed Redis connection.
#[derive(Clone)]
pub struct RedisCartStore {
    connection: MultiplexedConnection,
}

impl std::fmt::Debug for RedisCartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCartStore").finish_non_exhaustive()
    }
}

impl RedisCartStore {
    #[must_use]
    pub fn new(connection: MultiplexedConnection) -> Self {
        Self { connection }
    }

    /// Connect to Redis at `url`, retrying according to `policy`.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL is invalid or every attempt fails.
    pub async fn connect(
        url: &str,
        policy: &RetryPolicy,
    ) -> Result<Self, ConnectError<StoreError>> {
        let client = Client::open(url).map_err(|source| ConnectError::Invalid(source.into()))?;

        let connection = connect_with_retry(policy, |attempt| {
            let client = client.clone();

            async move {
                info!(attempt, "connecting to redis");

                client
                    .get_multiplexed_async_connection()
                    .await
                    .map_err(StoreError::from)
            }
        })
        .await?;

        info!("redis connected");

        Ok(Self::new(connection))
    }
}

#[async_trait]
impl CartStore for RedisCartStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut connection = self.connection.clone();

        Ok(connection.get(key).await?)
    }

    async fn set(&self, key: &str, blob: &str, ttl_seconds: Option<u64>) -> Result<(), StoreError> {
        let mut connection = self.connection.clone();

        match ttl_seconds {
            Some(ttl) => connection.set_ex::<_, _, ()>(key, blob, ttl).await?,
            None => connection.set::<_, _, ()>(key, blob).await?,
        }

        Ok(())
    }

    async fn del(&self, key: &str) -> Result<u64, StoreError> {
        let mut connection = self.connection.clone();

        Ok(connection.del(key).await?)
    }

    async fn ping(&self) -> bool {
        let mut connection = self.connection.clone();

        match redis::cmd("PING").query_async::<String>(&mut connection).await {
            Ok(_) => true,
            Err(source) => {
                warn!("redis ping failed: {source}");

                false
            }
        }
    }
}
