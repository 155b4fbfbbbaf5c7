//! Redis Config

use std::time::Duration;

use clap::Args;

use trolley_app::store::RetryPolicy;

const DEFAULT_REDIS_PORT: u16 = 6379;

/// Cart store settings.
#[derive(Debug, Args)]
pub struct RedisConfig {
    /// Redis URL, or a bare host name
    #[arg(long, env = "REDIS_HOST", default_value = "redis://localhost:6379")]
    pub redis_host: String,

    /// Seconds a saved cart lives; 0 keeps carts forever
    #[arg(long, env = "CART_TTL_SECONDS", default_value_t = 3_600_u64)]
    pub cart_ttl_seconds: u64,

    /// Connection attempts at startup
    #[arg(long, env = "REDIS_CONNECT_ATTEMPTS", default_value_t = 5_u32)]
    pub redis_connect_attempts: u32,

    /// Delay between connection attempts
    #[arg(long, env = "REDIS_CONNECT_DELAY_MS", default_value_t = 2_000_u64)]
    pub redis_connect_delay_ms: u64,
}

impl RedisConfig {
    /// Connection URL. A bare host name gets the `redis://` scheme and default port.
    #[must_use]
    pub fn url(&self) -> String {
        if self.redis_host.contains("://") {
            self.redis_host.clone()
        } else {
            format!("redis://{}:{DEFAULT_REDIS_PORT}", self.redis_host)
        }
    }

    #[must_use]
    pub fn ttl_seconds(&self) -> Option<u64> {
        (self.cart_ttl_seconds > 0).then_some(self.cart_ttl_seconds)
    }

    #[must_use]
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            attempts: self.redis_connect_attempts,
            delay: Duration::from_millis(self.redis_connect_delay_ms),
        }
    }
}
