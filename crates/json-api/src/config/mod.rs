//! Server configuration module

use std::time::Duration;

use clap::Parser;

use trolley_app::{catalogue::CatalogueConfig, context::AppSettings};

use crate::config::{
    catalogue::CatalogueServiceConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    redis::RedisConfig,
    server::ServerRuntimeConfig,
};

pub(crate) mod catalogue;
pub(crate) mod observability;
pub(crate) mod redis;
pub(crate) mod server;

pub(crate) use observability::LogFormat;

/// Trolley cart API server configuration
#[derive(Debug, Parser)]
#[command(name = "trolley-json", about = "Trolley cart API server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Request observability settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Cart store settings.
    #[command(flatten)]
    pub redis: RedisConfig,

    /// Catalogue service settings.
    #[command(flatten)]
    pub catalogue: CatalogueServiceConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }

    /// Settings for wiring the application context.
    #[must_use]
    pub fn app_settings(&self) -> AppSettings {
        AppSettings {
            redis_url: self.redis.url(),
            retry: self.redis.retry_policy(),
            cart_ttl_seconds: self.redis.ttl_seconds(),
            catalogue: CatalogueConfig {
                base_url: self.catalogue.base_url(),
                timeout: Duration::from_millis(self.catalogue.catalogue_timeout_ms),
            },
        }
    }
}
