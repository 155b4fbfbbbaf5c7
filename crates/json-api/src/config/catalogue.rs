//! Catalogue Config

use clap::Args;

/// Catalogue service settings.
#[derive(Debug, Args)]
pub struct CatalogueServiceConfig {
    /// Catalogue host name
    #[arg(long, env = "CATALOGUE_HOST", default_value = "catalogue")]
    pub catalogue_host: String,

    /// Catalogue port
    #[arg(long, env = "CATALOGUE_PORT", default_value_t = 8080_u16)]
    pub catalogue_port: u16,

    /// Per-request timeout for product lookups
    #[arg(long, env = "CATALOGUE_TIMEOUT_MS", default_value_t = 5_000_u64)]
    pub catalogue_timeout_ms: u64,
}

impl CatalogueServiceConfig {
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.catalogue_host, self.catalogue_port)
    }
}
