//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    catalogue::{CatalogueClient, CatalogueConfig, CatalogueError, HttpCatalogueClient},
    domain::carts::{CartsService, StoreCartsService},
    metrics::MetricsSink,
    store::{CartStore, ConnectError, RedisCartStore, RetryPolicy, StoreError},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to redis")]
    Store(#[source] ConnectError<StoreError>),

    #[error("failed to build catalogue client")]
    Catalogue(#[source] CatalogueError),
}

/// Everything needed to build an [`AppContext`].
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub redis_url: String,
    pub retry: RetryPolicy,
    pub cart_ttl_seconds: Option<u64>,
    pub catalogue: CatalogueConfig,
}

#[derive(Clone)]
pub struct AppContext {
    pub carts: Arc<dyn CartsService>,
    pub store: Arc<dyn CartStore>,
}

impl AppContext {
    /// Connect to redis and wire the carts service.
    ///
    /// # Errors
    ///
    /// Returns an error when redis cannot be reached within the retry policy or the catalogue
    /// client cannot be built.
    pub async fn connect(
        settings: AppSettings,
        metrics: Arc<dyn MetricsSink>,
    ) -> Result<Self, AppInitError> {
        let store: Arc<dyn CartStore> = Arc::new(
            RedisCartStore::connect(&settings.redis_url, &settings.retry)
                .await
                .map_err(AppInitError::Store)?,
        );

        let catalogue =
            HttpCatalogueClient::new(settings.catalogue).map_err(AppInitError::Catalogue)?;

        Ok(Self::from_parts(
            store,
            Arc::new(catalogue),
            metrics,
            settings.cart_ttl_seconds,
        ))
    }

    /// Wire the carts service over already-built collaborators.
    #[must_use]
    pub fn from_parts(
        store: Arc<dyn CartStore>,
        catalogue: Arc<dyn CatalogueClient>,
        metrics: Arc<dyn MetricsSink>,
        cart_ttl_seconds: Option<u64>,
    ) -> Self {
        let carts = StoreCartsService::new(store.clone(), catalogue, metrics)
            .with_ttl_seconds(cart_ttl_seconds);

        Self {
            carts: Arc::new(carts),
            store,
        }
    }
}
