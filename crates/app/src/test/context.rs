//! Test context for service-level tests.

use std::sync::Arc;

use crate::{
    domain::carts::{
        CartsServiceError, StoreCartsService,
        models::{Cart, CartId},
    },
    metrics::{MetricsSink, MockMetricsSink},
    store::{CartStore, MemoryCartStore, MockCartStore},
};

use super::{CountingMetrics, StaticCatalogue};

pub(crate) struct TestContext {
    pub store: Arc<dyn CartStore>,
    pub carts: StoreCartsService,
    counter: Arc<CountingMetrics>,
}

impl TestContext {
    /// Memory store, fixture catalogue and a counting metrics sink.
    pub(crate) fn new() -> Self {
        Self::with_store_arc(Arc::new(MemoryCartStore::new()))
    }

    pub(crate) fn with_store(store: MockCartStore) -> Self {
        Self::with_store_arc(Arc::new(store))
    }

    pub(crate) fn with_store_arc(store: Arc<dyn CartStore>) -> Self {
        let counter = Arc::new(CountingMetrics::default());

        Self::build(store, counter.clone(), counter)
    }

    pub(crate) fn with_metrics(metrics: MockMetricsSink) -> Self {
        Self::build(
            Arc::new(MemoryCartStore::new()),
            Arc::new(metrics),
            Arc::new(CountingMetrics::default()),
        )
    }

    fn build(
        store: Arc<dyn CartStore>,
        metrics: Arc<dyn MetricsSink>,
        counter: Arc<CountingMetrics>,
    ) -> Self {
        Self {
            carts: StoreCartsService::new(
                store.clone(),
                Arc::new(StaticCatalogue::fixtures()),
                metrics,
            ),
            store,
            counter,
        }
    }

    /// Read a cart straight from the store, bypassing the service.
    pub(crate) async fn stored_cart(&self, id: &str) -> Result<Option<Cart>, CartsServiceError> {
        let Some(blob) = self.store.get(&CartId::from(id).store_key()).await? else {
            return Ok(None);
        };

        Ok(Some(serde_json::from_str(&blob)?))
    }

    /// Items counted by the default metrics sink.
    pub(crate) fn items_added(&self) -> u64 {
        self.counter.total()
    }
}
