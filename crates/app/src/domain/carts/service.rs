//! Carts service.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use mockall::automock;
use tracing::{debug, info};

use crate::{
    catalogue::CatalogueClient,
    domain::carts::{
        errors::CartsServiceError,
        models::{Cart, CartId, LineItem, Shipping},
    },
    metrics::MetricsSink,
    store::CartStore,
};

/// How long a saved cart lives in the store.
pub const DEFAULT_CART_TTL_SECONDS: u64 = 3_600;

/// Carts service backed by a [`CartStore`], with product data from a [`CatalogueClient`].
///
/// Every mutation is a read-modify-write of the whole cart with no locking, so two concurrent
/// mutations of one cart can lose an update; the later write wins.
#[derive(Clone)]
pub struct StoreCartsService {
    store: Arc<dyn CartStore>,
    catalogue: Arc<dyn CatalogueClient>,
    metrics: Arc<dyn MetricsSink>,
    ttl_seconds: Option<u64>,
}

impl fmt::Debug for StoreCartsService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreCartsService")
            .field("ttl_seconds", &self.ttl_seconds)
            .finish_non_exhaustive()
    }
}

impl StoreCartsService {
    #[must_use]
    pub fn new(
        store: Arc<dyn CartStore>,
        catalogue: Arc<dyn CatalogueClient>,
        metrics: Arc<dyn MetricsSink>,
    ) -> Self {
        Self {
            store,
            catalogue,
            metrics,
            ttl_seconds: Some(DEFAULT_CART_TTL_SECONDS),
        }
    }

    /// Override the expiry applied when saving carts. `None` stores carts without expiry.
    #[must_use]
    pub fn with_ttl_seconds(mut self, ttl_seconds: Option<u64>) -> Self {
        self.ttl_seconds = ttl_seconds;
        self
    }

    async fn load(&self, cart: &CartId) -> Result<Option<Cart>, CartsServiceError> {
        let Some(blob) = self.store.get(&cart.store_key()).await? else {
            return Ok(None);
        };

        Ok(Some(serde_json::from_str(&blob)?))
    }

    async fn load_existing(&self, cart: &CartId) -> Result<Cart, CartsServiceError> {
        self.load(cart).await?.ok_or(CartsServiceError::NotFound)
    }

    async fn save(&self, cart: &CartId, contents: &Cart) -> Result<(), CartsServiceError> {
        let blob = serde_json::to_string(contents)?;

        debug!(cart_id = %cart, lines = contents.len(), total = contents.total, "saving cart");

        self.store
            .set(&cart.store_key(), &blob, self.ttl_seconds)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl CartsService for StoreCartsService {
    async fn get_cart(&self, cart: CartId) -> Result<Cart, CartsServiceError> {
        self.load_existing(&cart).await
    }

    async fn delete_cart(&self, cart: CartId) -> Result<(), CartsServiceError> {
        let deleted = self.store.del(&cart.store_key()).await?;

        if deleted == 0 {
            return Err(CartsServiceError::NotFound);
        }

        Ok(())
    }

    async fn rename_cart(&self, from: CartId, to: CartId) -> Result<Cart, CartsServiceError> {
        let contents = self.load_existing(&from).await?;

        self.save(&to, &contents).await?;

        info!(from = %from, to = %to, "copied cart");

        Ok(contents)
    }

    async fn add_item(
        &self,
        cart: CartId,
        sku: String,
        qty: i64,
    ) -> Result<Cart, CartsServiceError> {
        let added = u64::try_from(qty)
            .ok()
            .filter(|qty| *qty >= 1)
            .ok_or(CartsServiceError::QuantityBelowOne(qty))?;

        let product = self
            .catalogue
            .product(&sku)
            .await?
            .ok_or(CartsServiceError::ProductNotFound)?;

        debug!(sku = %sku, name = %product.name, price = product.price, "got product");

        if !product.in_stock() {
            return Err(CartsServiceError::OutOfStock);
        }

        let mut contents = self.load(&cart).await?.unwrap_or_default();

        contents.add_item(LineItem::new(sku, product.name, qty, product.price));

        self.save(&cart, &contents).await?;

        self.metrics.increment(added);

        Ok(contents)
    }

    async fn update_quantity(
        &self,
        cart: CartId,
        sku: String,
        qty: i64,
    ) -> Result<Cart, CartsServiceError> {
        if qty < 0 {
            return Err(CartsServiceError::NegativeQuantity(qty));
        }

        let mut contents = self.load_existing(&cart).await?;

        contents.set_quantity(&sku, qty)?;

        self.save(&cart, &contents).await?;

        Ok(contents)
    }

    async fn set_shipping(
        &self,
        cart: CartId,
        shipping: Shipping,
    ) -> Result<Cart, CartsServiceError> {
        let mut contents = self.load_existing(&cart).await?;

        contents.set_shipping(&shipping);

        self.save(&cart, &contents).await?;

        Ok(contents)
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieve a single cart.
    async fn get_cart(&self, cart: CartId) -> Result<Cart, CartsServiceError>;

    /// Deletes the cart with the given id.
    async fn delete_cart(&self, cart: CartId) -> Result<(), CartsServiceError>;

    /// Copies the contents of `from` to `to`, leaving `from` untouched.
    async fn rename_cart(&self, from: CartId, to: CartId) -> Result<Cart, CartsServiceError>;

    /// Add `qty` of a catalogue product to the cart, creating the cart if needed.
    async fn add_item(
        &self,
        cart: CartId,
        sku: String,
        qty: i64,
    ) -> Result<Cart, CartsServiceError>;

    /// Overwrite the quantity of a line; zero removes it.
    async fn update_quantity(
        &self,
        cart: CartId,
        sku: String,
        qty: i64,
    ) -> Result<Cart, CartsServiceError>;

    /// Replace or add the shipping line.
    async fn set_shipping(
        &self,
        cart: CartId,
        shipping: Shipping,
    ) -> Result<Cart, CartsServiceError>;
}
