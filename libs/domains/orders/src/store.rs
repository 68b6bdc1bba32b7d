use async_trait::async_trait;
use chrono::Utc;
use database::mongodb::{SharedStore, prepare_insert};
use tracing::instrument;

use crate::error::OrderResult;
use crate::models::{ORDER_COLLECTION, Order};
use crate::repository::OrderRepository;

/// [`OrderRepository`] over the shared document store
#[derive(Clone)]
pub struct StoreOrderRepository {
    store: SharedStore,
}

impl StoreOrderRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl OrderRepository for StoreOrderRepository {
    #[instrument(skip(self, order), fields(items = order.items.len(), total = order.total))]
    async fn create(&self, order: Order) -> OrderResult<String> {
        let doc = prepare_insert(&order, Utc::now())?;
        let id = self.store.insert_one(ORDER_COLLECTION, doc).await?;

        tracing::info!(%id, "Order stored");
        Ok(id.to_hex())
    }
}
