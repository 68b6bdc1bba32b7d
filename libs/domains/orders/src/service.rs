//! Order Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::OrderResult;
use crate::models::Order;
use crate::repository::OrderRepository;

/// Accepts checkout submissions
pub struct OrderService<R: OrderRepository> {
    repository: Arc<R>,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Validate and persist an order, returning its identifier.
    ///
    /// Nothing is written when validation fails.
    #[instrument(skip(self, input), fields(items = input.items.len()))]
    pub async fn create_order(&self, input: Order) -> OrderResult<String> {
        input.validate()?;
        self.repository.create(input).await
    }
}
