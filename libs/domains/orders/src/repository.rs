use async_trait::async_trait;

use crate::error::OrderResult;
use crate::models::Order;

/// Persistence operations for orders
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persist a new order and return its identifier
    async fn create(&self, order: Order) -> OrderResult<String>;
}
