use async_trait::async_trait;
use database::mongodb::ObjectId;

use crate::error::ProductResult;
use crate::models::{Product, StoredProduct};

/// Persistence operations for products
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new product and return its identifier
    async fn create(&self, product: Product) -> ProductResult<String>;

    /// Persist several products, returning how many were written
    async fn create_many(&self, products: Vec<Product>) -> ProductResult<usize>;

    /// All products, or only those whose category equals `category`
    async fn list(&self, category: Option<String>) -> ProductResult<Vec<StoredProduct>>;

    async fn get_by_id(&self, id: ObjectId) -> ProductResult<Option<StoredProduct>>;

    async fn count(&self) -> ProductResult<u64>;
}
