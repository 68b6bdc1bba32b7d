use async_trait::async_trait;
use chrono::Utc;
use database::mongodb::{
    Document, EqualityFilter, ObjectId, SharedStore, StoreResult, from_document, prepare_insert,
};
use tracing::instrument;

use crate::error::ProductResult;
use crate::models::{PRODUCT_COLLECTION, Product, StoredProduct};
use crate::repository::ProductRepository;

/// [`ProductRepository`] over the shared document store
#[derive(Clone)]
pub struct StoreProductRepository {
    store: SharedStore,
}

impl StoreProductRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

fn decode(doc: Document) -> StoreResult<StoredProduct> {
    from_document::<Product>(doc).map(StoredProduct::from)
}

#[async_trait]
impl ProductRepository for StoreProductRepository {
    #[instrument(skip(self, product), fields(product_name = %product.name))]
    async fn create(&self, product: Product) -> ProductResult<String> {
        let doc = prepare_insert(&product, Utc::now())?;
        let id = self.store.insert_one(PRODUCT_COLLECTION, doc).await?;

        tracing::info!(%id, "Product created");
        Ok(id.to_hex())
    }

    #[instrument(skip(self, products), fields(count = products.len()))]
    async fn create_many(&self, products: Vec<Product>) -> ProductResult<usize> {
        let now = Utc::now();
        let docs = products
            .iter()
            .map(|product| prepare_insert(product, now))
            .collect::<StoreResult<Vec<_>>>()?;

        let ids = self.store.insert_many(PRODUCT_COLLECTION, docs).await?;
        Ok(ids.len())
    }

    #[instrument(skip(self))]
    async fn list(&self, category: Option<String>) -> ProductResult<Vec<StoredProduct>> {
        let filter = category.map(|category| EqualityFilter::new("category", category));
        let docs = self.store.find_many(PRODUCT_COLLECTION, filter).await?;

        let products = docs
            .into_iter()
            .map(decode)
            .collect::<StoreResult<Vec<_>>>()?;
        Ok(products)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: ObjectId) -> ProductResult<Option<StoredProduct>> {
        let doc = self.store.find_by_id(PRODUCT_COLLECTION, id).await?;
        Ok(doc.map(decode).transpose()?)
    }

    #[instrument(skip(self))]
    async fn count(&self) -> ProductResult<u64> {
        Ok(self.store.count(PRODUCT_COLLECTION).await?)
    }
}
