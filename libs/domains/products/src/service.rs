//! Product Service - Business logic layer

use database::mongodb::parse_object_id;
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CATEGORIES, Category, Product, SeedResponse, StoredProduct};
use crate::repository::ProductRepository;
use crate::seed::starter_catalog;

/// Result of a seed request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The catalog already held `count` products; nothing was written
    AlreadySeeded { count: u64 },
    /// The catalog was empty and `inserted` products were written
    Seeded { inserted: usize },
}

impl From<SeedOutcome> for SeedResponse {
    fn from(outcome: SeedOutcome) -> Self {
        match outcome {
            SeedOutcome::AlreadySeeded { count } => SeedResponse {
                status: "ok".to_string(),
                message: Some("Products already exist".to_string()),
                count: Some(count),
                inserted: None,
            },
            SeedOutcome::Seeded { inserted } => SeedResponse {
                status: "ok".to_string(),
                message: None,
                count: None,
                inserted: Some(inserted),
            },
        }
    }
}

/// Product service providing catalog operations.
///
/// Input is validated here as well as at the HTTP edge, so programmatic
/// callers get the same guarantees.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Validate and persist a product, returning its identifier
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: Product) -> ProductResult<String> {
        input.validate()?;
        self.repository.create(input).await
    }

    /// List products, optionally restricted to one category.
    ///
    /// An empty category string means no filter.
    #[instrument(skip(self))]
    pub async fn list_products(&self, category: Option<&str>) -> ProductResult<Vec<StoredProduct>> {
        let category = category
            .filter(|category| !category.is_empty())
            .map(str::to_string);
        self.repository.list(category).await
    }

    /// Fetch one product by the string form of its identifier
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ProductResult<StoredProduct> {
        let oid = parse_object_id(id)?;
        self.repository
            .get_by_id(oid)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// Insert the starter catalog if, and only if, no products exist yet
    #[instrument(skip(self))]
    pub async fn seed_products(&self) -> ProductResult<SeedOutcome> {
        let count = self.repository.count().await?;
        if count > 0 {
            tracing::info!(count, "Catalog already populated, skipping seed");
            return Ok(SeedOutcome::AlreadySeeded { count });
        }

        let inserted = self.repository.create_many(starter_catalog()).await?;
        tracing::info!(inserted, "Catalog seeded");
        Ok(SeedOutcome::Seeded { inserted })
    }

    /// Categories offered in the storefront
    pub fn categories(&self) -> Vec<Category> {
        CATEGORIES.to_vec()
    }
}
