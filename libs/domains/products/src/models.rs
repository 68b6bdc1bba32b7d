use chrono::{DateTime, Utc};
use database::mongodb::Identified;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Collection holding product documents
pub const PRODUCT_COLLECTION: &str = "product";

/// A catalog item as submitted by clients and persisted in the store.
///
/// `created_at` and `updated_at` are assigned by the store on insert; values
/// sent by clients are replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct Product {
    #[validate(length(min = 1, message = "Product name must not be empty"))]
    pub name: String,

    pub description: Option<String>,

    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,

    /// Conventionally one of `new`, `preowned`, `accessories`
    pub category: String,

    #[serde(default = "default_is_new")]
    pub is_new: bool,

    pub condition: Option<String>,
    pub grade: Option<String>,
    pub storage: Option<String>,
    pub color: Option<String>,

    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    pub stock: i64,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_is_new() -> bool {
    true
}

impl Product {
    /// Minimal product with every optional field left at its default
    pub fn new(name: impl Into<String>, price: f64, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            price,
            category: category.into(),
            is_new: true,
            condition: None,
            grade: None,
            storage: None,
            color: None,
            images: Vec::new(),
            stock: 0,
            created_at: None,
            updated_at: None,
        }
    }
}

/// A product read back from the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StoredProduct {
    /// Store-assigned identifier (24 hex digits)
    #[schema(example = "65f1a2b3c4d5e6f7a8b9c0d1")]
    pub id: String,

    #[serde(flatten)]
    pub product: Product,
}

impl From<Identified<Product>> for StoredProduct {
    fn from(identified: Identified<Product>) -> Self {
        Self {
            id: identified.id,
            product: identified.record,
        }
    }
}

/// Identifier of a newly created product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    #[schema(example = "65f1a2b3c4d5e6f7a8b9c0d1")]
    pub id: String,
}

/// Query parameters for listing products
#[derive(Debug, Default, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// Exact category to match; empty or absent lists everything
    pub category: Option<String>,
}

/// Product category shown in the storefront navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct Category {
    #[schema(value_type = String, example = "preowned")]
    pub key: &'static str,
    #[schema(value_type = String, example = "Pre-Owned iPhones")]
    pub label: &'static str,
}

pub const CATEGORIES: [Category; 3] = [
    Category {
        key: "new",
        label: "New iPhones",
    },
    Category {
        key: "preowned",
        label: "Pre-Owned iPhones",
    },
    Category {
        key: "accessories",
        label: "Accessories",
    },
];

/// Body returned by the seed endpoint.
///
/// Either `{status, message, count}` when the catalog already had products or
/// `{status, inserted}` after seeding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SeedResponse {
    #[schema(example = "ok")]
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inserted: Option<usize>,
}
