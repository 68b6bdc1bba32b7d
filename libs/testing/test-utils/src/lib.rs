//! Shared test utilities for the shop crates
//!
//! - `InMemoryDocumentStore`: a `DocumentStore` kept in process memory (always available)
//! - `TestMongo`: MongoDB container with automatic cleanup (feature: "mongo")
//! - `TestDataBuilder`: deterministic test data generation (always available)
//! - `assertions`: custom assertion helpers (always available)
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use test_utils::{InMemoryDocumentStore, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn creates_an_order() {
//!     let store = Arc::new(InMemoryDocumentStore::new());
//!     let builder = TestDataBuilder::from_test_name("creates_an_order");
//!
//!     let email = builder.email("buyer");
//!     // hand `store.clone()` to a repository as its SharedStore
//! }
//! ```
//!
//! ## MongoDB Testing
//!
//! Container tests need Docker and are marked `#[ignore]`:
//!
//! ```rust,ignore
//! use test_utils::TestMongo;
//!
//! #[tokio::test]
//! #[ignore]
//! async fn round_trips_through_mongo() {
//!     let mongo = TestMongo::new().await;
//!     let store = mongo.store();
//! }
//! ```

mod memory;

#[cfg(feature = "mongo")]
mod mongo;

pub use memory::InMemoryDocumentStore;

#[cfg(feature = "mongo")]
pub use mongo::TestMongo;

/// Builder for test data with deterministic randomization
///
/// This ensures tests are reproducible by using seeded random data.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_order");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a unique name for testing
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_eq!(builder.name("product", "main"), "test-product-7-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// A syntactically valid, seed-unique email address
    pub fn email(&self, local: &str) -> String {
        format!("{}.{}@example.com", local, self.seed)
    }

    /// A seed-derived 24 hex digit identifier, well-formed but never stored
    pub fn object_id_hex(&self) -> String {
        format!("{:016x}{:08x}", self.seed, (self.seed >> 32) as u32)
    }

    /// A price between 1.00 and 1000.00 with two decimals
    pub fn price(&self) -> f64 {
        (100 + self.seed % 99_900) as f64 / 100.0
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that a string is a 24 hex digit store identifier
    pub fn assert_object_id(id: &str, context: &str) {
        assert!(
            id.len() == 24 && id.chars().all(|c| c.is_ascii_hexdigit()),
            "{}: expected a 24 hex digit id, got {:?}",
            context,
            id
        );
    }

    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }
}
