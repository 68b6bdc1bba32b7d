use mongodb::bson;
use thiserror::Error;

use crate::common::truncate_diagnostic;

/// Errors raised by the document store layer
#[derive(Debug, Error)]
pub enum StoreError {
    /// No database connection was established at startup
    #[error("Document store is not available")]
    Unavailable,

    /// Connecting to or verifying the store failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The string is not a 24 hex digit ObjectId
    #[error("Malformed identifier: {0}")]
    MalformedId(String),

    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Failed to encode document: {0}")]
    Encode(#[from] bson::ser::Error),

    #[error("Failed to decode document: {0}")]
    Decode(String),
}

impl StoreError {
    /// Error text shortened for client-facing responses
    pub fn diagnostic(&self) -> String {
        truncate_diagnostic(&self.to_string())
    }

    /// True when the store could not be reached at all
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            StoreError::Unavailable | StoreError::ConnectionFailed(_)
        )
    }
}

impl From<bson::de::Error> for StoreError {
    fn from(err: bson::de::Error) -> Self {
        StoreError::Decode(err.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_is_truncated() {
        let err = StoreError::Decode("y".repeat(200));
        let diagnostic = err.diagnostic();
        assert!(diagnostic.starts_with("Failed to decode document: "));
        assert!(diagnostic.ends_with("..."));
        assert_eq!(diagnostic.chars().count(), crate::common::DIAGNOSTIC_MAX_CHARS + 3);
    }

    #[test]
    fn unavailable_classification() {
        assert!(StoreError::Unavailable.is_unavailable());
        assert!(StoreError::ConnectionFailed("timeout".into()).is_unavailable());
        assert!(!StoreError::MalformedId("abc".into()).is_unavailable());
        assert!(!StoreError::Decode("bad".into()).is_unavailable());
    }
}
