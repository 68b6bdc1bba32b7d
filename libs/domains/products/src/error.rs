use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::StoreError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Invalid product id: {0}")]
    InvalidId(String),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Document store is not available")]
    StoreUnavailable,

    #[error("Database error: {0}")]
    Database(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl From<StoreError> for ProductError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::MalformedId(id) => ProductError::InvalidId(id),
            err if err.is_unavailable() => {
                tracing::warn!(error = %err, "Product store unavailable");
                ProductError::StoreUnavailable
            }
            err => {
                tracing::error!(error = %err, "Product store operation failed");
                ProductError::Database(err.diagnostic())
            }
        }
    }
}

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => AppError::NotFound("Product not found".to_string()),
            ProductError::InvalidId(id) => AppError::InvalidId(id),
            ProductError::Validation(errors) => AppError::ValidationError(errors),
            ProductError::StoreUnavailable => {
                AppError::ServiceUnavailable("Document store is not available".to_string())
            }
            ProductError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn malformed_id_becomes_invalid_id() {
        let err: ProductError = StoreError::MalformedId("abc".into()).into();
        assert!(matches!(err, ProductError::InvalidId(ref id) if id == "abc"));

        let app: AppError = err.into();
        assert_eq!(app.status(), StatusCode::BAD_REQUEST);
        assert_eq!(app.error_code().as_str(), "INVALID_ID");
    }

    #[test]
    fn unavailable_store_maps_to_503() {
        for store_err in [
            StoreError::Unavailable,
            StoreError::ConnectionFailed("no reachable servers".into()),
        ] {
            let err: ProductError = store_err.into();
            assert!(matches!(err, ProductError::StoreUnavailable));
            let app: AppError = err.into();
            assert_eq!(app.status(), StatusCode::SERVICE_UNAVAILABLE);
        }
    }

    #[test]
    fn other_store_errors_carry_truncated_diagnostic() {
        let err: ProductError = StoreError::Decode("x".repeat(500)).into();
        let ProductError::Database(msg) = err else {
            panic!("expected database error");
        };
        assert!(msg.chars().count() < 100);
        assert!(msg.ends_with("..."));
    }

    #[test]
    fn not_found_maps_to_404() {
        let app: AppError = ProductError::NotFound("65f0c0ffee0000000000beef".into()).into();
        assert_eq!(app.status(), StatusCode::NOT_FOUND);
        assert_eq!(app.error_code().as_str(), "NOT_FOUND");
    }
}
