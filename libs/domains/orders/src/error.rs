use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::StoreError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Document store is not available")]
    StoreUnavailable,

    #[error("Database error: {0}")]
    Database(String),
}

pub type OrderResult<T> = Result<T, OrderError>;

impl From<StoreError> for OrderError {
    fn from(err: StoreError) -> Self {
        if err.is_unavailable() {
            tracing::warn!(error = %err, "Order store unavailable");
            OrderError::StoreUnavailable
        } else {
            tracing::error!(error = %err, "Order store operation failed");
            OrderError::Database(err.diagnostic())
        }
    }
}

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::Validation(errors) => AppError::ValidationError(errors),
            OrderError::StoreUnavailable => {
                AppError::ServiceUnavailable("Document store is not available".to_string())
            }
            OrderError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
