pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use std::collections::BTreeMap;
use thiserror::Error;
use utoipa::ToSchema;
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

/// Standard error response structure.
///
/// Every error response has this shape:
/// - `code`: integer error code for logging/monitoring (e.g., 1002)
/// - `error`: machine-readable identifier (e.g., "INVALID_ID")
/// - `message`: human-readable message
/// - `details`: optional structured details (validation failures)
///
/// ```json
/// {
///   "code": 1001,
///   "error": "VALIDATION_ERROR",
///   "message": "Request validation failed",
///   "details": { "items[0].quantity": [{ "code": "range", "message": null, "params": { "min": 1.0, "value": 0 } }] }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub code: i32,
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

/// Application error type that can be converted to HTTP responses.
///
/// Domain crates convert their own error enums into this one; the
/// `IntoResponse` impl picks the status, the [`ErrorCode`] and the log level.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON parsing error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    /// Well-formed JSON whose shape does not match the target type
    #[error("JSON data error: {message}")]
    JsonData { message: String, details: Value },

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Invalid identifier format: {0}")]
    InvalidId(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::JsonExtractorRejection(e) => e.status(),
            AppError::JsonData { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::ValidationError(_) | AppError::InvalidId(_) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::SerdeJson(_) | AppError::Database(_) | AppError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::SerdeJson(_) => ErrorCode::SerdeJsonError,
            AppError::JsonExtractorRejection(_) | AppError::JsonData { .. } => {
                ErrorCode::JsonExtraction
            }
            AppError::ValidationError(_) => ErrorCode::ValidationError,
            AppError::InvalidId(_) => ErrorCode::InvalidId,
            AppError::BadRequest(_) => ErrorCode::BadRequest,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::Database(_) => ErrorCode::DatabaseError,
            AppError::InternalServerError(_) => ErrorCode::InternalError,
            AppError::ServiceUnavailable(_) => ErrorCode::ServiceUnavailable,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.error_code();

        let (message, details) = match self {
            AppError::SerdeJson(e) => {
                tracing::error!(error_code = code.code(), "JSON parsing error: {:?}", e);
                (code.default_message().to_string(), None)
            }
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(error_code = code.code(), "JSON extraction error: {:?}", e);
                (e.body_text(), None)
            }
            AppError::JsonData { message, details } => {
                tracing::info!(error_code = code.code(), "JSON data error: {}", message);
                (message, Some(details))
            }
            AppError::ValidationError(e) => {
                tracing::info!(error_code = code.code(), "Validation error: {:?}", e);
                (
                    code.default_message().to_string(),
                    Some(validation_details(&e)),
                )
            }
            AppError::InvalidId(id) => {
                tracing::info!(error_code = code.code(), id = %id, "Invalid identifier");
                (format!("{}: {}", code.default_message(), id), None)
            }
            AppError::BadRequest(msg) => {
                tracing::info!(error_code = code.code(), "Bad request: {}", msg);
                (msg, None)
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = code.code(), "Not found: {}", msg);
                (msg, None)
            }
            AppError::Database(msg) => {
                tracing::error!(error_code = code.code(), "Database error: {}", msg);
                (msg, None)
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(error_code = code.code(), "Internal server error: {}", msg);
                (msg, None)
            }
            AppError::ServiceUnavailable(msg) => {
                tracing::warn!(error_code = code.code(), "Service unavailable: {}", msg);
                (msg, None)
            }
        };

        let body = Json(ErrorResponse {
            code: code.code(),
            error: code.as_str().to_string(),
            message,
            details,
        });

        (status, body).into_response()
    }
}

/// Key used when the whole body has the wrong shape
const BODY_PATH: &str = "body";

impl From<serde_path_to_error::Error<serde_json::Error>> for AppError {
    /// Report the failing field path with a `missing`, `enum` or `type` code,
    /// in the same `details` layout as validation failures.
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let mut path = field_path(err.path());
        let message = err.into_inner().to_string();

        let code = if let Some(field) = missing_field(&message) {
            if !path.is_empty() {
                path.push('.');
            }
            path.push_str(field);
            "missing"
        } else if message.starts_with("unknown variant") {
            "enum"
        } else {
            "type"
        };

        if path.is_empty() {
            path.push_str(BODY_PATH);
        }

        let mut details = serde_json::Map::new();
        details.insert(
            path.clone(),
            json!([{ "code": code, "message": message.clone() }]),
        );
        AppError::JsonData {
            message: format!("{path}: {message}"),
            details: Value::Object(details),
        }
    }
}

fn field_path(path: &serde_path_to_error::Path) -> String {
    use serde_path_to_error::Segment;

    let mut out = String::new();
    for segment in path.iter() {
        match segment {
            Segment::Seq { index } => out.push_str(&format!("[{index}]")),
            Segment::Map { key } | Segment::Enum { variant: key } => {
                if !out.is_empty() {
                    out.push('.');
                }
                out.push_str(key);
            }
            _ => {
                if !out.is_empty() {
                    out.push('.');
                }
                out.push('?');
            }
        }
    }
    out
}

/// Field name from serde's "missing field `name`" message
fn missing_field(message: &str) -> Option<&str> {
    message.strip_prefix("missing field `")?.strip_suffix('`')
}

/// Flatten nested validation errors into a map keyed by field path.
///
/// Nested structs join with `.`, list entries use `[index]`:
/// `customer.email`, `items[0].quantity`.
pub fn validation_details(errors: &ValidationErrors) -> Value {
    let mut flat = BTreeMap::new();
    collect_field_errors(errors, None, &mut flat);
    serde_json::to_value(flat).unwrap_or(Value::Null)
}

fn collect_field_errors(
    errors: &ValidationErrors,
    prefix: Option<&str>,
    out: &mut BTreeMap<String, Vec<ValidationError>>,
) {
    for (field, kind) in errors.errors() {
        let path = match prefix {
            Some(prefix) => format!("{prefix}.{field}"),
            None => field.to_string(),
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                out.entry(path).or_default().extend(field_errors.iter().cloned());
            }
            ValidationErrorsKind::Struct(nested) => {
                collect_field_errors(nested, Some(&path), out);
            }
            ValidationErrorsKind::List(entries) => {
                for (index, nested) in entries {
                    collect_field_errors(nested, Some(&format!("{path}[{index}]")), out);
                }
            }
        }
    }
}

/// Build an error response from a status, message and code.
///
/// ```rust,ignore
/// use axum_helpers::errors::{error_response, ErrorCode};
/// use axum::http::StatusCode;
///
/// let response = error_response(
///     StatusCode::BAD_REQUEST,
///     "Invalid input".to_string(),
///     ErrorCode::ValidationError,
/// );
/// ```
pub fn error_response(status: StatusCode, message: String, error_code: ErrorCode) -> Response {
    let body = Json(ErrorResponse {
        code: error_code.code(),
        error: error_code.as_str().to_string(),
        message,
        details: None,
    });

    (status, body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Debug, Deserialize, Validate)]
    struct Line {
        #[validate(range(min = 1))]
        quantity: i64,
    }

    #[derive(Debug, Deserialize, Validate)]
    struct Buyer {
        #[validate(email)]
        email: String,
    }

    #[derive(Debug, Deserialize, Validate)]
    struct Checkout {
        #[validate(length(min = 1))]
        reference: String,
        #[validate(nested)]
        buyer: Buyer,
        #[validate(nested)]
        lines: Vec<Line>,
    }

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn data_error<T: serde::de::DeserializeOwned + std::fmt::Debug>(value: Value) -> AppError {
        serde_path_to_error::deserialize::<_, T>(value).unwrap_err().into()
    }

    #[test]
    fn test_data_error_reports_missing_nested_field() {
        let err = data_error::<Checkout>(serde_json::json!({
            "reference": "r-1",
            "buyer": {},
            "lines": []
        }));

        let AppError::JsonData { details, .. } = err else {
            panic!("expected data error");
        };
        assert_eq!(details["buyer.email"][0]["code"], "missing");
    }

    #[test]
    fn test_data_error_reports_wrong_type_in_list() {
        let err = data_error::<Checkout>(serde_json::json!({
            "reference": "r-1",
            "buyer": { "email": "a@example.com" },
            "lines": [{ "quantity": 1 }, { "quantity": "two" }]
        }));

        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.error_code(), ErrorCode::JsonExtraction);
        let AppError::JsonData { details, message } = err else {
            panic!("expected data error");
        };
        assert_eq!(details["lines[1].quantity"][0]["code"], "type");
        assert!(message.starts_with("lines[1].quantity: invalid type"));
    }

    #[test]
    fn test_data_error_for_non_object_body() {
        let err = data_error::<Buyer>(serde_json::json!([1, 2]));
        let AppError::JsonData { details, .. } = err else {
            panic!("expected data error");
        };
        assert_eq!(details["body"][0]["code"], "type");
    }

    #[tokio::test]
    async fn test_data_error_response_carries_details() {
        let response = data_error::<Buyer>(serde_json::json!({})).into_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["error"], "JSON_EXTRACTION");
        assert_eq!(body["details"]["email"][0]["code"], "missing");
    }

    #[test]
    fn test_validation_details_flattens_nested_paths() {
        let checkout = Checkout {
            reference: String::new(),
            buyer: Buyer {
                email: "not-an-email".into(),
            },
            lines: vec![Line { quantity: 2 }, Line { quantity: 0 }],
        };

        let details = validation_details(&checkout.validate().unwrap_err());

        assert_eq!(details["reference"][0]["code"], "length");
        assert_eq!(details["buyer.email"][0]["code"], "email");
        assert_eq!(details["lines[1].quantity"][0]["code"], "range");
        assert!(details.get("lines[0].quantity").is_none());
    }

    #[tokio::test]
    async fn test_validation_error_response() {
        let line = Line { quantity: 0 };
        let response = AppError::from(line.validate().unwrap_err()).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], 1001);
        assert_eq!(body["error"], "VALIDATION_ERROR");
        assert_eq!(body["details"]["quantity"][0]["code"], "range");
    }

    #[tokio::test]
    async fn test_invalid_id_response() {
        let response = AppError::InvalidId("xyz".into()).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "INVALID_ID");
        assert_eq!(body["message"], "Invalid identifier format: xyz");
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn test_status_mapping() {
        let cases = [
            (AppError::NotFound("gone".into()), StatusCode::NOT_FOUND, "NOT_FOUND"),
            (
                AppError::ServiceUnavailable("down".into()),
                StatusCode::SERVICE_UNAVAILABLE,
                "SERVICE_UNAVAILABLE",
            ),
            (
                AppError::Database("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_ERROR",
            ),
            (
                AppError::BadRequest("odd".into()),
                StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
            ),
        ];

        for (error, status, code) in cases {
            let response = error.into_response();
            assert_eq!(response.status(), status);
            assert_eq!(body_json(response).await["error"], code);
        }
    }

    #[tokio::test]
    async fn test_error_response_helper() {
        let response = error_response(
            StatusCode::NOT_FOUND,
            "missing".to_string(),
            ErrorCode::NotFound,
        );
        let body = body_json(response).await;
        assert_eq!(body["code"], 1004);
        assert_eq!(body["message"], "missing");
    }
}
