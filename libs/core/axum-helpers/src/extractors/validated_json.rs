//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Body parse failures become `JSON_EXTRACTION` errors. When the JSON is
/// well formed but does not fit `T`, the details name the offending field.
/// Constraint failures become `VALIDATION_ERROR` with details keyed by field path.
///
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct Subscribe {
///     #[validate(email)]
///     email: String,
/// }
///
/// async fn subscribe(ValidatedJson(payload): ValidatedJson<Subscribe>) -> String {
///     format!("Subscribed {}", payload.email)
/// }
///
/// let app = Router::new().route("/subscribe", post(subscribe));
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state).await?;
        let data: T = serde_path_to_error::deserialize(value)?;
        data.validate()?;
        Ok(ValidatedJson(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request as HttpRequest, StatusCode, header},
        routing::post,
    };
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize, Validate)]
    struct Subscribe {
        #[validate(email)]
        email: String,
    }

    async fn subscribe(ValidatedJson(payload): ValidatedJson<Subscribe>) -> String {
        payload.email
    }

    fn app() -> Router {
        Router::new().route("/subscribe", post(subscribe))
    }

    fn request(body: &str) -> HttpRequest<Body> {
        HttpRequest::builder()
            .method("POST")
            .uri("/subscribe")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn accepts_valid_payload() {
        let response = app()
            .oneshot(request(r#"{"email":"a@example.com"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn rejects_constraint_violation() {
        let response = app()
            .oneshot(request(r#"{"email":"nope"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"], "VALIDATION_ERROR");
        assert_eq!(body["details"]["email"][0]["code"], "email");
    }

    #[tokio::test]
    async fn rejects_wrong_types_as_extraction_error() {
        let response = app().oneshot(request(r#"{"email":42}"#)).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = json_body(response).await;
        assert_eq!(body["error"], "JSON_EXTRACTION");
        assert_eq!(body["details"]["email"][0]["code"], "type");
    }

    #[tokio::test]
    async fn rejects_missing_field_with_its_path() {
        let response = app().oneshot(request("{}")).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = json_body(response).await;
        assert_eq!(body["error"], "JSON_EXTRACTION");
        assert_eq!(body["details"]["email"][0]["code"], "missing");
        assert_eq!(
            body["details"]["email"][0]["message"],
            "missing field `email`"
        );
    }

    #[tokio::test]
    async fn rejects_malformed_json() {
        let response = app().oneshot(request("{")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"], "JSON_EXTRACTION");
    }

    #[tokio::test]
    async fn rejects_missing_content_type() {
        let req = HttpRequest::builder()
            .method("POST")
            .uri("/subscribe")
            .body(Body::from(r#"{"email":"a@example.com"}"#))
            .unwrap();
        let response = app().oneshot(req).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
