use axum::http::{HeaderValue, Method, header};
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;

/// Comma-separated list of allowed origins; unset or `*` allows any origin
pub const CORS_ALLOWED_ORIGIN_ENV: &str = "CORS_ALLOWED_ORIGIN";

/// CORS layer restricted to `allowed_origins`.
///
/// Allows GET, POST and OPTIONS with Content-Type/Accept headers,
/// credentials, and a 1 hour max age.
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

/// CORS layer that allows any origin, method and header
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}

/// Build the CORS layer from [`CORS_ALLOWED_ORIGIN_ENV`].
///
/// Unset, empty or `*` yields the permissive layer, so a storefront on any
/// origin can call the API. Otherwise the value is parsed as a
/// comma-separated origin list.
pub fn cors_layer_from_env() -> io::Result<CorsLayer> {
    cors_layer_from_value(std::env::var(CORS_ALLOWED_ORIGIN_ENV).ok().as_deref())
}

fn cors_layer_from_value(value: Option<&str>) -> io::Result<CorsLayer> {
    let origins = match value.map(str::trim) {
        None | Some("") | Some("*") => {
            info!("CORS configured to allow any origin");
            return Ok(create_permissive_cors_layer());
        }
        Some(origins) => origins,
    };

    let allowed_origins = parse_origins(origins)?;
    info!(origins = %origins, "CORS configured with allowed origins");
    Ok(create_cors_layer(allowed_origins))
}

fn parse_origins(origins: &str) -> io::Result<Vec<HeaderValue>> {
    origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid {CORS_ALLOWED_ORIGIN_ENV} value: {e}"),
            )
        })
}
