//! Root banner and the `/test` connectivity report.

use axum::{Json, Router, extract::State, routing::get};
use database::common::truncate_chars;
use database::mongodb::collection_names;
use serde::Serialize;

use crate::state::AppState;

/// Collections listed in the report at most
const MAX_COLLECTIONS: usize = 10;

/// Length of error text embedded in the report
const ERROR_PREVIEW_CHARS: usize = 50;

#[derive(Debug, Serialize)]
pub struct Banner {
    pub message: &'static str,
}

/// Connectivity report; produced even when the store is down
#[derive(Debug, Serialize)]
pub struct Diagnostics {
    pub backend: String,
    pub database: String,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub connection_status: String,
    pub collections: Vec<String>,
}

async fn banner() -> Json<Banner> {
    Json(Banner {
        message: "YOTS TECH-SHOP backend running",
    })
}

async fn diagnostics(State(state): State<AppState>) -> Json<Diagnostics> {
    let database_url = if state.config.database_url_set() {
        "✅ Set"
    } else {
        "❌ Not Set"
    };

    let database = if state.db.is_none() && state.config.database_url_set() {
        "⚠️ Configured but not connected"
    } else {
        "❌ Not Available"
    };

    let mut report = Diagnostics {
        backend: "✅ Running".to_string(),
        database: database.to_string(),
        database_url: Some(database_url.to_string()),
        database_name: None,
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    if let Some(db) = state.db.as_ref() {
        report.database_name = Some(db.name().to_string());
        report.connection_status = "Connected".to_string();

        match collection_names(db, MAX_COLLECTIONS).await {
            Ok(names) => {
                report.collections = names;
                report.database = "✅ Connected & Working".to_string();
            }
            Err(e) => {
                tracing::warn!(error = %e, "Listing collections failed");
                report.database = format!(
                    "⚠️ Connected but Error: {}",
                    truncate_chars(&e.to_string(), ERROR_PREVIEW_CHARS)
                );
            }
        }
    }

    Json(report)
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(banner))
        .route("/test", get(diagnostics))
        .with_state(state)
}
