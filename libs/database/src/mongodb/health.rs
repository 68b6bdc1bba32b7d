use mongodb::{Database, bson::doc};
use std::time::Instant;

/// Result of probing the database
#[derive(Debug, Clone)]
pub struct HealthStatus {
    pub healthy: bool,
    /// Error text when unhealthy
    pub message: Option<String>,
    pub response_time_ms: u64,
}

/// Ping the database
pub async fn check_health(db: &Database) -> bool {
    db.run_command(doc! { "ping": 1 }).await.is_ok()
}

/// Ping the database, reporting latency and any error
pub async fn check_health_detailed(db: &Database) -> HealthStatus {
    let start = Instant::now();
    let result = db.run_command(doc! { "ping": 1 }).await;
    let response_time_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(_) => HealthStatus {
            healthy: true,
            message: None,
            response_time_ms,
        },
        Err(e) => HealthStatus {
            healthy: false,
            message: Some(e.to_string()),
            response_time_ms,
        },
    }
}

/// Names of up to `limit` collections in the database
pub async fn collection_names(
    db: &Database,
    limit: usize,
) -> Result<Vec<String>, mongodb::error::Error> {
    let mut names = db.list_collection_names().await?;
    names.sort();
    names.truncate(limit);
    Ok(names)
}
