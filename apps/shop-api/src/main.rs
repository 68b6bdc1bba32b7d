use axum_helpers::{cors_layer_from_env, server::create_production_app};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::mongodb::connect_from_config_with_retry;
use std::time::Duration;
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    // A missing or unreachable store degrades the data endpoints, it never stops startup
    let state = match config.mongodb.clone() {
        Some(mongodb) => {
            info!(url = %mongodb.redacted_url(), "Connecting to MongoDB");
            match connect_from_config_with_retry(&mongodb, None).await {
                Ok(client) => {
                    info!(database = mongodb.database(), "Connected to MongoDB");
                    AppState::connected(config, client, mongodb.database())
                }
                Err(e) => {
                    warn!(error = %e, "MongoDB unreachable, data endpoints will answer 503");
                    AppState::offline(config)
                }
            }
        }
        None => {
            warn!("DATABASE_URL is not set, data endpoints will answer 503");
            AppState::offline(config)
        }
    };

    let app = api::app(&state, cors_layer_from_env()?);

    info!("Starting Shop API with graceful shutdown (30s timeout)");

    let mongo_client = state.mongo_client.clone();
    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            if let Some(client) = mongo_client {
                info!("Shutting down: closing MongoDB connections");
                client.shutdown().await;
                info!("MongoDB connection closed");
            }
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Shop API shutdown complete");
    Ok(())
}
