//! Passport & Visa Fee Collection service
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────┐    ┌──────────┐
//! │ Fee Form │───▶│ Validate │───▶│  Words   │───▶│ Postgres │
//! │  (HTTP)  │    │ + Total  │    │ (Rupees) │    │  (row)   │
//! └──────────┘    └──────────┘    └──────────┘    └──────────┘
//! ```
//!
//! Usage: `passport_fee [--env dev] [--port 8080]`

use std::sync::Arc;

use anyhow::Context;
use passport_fee::application::ApplicationRepository;
use passport_fee::config::{AppConfig, CliArgs};
use passport_fee::db::Database;
use passport_fee::gateway::{self, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::from_env().context("Invalid command line")?;
    let mut app_config = AppConfig::load(&args.env).context("Failed to load configuration")?;
    if let Some(port) = args.port {
        app_config.gateway.port = port;
    }
    let _log_guard = passport_fee::logging::init_logging(&app_config.logging);

    tracing::info!(
        "Starting passport fee service in {} mode on port {}",
        args.env,
        app_config.gateway.port
    );

    // The form keeps working for previews when the database is down;
    // submissions answer 503 until restart.
    let pg_db = match Database::connect(&app_config.database).await {
        Ok(db) => {
            if app_config.database.init_schema {
                ApplicationRepository::init_schema(db.pool())
                    .await
                    .context("Failed to initialize passport_applications schema")?;
            }
            Some(Arc::new(db))
        }
        Err(e) => {
            tracing::error!("Failed to connect to PostgreSQL: {}", e);
            None
        }
    };

    let state = AppState::new(pg_db.clone());
    let served = gateway::run_server(&app_config.gateway, state, gateway::shutdown_signal()).await;

    if let Some(db) = pg_db {
        db.close().await;
    }

    served.context("Gateway server error")?;
    tracing::info!("Shutdown complete");
    Ok(())
}
