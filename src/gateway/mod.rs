pub mod handlers;
pub mod state;
pub mod types;

use axum::{
    Router,
    routing::{get, post},
};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::GatewayConfig;
use state::AppState;

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(handlers::health_check))
        .route("/api/v1/amount-in-words", get(handlers::amount_in_words))
        .route(
            "/api/v1/applications",
            post(handlers::submit_application).get(handlers::list_applications),
        )
        .route(
            "/api/v1/applications/preview",
            post(handlers::preview_application),
        )
        .route("/api/v1/applications/{id}", get(handlers::get_application))
        .with_state(Arc::new(state))
}

/// Serve HTTP until `shutdown` resolves
pub async fn run_server(
    config: &GatewayConfig,
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let app = router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await.map_err(|e| {
        tracing::error!(
            "Failed to bind to {}: {} (port {} may already be in use)",
            addr,
            e,
            config.port
        );
        e
    })?;

    tracing::info!("Gateway listening on http://{}", addr);
    tracing::info!("Amount in words: GET /api/v1/amount-in-words?amount=<rupees>");
    tracing::info!("Applications:    POST /api/v1/applications");
    tracing::info!("By case number:  GET  /api/v1/applications?case_no=<case>");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Gateway stopped");
    Ok(())
}

/// Resolves on Ctrl-C
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!("Failed to listen for shutdown signal: {}", e),
    }
}
