use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::handlers;
use crate::services::pay_service::{CALLBACK_PATH, RESULT_PATH};

pub fn build_router() -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route(CALLBACK_PATH, post(handlers::payment::payment_callback))
        .route(RESULT_PATH, get(handlers::payment::payment_success))
        .layer(TraceLayer::new_for_http())
}

pub async fn run_server(
    listener: TcpListener,
    mut shutdown_signal: broadcast::Receiver<()>,
) -> anyhow::Result<()> {
    info!("HTTP server listening on {}", listener.local_addr()?);

    axum::serve(listener, build_router())
        .with_graceful_shutdown(async move {
            let _ = shutdown_signal.recv().await;
            info!("HTTP server received shutdown signal, stopping...");
        })
        .await?;
    Ok(())
}
