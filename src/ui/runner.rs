//! Server runtime: router assembly, listener, graceful shutdown.

use std::{net::SocketAddr, sync::Arc};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{
    config::ServerConfig,
    domain::ConnectionRegistry,
    infrastructure::{persistence::MessageStore, registry::InMemoryConnectionRegistry},
    ui::{
        handler::{health_check, index, not_found, submit_message, websocket_handler},
        signal::shutdown_signal,
        state::AppState,
    },
};

/// Assemble the router over the given state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/message", post(submit_message))
        .route("/api/health", get(health_check))
        .route("/ws", get(websocket_handler))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the server until a shutdown signal is received.
pub async fn run_server(config: ServerConfig) -> Result<(), std::io::Error> {
    let registry: Arc<dyn ConnectionRegistry> = Arc::new(InMemoryConnectionRegistry::new());
    let store = MessageStore::new(config.message_path.clone());
    let state = Arc::new(AppState { registry, store });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}
