//! Room-scoped message relay server.
//!
//! Relays chat messages between WebSocket clients that share a room and
//! serves the message form over HTTP.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin server
//! ```

use roomcast::{ServerConfig, logger::setup_logger};

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    // Run the server with the compiled-in defaults
    if let Err(e) = roomcast::run_server(ServerConfig::default()).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
