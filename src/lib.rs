//! Room-scoped message relay server.
//!
//! Clients connect over WebSocket, join named rooms, and send messages that
//! are relayed to every other member of the target room. A small HTTP
//! surface serves the message form, persists submissions, and reports
//! health.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logger;
pub mod time;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::ServerConfig;
pub use ui::run_server;
