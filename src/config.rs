//! Server configuration.

use std::path::PathBuf;

/// Default TCP port the server listens on.
pub const DEFAULT_PORT: u16 = 3000;

/// Default path the submitted form message is written to.
pub const DEFAULT_MESSAGE_PATH: &str = "message.txt";

/// Server configuration.
///
/// There is no CLI surface; tests and embedders construct this directly,
/// the server binary uses the compiled-in defaults.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port to listen on.
    pub port: u16,
    /// File the submitted form message is written to (overwrite semantics).
    pub message_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            message_path: PathBuf::from(DEFAULT_MESSAGE_PATH),
        }
    }
}
