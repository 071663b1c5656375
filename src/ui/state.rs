//! Shared application state.

use std::sync::Arc;

use crate::{domain::ConnectionRegistry, infrastructure::persistence::MessageStore};

/// State shared across HTTP and WebSocket handlers.
///
/// The registry is injected as a trait object so handlers never depend on
/// the concrete in-memory implementation; its lifecycle is tied to the
/// server, not to any global.
pub struct AppState {
    /// Connection and room membership registry
    pub registry: Arc<dyn ConnectionRegistry>,
    /// File store for the HTTP form message
    pub store: MessageStore,
}
