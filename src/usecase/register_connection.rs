//! UseCase: register a newly connected client.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;

use crate::{
    domain::{ConnectionId, ConnectionRegistry, Timestamp},
    time::unix_timestamp_millis,
};

use super::error::RegisterError;

/// Registers a connection and its outbound channel with the registry.
pub struct RegisterConnectionUseCase {
    registry: Arc<dyn ConnectionRegistry>,
}

impl RegisterConnectionUseCase {
    pub fn new(registry: Arc<dyn ConnectionRegistry>) -> Self {
        Self { registry }
    }

    /// Register `connection_id` with its outbound channel.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - the connection is registered
    /// * `Err(RegisterError)` - the identifier is already in use
    pub async fn execute(
        &self,
        connection_id: ConnectionId,
        sender: UnboundedSender<String>,
    ) -> Result<(), RegisterError> {
        let id_str = connection_id.as_str().to_string();
        let connected_at = Timestamp::new(unix_timestamp_millis());
        self.registry
            .register(connection_id, sender, connected_at)
            .await
            .map_err(|_| RegisterError::DuplicateConnection(id_str))
    }
}
