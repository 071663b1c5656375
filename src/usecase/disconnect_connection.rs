//! UseCase: disconnect a connection.

use std::sync::Arc;

use crate::domain::{ConnectionId, ConnectionRegistry, RoomName};

use super::error::DisconnectError;

/// Removes a connection from the registry and from every room it
/// belonged to.
pub struct DisconnectConnectionUseCase {
    registry: Arc<dyn ConnectionRegistry>,
}

impl DisconnectConnectionUseCase {
    pub fn new(registry: Arc<dyn ConnectionRegistry>) -> Self {
        Self { registry }
    }

    /// Remove the connection and its room memberships.
    ///
    /// Rooms emptied by the removal are pruned; no notification is sent to
    /// remaining members.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<RoomName>)` - the rooms the connection was a member of
    /// * `Err(DisconnectError)` - the connection is not registered
    pub async fn execute(
        &self,
        connection_id: &ConnectionId,
    ) -> Result<Vec<RoomName>, DisconnectError> {
        self.registry
            .deregister(connection_id)
            .await
            .map_err(|_| DisconnectError::UnknownConnection(connection_id.as_str().to_string()))
    }
}
