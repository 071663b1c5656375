//! UseCase: relay a message to the other members of a room.

use std::sync::Arc;

use crate::domain::{ConnectionId, ConnectionRegistry, RoomName};

/// Resolves the delivery targets for a room-scoped message.
pub struct RelayMessageUseCase {
    registry: Arc<dyn ConnectionRegistry>,
}

impl RelayMessageUseCase {
    pub fn new(registry: Arc<dyn ConnectionRegistry>) -> Self {
        Self { registry }
    }

    /// Resolve the relay targets for a message to `room`.
    ///
    /// Sender membership is not checked; the sender is always excluded from
    /// the result. Unknown or empty rooms yield an empty list rather than
    /// an error.
    pub async fn execute(&self, sender_id: &ConnectionId, room: &RoomName) -> Vec<ConnectionId> {
        self.registry.members_except(room, sender_id).await
    }
}
