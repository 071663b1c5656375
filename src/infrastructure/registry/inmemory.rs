//! In-memory connection registry.
//!
//! HashMap-backed implementation of the domain `ConnectionRegistry` trait.
//! All state lives behind tokio mutexes; the registry is handed to handlers
//! as an `Arc<dyn ConnectionRegistry>` with its lifecycle tied to server
//! start and stop.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::{Mutex, mpsc::UnboundedSender};

use crate::{
    domain::{
        ConnectionId, ConnectionRegistry, RegistryError, RoomDirectory, RoomName, Timestamp,
    },
    time::unix_timestamp_millis,
};

/// Per-connection bookkeeping
struct ConnectionHandle {
    /// Outbound message channel
    sender: UnboundedSender<String>,
    /// Timestamp when the connection registered
    connected_at: Timestamp,
}

/// In-memory ConnectionRegistry implementation
pub struct InMemoryConnectionRegistry {
    /// Registered connections keyed by identifier
    connections: Mutex<HashMap<ConnectionId, ConnectionHandle>>,
    /// Room membership, pruned on empty
    directory: Mutex<RoomDirectory>,
}

impl InMemoryConnectionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(HashMap::new()),
            directory: Mutex::new(RoomDirectory::new()),
        }
    }
}

impl Default for InMemoryConnectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConnectionRegistry for InMemoryConnectionRegistry {
    async fn register(
        &self,
        id: ConnectionId,
        sender: UnboundedSender<String>,
        connected_at: Timestamp,
    ) -> Result<(), RegistryError> {
        let mut connections = self.connections.lock().await;
        if connections.contains_key(&id) {
            return Err(RegistryError::DuplicateConnection(id.into_string()));
        }
        connections.insert(
            id,
            ConnectionHandle {
                sender,
                connected_at,
            },
        );
        Ok(())
    }

    async fn deregister(&self, id: &ConnectionId) -> Result<Vec<RoomName>, RegistryError> {
        let handle = {
            let mut connections = self.connections.lock().await;
            connections
                .remove(id)
                .ok_or_else(|| RegistryError::ConnectionNotFound(id.as_str().to_string()))?
        };
        tracing::debug!(
            "Connection '{}' deregistered (connected_at: {})",
            id,
            handle.connected_at
        );

        let mut directory = self.directory.lock().await;
        Ok(directory.leave_all(id))
    }

    async fn join_room(&self, id: &ConnectionId, room: RoomName) -> Result<bool, RegistryError> {
        {
            let connections = self.connections.lock().await;
            if !connections.contains_key(id) {
                return Err(RegistryError::ConnectionNotFound(id.as_str().to_string()));
            }
        }

        let mut directory = self.directory.lock().await;
        let now = Timestamp::new(unix_timestamp_millis());
        Ok(directory.join(room, id.clone(), now))
    }

    async fn members_except(&self, room: &RoomName, exclude: &ConnectionId) -> Vec<ConnectionId> {
        let directory = self.directory.lock().await;
        directory.members_except(room, exclude)
    }

    async fn sender_for(&self, id: &ConnectionId) -> Option<UnboundedSender<String>> {
        let connections = self.connections.lock().await;
        connections.get(id).map(|handle| handle.sender.clone())
    }

    async fn connection_count(&self) -> usize {
        let connections = self.connections.lock().await;
        connections.len()
    }

    async fn room_count(&self) -> usize {
        let directory = self.directory.lock().await;
        directory.room_count()
    }
}
