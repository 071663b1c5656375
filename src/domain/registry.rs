//! Connection registry abstraction.
//!
//! The use-case layer depends on this trait; the concrete in-memory
//! implementation lives in the infrastructure layer (dependency inversion).

use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedSender;

use super::{
    error::RegistryError,
    value_object::{ConnectionId, RoomName, Timestamp},
};

/// Tracks live connections, their outbound channels, and room membership.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConnectionRegistry: Send + Sync {
    /// Register a new connection with its outbound channel.
    async fn register(
        &self,
        id: ConnectionId,
        sender: UnboundedSender<String>,
        connected_at: Timestamp,
    ) -> Result<(), RegistryError>;

    /// Remove a connection and all of its room memberships. Returns the
    /// names of the rooms the connection was a member of.
    async fn deregister(&self, id: &ConnectionId) -> Result<Vec<RoomName>, RegistryError>;

    /// Add a connection to a room, creating the room on demand. Returns
    /// `false` if the connection was already a member.
    async fn join_room(&self, id: &ConnectionId, room: RoomName) -> Result<bool, RegistryError>;

    /// Members of `room` other than `exclude`. Unknown rooms yield an
    /// empty list.
    async fn members_except(&self, room: &RoomName, exclude: &ConnectionId) -> Vec<ConnectionId>;

    /// Outbound channel of a connection, if it is still registered.
    async fn sender_for(&self, id: &ConnectionId) -> Option<UnboundedSender<String>>;

    /// Number of registered connections.
    async fn connection_count(&self) -> usize;

    /// Number of live (non-empty) rooms.
    async fn room_count(&self) -> usize;
}
