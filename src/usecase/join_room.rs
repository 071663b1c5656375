//! UseCase: join a connection to a named room.

use std::sync::Arc;

use crate::domain::{ConnectionId, ConnectionRegistry, RoomName};

use super::error::JoinRoomError;

/// Adds a connection to a room, creating the room on demand.
pub struct JoinRoomUseCase {
    registry: Arc<dyn ConnectionRegistry>,
}

impl JoinRoomUseCase {
    pub fn new(registry: Arc<dyn ConnectionRegistry>) -> Self {
        Self { registry }
    }

    /// Add the connection to `room`.
    ///
    /// Duplicate joins are idempotent no-ops; unknown room names are
    /// created rather than rejected.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - the connection was added to the room
    /// * `Ok(false)` - the connection was already a member
    /// * `Err(JoinRoomError)` - the connection is not registered
    pub async fn execute(
        &self,
        connection_id: &ConnectionId,
        room: RoomName,
    ) -> Result<bool, JoinRoomError> {
        self.registry
            .join_room(connection_id, room)
            .await
            .map_err(|_| JoinRoomError::UnknownConnection(connection_id.as_str().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{RegistryError, Timestamp, registry::MockConnectionRegistry},
        infrastructure::registry::InMemoryConnectionRegistry,
    };
    use tokio::sync::mpsc;

    fn connection_id(id: &str) -> ConnectionId {
        ConnectionId::new(id.to_string()).unwrap()
    }

    fn room_name(name: &str) -> RoomName {
        RoomName::new(name.to_string()).unwrap()
    }

    async fn registry_with(ids: &[&str]) -> Arc<InMemoryConnectionRegistry> {
        let registry = Arc::new(InMemoryConnectionRegistry::new());
        for id in ids {
            let (tx, _rx) = mpsc::unbounded_channel();
            registry
                .register(connection_id(id), tx, Timestamp::new(0))
                .await
                .unwrap();
        }
        registry
    }

    #[tokio::test]
    async fn test_join_room_success() {
        // given:
        let registry = registry_with(&["a"]).await;
        let usecase = JoinRoomUseCase::new(registry.clone());

        // when:
        let result = usecase.execute(&connection_id("a"), room_name("lobby")).await;

        // then:
        assert_eq!(result, Ok(true));
        assert_eq!(registry.room_count().await, 1);
    }

    #[tokio::test]
    async fn test_join_room_is_idempotent() {
        // given:
        let registry = registry_with(&["a"]).await;
        let usecase = JoinRoomUseCase::new(registry.clone());
        usecase
            .execute(&connection_id("a"), room_name("lobby"))
            .await
            .unwrap();

        // when: joining the same room again
        let result = usecase.execute(&connection_id("a"), room_name("lobby")).await;

        // then: membership unchanged, no error
        assert_eq!(result, Ok(false));
        assert_eq!(registry.room_count().await, 1);
    }

    #[tokio::test]
    async fn test_join_room_unknown_connection_error() {
        // given: a registry that rejects the connection
        let mut mock = MockConnectionRegistry::new();
        mock.expect_join_room().returning(|id, _room| {
            Err(RegistryError::ConnectionNotFound(id.as_str().to_string()))
        });
        let usecase = JoinRoomUseCase::new(Arc::new(mock));

        // when:
        let result = usecase
            .execute(&connection_id("ghost"), room_name("lobby"))
            .await;

        // then:
        assert_eq!(
            result,
            Err(JoinRoomError::UnknownConnection("ghost".to_string()))
        );
    }
}
