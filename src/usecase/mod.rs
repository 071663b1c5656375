//! Use-case layer.
//!
//! Business operations invoked by the UI layer, expressed over the domain
//! registry abstraction.

pub mod disconnect_connection;
pub mod error;
pub mod join_room;
pub mod register_connection;
pub mod relay_message;

pub use disconnect_connection::DisconnectConnectionUseCase;
pub use error::{DisconnectError, JoinRoomError, RegisterError};
pub use join_room::JoinRoomUseCase;
pub use register_connection::RegisterConnectionUseCase;
pub use relay_message::RelayMessageUseCase;
