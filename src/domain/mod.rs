//! Domain layer for the relay server.
//!
//! This module contains the room/connection model and the registry
//! abstraction, independent of transport and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod factory;
pub mod registry;
pub mod value_object;

pub use entity::{Room, RoomDirectory};
pub use error::{RegistryError, ValueObjectError};
pub use factory::ConnectionIdFactory;
pub use registry::ConnectionRegistry;
pub use value_object::{ConnectionId, MessageText, RoomName, Timestamp};
