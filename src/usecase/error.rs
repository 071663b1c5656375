//! Use-case layer error definitions.

use thiserror::Error;

/// Errors from registering a connection
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegisterError {
    /// A connection with the same identifier is already registered
    #[error("connection '{0}' is already registered")]
    DuplicateConnection(String),
}

/// Errors from joining a room
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JoinRoomError {
    /// The joining connection is not registered
    #[error("unknown connection '{0}'")]
    UnknownConnection(String),
}

/// Errors from disconnecting a connection
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DisconnectError {
    /// The connection is not registered
    #[error("unknown connection '{0}'")]
    UnknownConnection(String),
}
