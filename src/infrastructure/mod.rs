//! Infrastructure layer: wire DTOs, the in-memory registry, and
//! file persistence for the HTTP form.

pub mod dto;
pub mod persistence;
pub mod registry;
