//! UI layer: the HTTP/WebSocket surface and the server runtime.

pub mod error;
pub mod handler;
mod runner;
mod signal;
pub mod state;

pub use runner::{router, run_server};
