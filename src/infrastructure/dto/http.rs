//! HTTP request DTOs.

use serde::Deserialize;

/// Form body for `POST /message`
#[derive(Debug, Clone, Deserialize)]
pub struct MessageForm {
    pub message: String,
}
