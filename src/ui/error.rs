//! HTTP error mapping.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::domain::ValueObjectError;

/// Errors surfaced on the HTTP response path.
///
/// Each kind maps to a distinct status code: validation failures to 400,
/// persistence failures to 500, unmatched routes to the fixed 404 page.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or invalid request payload
    #[error("invalid request: {0}")]
    Validation(#[from] ValueObjectError),

    /// Persistence failure
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// No matching route
    #[error("not found")]
    NotFound,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(e) => {
                (StatusCode::BAD_REQUEST, e.to_string()).into_response()
            }
            ApiError::Io(e) => {
                tracing::error!("Persistence failure: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            }
            ApiError::NotFound => {
                (StatusCode::NOT_FOUND, Html("<h1>Page not found.</h1>")).into_response()
            }
        }
    }
}
