//! HTTP endpoint handlers.

use std::sync::Arc;

use axum::{
    Form, Json,
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse},
};

use crate::{
    domain::MessageText,
    infrastructure::dto::http::MessageForm,
    ui::{error::ApiError, state::AppState},
};

/// Static page served at `/`: the message form.
const INDEX_PAGE: &str = concat!(
    "<html>",
    "<head><title>Enter Message</title></head>",
    "<body><form method=\"POST\" action=\"/message\">",
    "<input type=\"text\" name=\"message\"><button>Send</button>",
    "</form></body>",
    "</html>",
);

/// Serve the message form
pub async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Persist the submitted form field and redirect to `/`.
///
/// The write result is propagated: an empty field yields a 400 and a
/// failed write a 500, rather than redirecting unconditionally.
pub async fn submit_message(
    State(state): State<Arc<AppState>>,
    Form(form): Form<MessageForm>,
) -> Result<impl IntoResponse, ApiError> {
    let text = MessageText::new(form.message)?;
    state.store.persist(text.as_str()).await?;
    tracing::info!(
        "Persisted submitted message ({} bytes) to {}",
        text.as_str().len(),
        state.store.path().display()
    );
    Ok((StatusCode::FOUND, [(header::LOCATION, "/")]))
}

/// Fallback for unmatched routes
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
