//! Message persistence for the HTTP form.

use std::path::{Path, PathBuf};

/// File-backed store for the single submitted message.
///
/// Each write replaces the previous content; nothing else is persisted.
pub struct MessageStore {
    path: PathBuf,
}

impl MessageStore {
    /// Create a store writing to `path`
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Write `text` verbatim, replacing any previous content.
    pub async fn persist(&self, text: &str) -> Result<(), std::io::Error> {
        tokio::fs::write(&self.path, text).await
    }

    /// Path the message is written to
    pub fn path(&self) -> &Path {
        &self.path
    }
}
