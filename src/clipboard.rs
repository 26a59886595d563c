//! Clipboard boundary.
//!
//! The component only ever sees this trait; production writes through the
//! operating system clipboard, tests inject recording or failing fakes.

use async_trait::async_trait;
use thiserror::Error;

/// Errors from a clipboard write.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// No clipboard is available (headless session, missing backend).
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    /// The write itself was rejected.
    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
}

/// Asynchronous "write text to the system clipboard" capability.
///
/// Contract: given a string, resolves on success and errs on
/// permission/context failure.
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Writes through the operating system clipboard via `arboard`.
///
/// `arboard` is synchronous, so the write runs on the blocking pool.
pub struct SystemClipboard;

#[async_trait]
impl Clipboard for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_owned();
        tokio::task::spawn_blocking(move || {
            let mut clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            clipboard
                .set_text(text)
                .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
        })
        .await
        .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?
    }
}
