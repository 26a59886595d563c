//! Shared test doubles and drivers for the integration suites.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::mpsc::{self, UnboundedReceiver};

use color_cafe::{AppContext, Clipboard, ClipboardError, ColorNameBrowser, Envelope, Msg};

/// Records every written string; always succeeds.
#[derive(Default)]
pub struct RecordingClipboard {
    writes: Mutex<Vec<String>>,
}

impl RecordingClipboard {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl Clipboard for RecordingClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Always rejects the write, like a clipboard outside a secure context.
pub struct FailingClipboard;

#[async_trait]
impl Clipboard for FailingClipboard {
    async fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::WriteFailed("permission denied".into()))
    }
}

/// A browser wired to a fresh channel, plus the receiving end.
pub fn browser_with(
    clipboard: Arc<dyn Clipboard>,
) -> (ColorNameBrowser, UnboundedReceiver<Envelope<Msg>>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ColorNameBrowser::new(AppContext::new(tx), clipboard), rx)
}

/// Pump pending messages into the browser until the channel runs dry.
/// Returns the number of messages handled.
pub async fn drain(
    browser: &mut ColorNameBrowser,
    rx: &mut UnboundedReceiver<Envelope<Msg>>,
) -> usize {
    let mut handled = 0;
    loop {
        tokio::task::yield_now().await;
        match rx.try_recv() {
            Ok(envelope) => {
                browser.update(envelope);
                handled += 1;
            }
            Err(_) => break,
        }
    }
    handled
}
