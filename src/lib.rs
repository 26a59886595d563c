//! Color Café: a searchable, filterable browser of the CSS named colors for
//! the terminal, with a copy-to-clipboard action per entry.
//!
//! The component core ([`ColorNameBrowser`]) is headless: it owns the master
//! list, the filter, the interaction mode, and the copy confirmations, and
//! it is driven entirely through named entry points plus an async message
//! channel. The terminal frontend ([`app`]) binds crossterm events to those
//! entry points and repaints full frames from the [`view::ListView`] model.

pub mod app;
pub mod browser;
pub mod clipboard;
pub mod colors;
pub mod context;
pub mod error;
pub mod input;
mod log_init;
pub mod message;
pub mod screen;
pub mod view;

pub use browser::{ColorNameBrowser, CopyState, InteractionMode};
pub use clipboard::{Clipboard, ClipboardError, SystemClipboard};
pub use context::{AppContext, TimerHandle};
pub use error::{CafeError, Result};
pub use log_init::init_logger;
pub use message::{Envelope, Msg, Source};
pub use view::ListView;

// Re-export the log crate so binaries can use color_cafe::log::info!, etc.
pub use log;
