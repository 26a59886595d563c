//! Message envelope for events delivered through the component's channel.
//!
//! The browser core never blocks: timers and the clipboard task report back
//! by sending messages, and the envelope records where each one came from.

use crate::clipboard::ClipboardError;

/// Origin of a delivered message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    /// Posted directly (e.g. by a spawned task).
    Task,
    /// Produced by a scheduled timer.
    Timer,
}

/// Envelope wrapping a message with its origin.
#[derive(Debug)]
pub struct Envelope<M> {
    /// The actual message payload.
    pub message: M,
    /// Where the message was produced.
    pub source: Source,
}

impl<M> Envelope<M> {
    pub fn new(message: M, source: Source) -> Self {
        Self { message, source }
    }
}

/// Asynchronous messages handled by [`crate::browser::ColorNameBrowser`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The live-filter debounce window elapsed without a newer keystroke.
    DebounceElapsed,

    /// A clipboard write for an activated item finished.
    CopyCompleted {
        name: &'static str,
        generation: u64,
        outcome: Result<(), ClipboardError>,
    },

    /// An item's copy confirmation reached its display deadline.
    ConfirmationExpired { name: &'static str, generation: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_records_source() {
        let envelope = Envelope::new(Msg::DebounceElapsed, Source::Timer);
        assert_eq!(envelope.message, Msg::DebounceElapsed);
        assert_eq!(envelope.source, Source::Timer);
    }
}
