//! Channel handle and timer scheduling for the browser component.
//!
//! `AppContext` is the component's only way to reach the future: it posts
//! messages into the event loop's channel and schedules one-shot timers.
//! Timers return a [`TimerHandle`] whose drop cancels the pending callback;
//! debounce supersession and teardown both rely on that.

use std::time::Duration;

use tokio::sync::{mpsc, oneshot};

use crate::message::{Envelope, Source};

/// Context for posting messages and scheduling timers.
///
/// Clone this to share it with async tasks; the underlying channel is
/// designed to be shared across tasks.
#[derive(Clone)]
pub struct AppContext<M> {
    sender: mpsc::UnboundedSender<Envelope<M>>,
}

impl<M> AppContext<M> {
    /// Create a new context with the given message sender.
    pub fn new(sender: mpsc::UnboundedSender<Envelope<M>>) -> Self {
        Self { sender }
    }
}

impl<M: Send + 'static> AppContext<M> {
    /// Post a message to be processed on the next event loop tick.
    pub fn post(&self, message: M) {
        let _ = self.sender.send(Envelope::new(message, Source::Task));
    }

    /// Schedule a one-shot timer that delivers a message after `delay`.
    ///
    /// Dropping (or canceling) the returned handle before the delay elapses
    /// means the message is never sent.
    pub fn set_timer(&self, delay: Duration, message: M) -> TimerHandle {
        let sender = self.sender.clone();
        let (cancel_tx, cancel_rx) = oneshot::channel();

        tokio::spawn(async move {
            tokio::select! {
                _ = tokio::time::sleep(delay) => {
                    let _ = sender.send(Envelope::new(message, Source::Timer));
                }
                _ = cancel_rx => {} // Canceled
            }
        });

        TimerHandle {
            cancel_tx: Some(cancel_tx),
        }
    }
}

/// Handle to cancel a pending one-shot timer.
///
/// The timer is automatically canceled when this handle is dropped.
pub struct TimerHandle {
    cancel_tx: Option<oneshot::Sender<()>>,
}

impl TimerHandle {
    /// Cancel the timer, preventing its message from being sent.
    pub fn cancel(&mut self) {
        if let Some(tx) = self.cancel_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
