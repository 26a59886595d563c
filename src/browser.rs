//! The color-name browser component core.
//!
//! Headless by design: all filtering, mode, and confirmation state lives
//! here, and interaction arrives through the named entry points
//! ([`input_changed`](ColorNameBrowser::input_changed),
//! [`submit_query`](ColorNameBrowser::submit_query),
//! [`mode_changed`](ColorNameBrowser::mode_changed),
//! [`activate_item`](ColorNameBrowser::activate_item)). The terminal
//! frontend translates raw events into these calls and repaints from the
//! view model; timers and clipboard completions come back through
//! [`update`](ColorNameBrowser::update).

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::clipboard::Clipboard;
use crate::colors::{self, MASTER_LIST};
use crate::context::{AppContext, TimerHandle};
use crate::message::{Envelope, Msg};

/// Quiet period after the last keystroke before a live filter runs.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

/// How long a copy confirmation stays on an item before reverting.
pub const CONFIRMATION_DELAY: Duration = Duration::from_millis(2000);

/// How typing in the query field drives filtering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionMode {
    /// Filter on a debounce timer after each keystroke.
    #[default]
    Live,
    /// Filter only on explicit submission.
    Submit,
}

impl InteractionMode {
    /// Parse a mode-selector value ("live"/"submit", case-insensitive).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "live" => Some(Self::Live),
            "submit" => Some(Self::Submit),
            _ => None,
        }
    }
}

/// Display state of one item's copy action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyState {
    /// The name is on the clipboard.
    Copied,
    /// The clipboard write was rejected.
    Failed,
}

/// A transient confirmation shown on one item.
///
/// Dropping the struct cancels its revert timer, so replacing an item's
/// confirmation also retires the superseded timer.
struct Confirmation {
    generation: u64,
    state: CopyState,
    _revert: TimerHandle,
}

/// A searchable, filterable list of the CSS named colors with a
/// copy-to-clipboard action per entry.
pub struct ColorNameBrowser {
    ctx: AppContext<Msg>,
    clipboard: Arc<dyn Clipboard>,
    query: String,
    mode: InteractionMode,
    debounce: Option<TimerHandle>,
    filtered: Vec<&'static str>,
    confirmations: HashMap<&'static str, Confirmation>,
    copy_generation: u64,
    total: usize,
}

impl ColorNameBrowser {
    /// Build the component. The initial view shows the entire master list.
    pub fn new(ctx: AppContext<Msg>, clipboard: Arc<dyn Clipboard>) -> Self {
        let mut browser = Self {
            ctx,
            clipboard,
            query: String::new(),
            mode: InteractionMode::default(),
            debounce: None,
            filtered: Vec::new(),
            confirmations: HashMap::new(),
            copy_generation: 0,
            total: MASTER_LIST.len(),
        };
        browser.run_filter();
        browser
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Fixed at construction from the master list length.
    pub fn total_colors(&self) -> usize {
        self.total
    }

    /// The current filtered view, in master-list order.
    pub fn filtered(&self) -> &[&'static str] {
        &self.filtered
    }

    /// The query field's value as last reported.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current confirmation state of an item, if any.
    pub fn copy_state(&self, name: &str) -> Option<CopyState> {
        self.confirmations.get(name).map(|c| c.state)
    }

    /// Entry point: the query field's value changed.
    ///
    /// In live mode each call supersedes any unfired debounce timer; the
    /// filter runs with the value stored at fire time. In submit mode the
    /// value is stored and nothing else happens.
    pub fn input_changed(&mut self, value: &str) {
        self.set_query(value);
        if self.mode == InteractionMode::Live {
            self.debounce = Some(self.ctx.set_timer(DEBOUNCE_DELAY, Msg::DebounceElapsed));
        }
    }

    /// Entry point: explicit submission with the field's value at submit time.
    pub fn submit_query(&mut self, value: &str) {
        self.set_query(value);
        self.debounce = None;
        self.run_filter();
    }

    /// Entry point: the mode selector changed.
    ///
    /// Unknown values are ignored; switching to the current mode is a no-op.
    pub fn mode_changed(&mut self, raw: &str) {
        let Some(mode) = InteractionMode::parse(raw) else {
            log::debug!("ignoring unknown interaction mode {raw:?}");
            return;
        };
        if mode == self.mode {
            return;
        }
        if mode == InteractionMode::Submit {
            // A pending live filter must not fire once keystrokes are inert.
            self.debounce = None;
        }
        self.mode = mode;
        log::info!("interaction mode switched to {mode:?}");
    }

    /// Entry point: the copy action on an item was activated.
    ///
    /// Writes the literal color name (never the decorated label) to the
    /// clipboard; the outcome comes back as [`Msg::CopyCompleted`].
    pub fn activate_item(&mut self, name: &str) {
        let Some(name) = colors::canonical(name) else {
            log::warn!("copy requested for unknown color {name:?}");
            return;
        };
        self.copy_generation += 1;
        let generation = self.copy_generation;
        let clipboard = Arc::clone(&self.clipboard);
        let ctx = self.ctx.clone();
        tokio::spawn(async move {
            let outcome = clipboard.write_text(name).await;
            ctx.post(Msg::CopyCompleted {
                name,
                generation,
                outcome,
            });
        });
    }

    /// Handle a message produced by a timer or a spawned task.
    pub fn update(&mut self, envelope: Envelope<Msg>) {
        match envelope.message {
            Msg::DebounceElapsed => {
                self.debounce = None;
                self.run_filter();
            }
            Msg::CopyCompleted {
                name,
                generation,
                outcome,
            } => self.finish_copy(name, generation, outcome),
            Msg::ConfirmationExpired { name, generation } => {
                // Stale deadlines from a superseded activation no-op.
                if self
                    .confirmations
                    .get(name)
                    .is_some_and(|c| c.generation == generation)
                {
                    self.confirmations.remove(name);
                }
            }
        }
    }

    fn finish_copy(
        &mut self,
        name: &'static str,
        generation: u64,
        outcome: Result<(), crate::clipboard::ClipboardError>,
    ) {
        if self
            .confirmations
            .get(name)
            .is_some_and(|c| c.generation > generation)
        {
            return;
        }
        let state = match outcome {
            Ok(()) => CopyState::Copied,
            Err(err) => {
                log::warn!("clipboard write for {name} failed: {err}");
                CopyState::Failed
            }
        };
        let revert = self
            .ctx
            .set_timer(CONFIRMATION_DELAY, Msg::ConfirmationExpired { name, generation });
        self.confirmations.insert(
            name,
            Confirmation {
                generation,
                state,
                _revert: revert,
            },
        );
    }

    fn set_query(&mut self, value: &str) {
        self.query.clear();
        self.query.push_str(value);
    }

    /// Recompute the filtered view from the master list: case-sensitive
    /// literal substring containment, master-list order preserved.
    fn run_filter(&mut self) {
        self.filtered = MASTER_LIST
            .iter()
            .copied()
            .filter(|name| name.contains(self.query.as_str()))
            .collect();
        log::debug!(
            "filter {:?} matched {} of {} colors",
            self.query,
            self.filtered.len(),
            self.total
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parse_is_case_insensitive() {
        assert_eq!(InteractionMode::parse("live"), Some(InteractionMode::Live));
        assert_eq!(InteractionMode::parse("LIVE"), Some(InteractionMode::Live));
        assert_eq!(
            InteractionMode::parse("Submit"),
            Some(InteractionMode::Submit)
        );
        assert_eq!(InteractionMode::parse("hover"), None);
        assert_eq!(InteractionMode::parse(""), None);
    }

    #[test]
    fn test_default_mode_is_live() {
        assert_eq!(InteractionMode::default(), InteractionMode::Live);
    }
}
