//! Terminal frontend: binds crossterm events to the browser component.
//!
//! The event loop uses `tokio::select!` to poll terminal events via
//! `crossterm::event::EventStream` and async messages (timers, clipboard
//! completions) via a `tokio::sync::mpsc` channel. All component state is
//! mutated here, on the loop; spawned tasks only send messages.

use std::io::{BufWriter, Write};
use std::ops::Range;
use std::sync::Arc;

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyModifiers,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::{cursor, execute, terminal};
use futures::StreamExt;
use tokio::sync::mpsc;

use crate::browser::{ColorNameBrowser, InteractionMode};
use crate::clipboard::Clipboard;
use crate::context::AppContext;
use crate::error::{CafeError, Result};
use crate::input::QueryInput;
use crate::screen::{self, CHROME_ROWS, FrameParams, HEADER_ROW, LIST_TOP, QUERY_ROW};
use crate::view::ListView;

/// Smallest layout that fits the required chrome plus one list row.
pub const MIN_COLS: u16 = 24;
pub const MIN_ROWS: u16 = CHROME_ROWS + 1;

/// Which part of the frame receives key events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Focus {
    Query,
    List,
}

/// The application: browser core plus frontend-only state.
struct ColorCafe {
    browser: ColorNameBrowser,
    input: QueryInput,
    focus: Focus,
    selected: usize,
    scroll: usize,
    should_quit: bool,
    mode_selector: Range<u16>,
    filter_button: Option<Range<u16>>,
}

/// Run the application against the given clipboard until the user quits.
///
/// Raw mode, the alternate screen, and mouse capture are enabled on entry
/// and restored on the way out, error or not.
pub async fn run(clipboard: Arc<dyn Clipboard>) -> Result<()> {
    let mut stdout = std::io::stdout();
    terminal::enable_raw_mode()?;
    execute!(
        stdout,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        EnableMouseCapture
    )?;

    let result = event_loop(clipboard).await;

    execute!(
        stdout,
        DisableMouseCapture,
        cursor::Show,
        terminal::LeaveAlternateScreen
    )?;
    terminal::disable_raw_mode()?;

    result
}

async fn event_loop(clipboard: Arc<dyn Clipboard>) -> Result<()> {
    let (mut cols, mut rows) = terminal::size()?;
    if cols < MIN_COLS || rows < MIN_ROWS {
        return Err(CafeError::TerminalTooSmall {
            cols,
            rows,
            min_cols: MIN_COLS,
            min_rows: MIN_ROWS,
        });
    }

    let (tx, mut rx) = mpsc::unbounded_channel();
    let ctx = AppContext::new(tx);
    let mut app = ColorCafe::new(ColorNameBrowser::new(ctx, clipboard));

    let mut event_stream = EventStream::new();
    let mut out = BufWriter::new(std::io::stdout());

    app.draw(&mut out, cols, rows)?;

    while !app.should_quit {
        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        app.on_key(key_event.code, key_event.modifiers);
                    }
                    Some(Ok(Event::Mouse(mouse_event))) => {
                        app.on_mouse(mouse_event, rows);
                    }
                    Some(Ok(Event::Resize(new_cols, new_rows))) => {
                        cols = new_cols;
                        rows = new_rows;
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(CafeError::Io(e)),
                    None => break, // Stream ended
                }
            }

            // Messages from async tasks (timers, clipboard completions)
            Some(envelope) = rx.recv() => {
                log::debug!("event loop: message from {:?}", envelope.source);
                app.browser.update(envelope);
            }
        }

        app.draw(&mut out, cols, rows)?;
    }

    Ok(())
}

impl ColorCafe {
    fn new(browser: ColorNameBrowser) -> Self {
        Self {
            browser,
            input: QueryInput::new(),
            focus: Focus::Query,
            selected: 0,
            scroll: 0,
            should_quit: false,
            mode_selector: 0..0,
            filter_button: None,
        }
    }

    fn on_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('t') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.toggle_mode();
                return;
            }
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Query => Focus::List,
                    Focus::List => Focus::Query,
                };
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::Query => match code {
                KeyCode::Enter => {
                    self.browser.submit_query(self.input.value());
                }
                _ => {
                    if self.input.on_key(code) {
                        self.browser.input_changed(self.input.value());
                    }
                }
            },
            Focus::List => match code {
                KeyCode::Up => self.move_selection(-1),
                KeyCode::Down => self.move_selection(1),
                KeyCode::PageUp => self.move_selection(-10),
                KeyCode::PageDown => self.move_selection(10),
                KeyCode::Home => self.selected = 0,
                KeyCode::End => {
                    self.selected = self.browser.filtered().len().saturating_sub(1);
                }
                KeyCode::Enter | KeyCode::Char(' ') => self.activate_selected(),
                _ => {}
            },
        }
    }

    /// Single delegated handler for all mouse activity; list rows are
    /// hit-tested by position, so re-rendered items need no re-binding.
    fn on_mouse(&mut self, event: MouseEvent, rows: u16) {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let (col, row) = (event.column, event.row);
                if row == HEADER_ROW {
                    if self.filter_button.as_ref().is_some_and(|b| b.contains(&col)) {
                        self.browser.submit_query(self.input.value());
                    } else if self.mode_selector.contains(&col) {
                        self.toggle_mode();
                    }
                } else if row == QUERY_ROW {
                    self.focus = Focus::Query;
                } else if row >= LIST_TOP && row < rows.saturating_sub(1) {
                    let index = self.scroll + (row - LIST_TOP) as usize;
                    if index < self.browser.filtered().len() {
                        self.selected = index;
                        self.focus = Focus::List;
                        self.activate_selected();
                    }
                }
            }
            MouseEventKind::ScrollUp => self.move_selection(-1),
            MouseEventKind::ScrollDown => self.move_selection(1),
            _ => {}
        }
    }

    fn toggle_mode(&mut self) {
        // Mode changes go through the selector values, like any other caller.
        match self.browser.mode() {
            InteractionMode::Live => self.browser.mode_changed("submit"),
            InteractionMode::Submit => self.browser.mode_changed("live"),
        }
    }

    fn activate_selected(&mut self) {
        if let Some(&name) = self.browser.filtered().get(self.selected) {
            self.browser.activate_item(name);
        }
    }

    fn move_selection(&mut self, delta: i64) {
        let len = self.browser.filtered().len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let target = self.selected as i64 + delta;
        self.selected = target.clamp(0, len as i64 - 1) as usize;
    }

    /// Clamp selection and scroll to the current view, then keep the
    /// selected row inside the viewport.
    fn clamp_viewport(&mut self, rows: u16) {
        let len = self.browser.filtered().len();
        let viewport = rows.saturating_sub(CHROME_ROWS) as usize;

        self.selected = self.selected.min(len.saturating_sub(1));
        self.scroll = self.scroll.min(len.saturating_sub(viewport.max(1)));
        if self.selected < self.scroll {
            self.scroll = self.selected;
        } else if viewport > 0 && self.selected >= self.scroll + viewport {
            self.scroll = self.selected + 1 - viewport;
        }
    }

    fn draw(&mut self, out: &mut impl Write, cols: u16, rows: u16) -> Result<()> {
        self.clamp_viewport(rows);

        let view = ListView::build(&self.browser);
        let input_display = self.input.display(self.focus == Focus::Query);
        let frame = screen::compose_frame(&FrameParams {
            view: &view,
            input: &input_display,
            mode: self.browser.mode(),
            selected: self.selected,
            scroll: self.scroll,
            width: cols,
            height: rows,
        });

        self.mode_selector = frame.mode_selector.clone();
        self.filter_button = frame.filter_button.clone();

        screen::paint(out, &frame)?;
        Ok(())
    }
}
