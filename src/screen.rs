//! Frame composition and painting.
//!
//! Every repaint composes a full frame of [`Strip`]s from the view model and
//! paints it over a cleared screen; there is no incremental patching. The
//! plain-text rendering of a frame backs the snapshot tests.

use std::io::{self, Write};
use std::ops::Range;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use unicode_display_width::width as display_width;

use crate::browser::InteractionMode;
use crate::colors::Rgb;
use crate::input::InputDisplay;
use crate::view::{self, ListView};

pub const HEADER_ROW: u16 = 0;
pub const QUERY_ROW: u16 = 1;
pub const COUNT_ROW: u16 = 2;
pub const LIST_TOP: u16 = 3;
/// Rows taken by the fixed chrome: header, query, count, footer.
pub const CHROME_ROWS: u16 = 4;

/// A run of text sharing one style.
pub struct Segment {
    text: String,
    fg: Option<Rgb>,
    bold: bool,
    underline: bool,
    reverse: bool,
    dim: bool,
}

impl Segment {
    fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fg: None,
            bold: false,
            underline: false,
            reverse: false,
            dim: false,
        }
    }

    fn fg(mut self, color: Rgb) -> Self {
        self.fg = Some(color);
        self
    }

    fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }

    fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    fn is_styled(&self) -> bool {
        self.fg.is_some() || self.bold || self.underline || self.reverse || self.dim
    }
}

/// One terminal row of segments.
#[derive(Default)]
pub struct Strip {
    segments: Vec<Segment>,
}

impl Strip {
    fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Plain-text content of the row, trailing whitespace trimmed.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            out.push_str(&segment.text);
        }
        out.trim_end().to_string()
    }

    /// Clip the row to at most `max` display columns.
    fn truncate_to(&mut self, max: usize) {
        let mut used = 0usize;
        let mut keep = Vec::new();
        for mut segment in self.segments.drain(..) {
            let width = display_width(&segment.text) as usize;
            if used + width <= max {
                used += width;
                keep.push(segment);
                continue;
            }
            let mut clipped = String::new();
            for ch in segment.text.chars() {
                let ch_width = display_width(ch.encode_utf8(&mut [0u8; 4])) as usize;
                if used + ch_width > max {
                    break;
                }
                used += ch_width;
                clipped.push(ch);
            }
            segment.text = clipped;
            keep.push(segment);
            break;
        }
        self.segments = keep;
    }
}

/// Everything needed to compose one frame.
pub struct FrameParams<'a> {
    pub view: &'a ListView,
    pub input: &'a InputDisplay,
    pub mode: InteractionMode,
    pub selected: usize,
    pub scroll: usize,
    pub width: u16,
    pub height: u16,
}

/// A composed frame plus the header spans the mouse can hit.
pub struct Frame {
    pub strips: Vec<Strip>,
    /// Column span of the mode selector in the header row.
    pub mode_selector: Range<u16>,
    /// Column span of the submit control, visible only in submit mode.
    pub filter_button: Option<Range<u16>>,
}

pub fn compose_frame(params: &FrameParams) -> Frame {
    let width = params.width as usize;
    let mut strips = Vec::new();

    let (header, mode_selector, filter_button) = header_strip(params.mode);
    strips.push(header);
    strips.push(query_strip(params.input));
    strips.push(count_strip(&params.view.count_line));

    let viewport = params.height.saturating_sub(CHROME_ROWS) as usize;
    for row in 0..viewport {
        strips.push(item_strip(params, params.scroll + row));
    }
    strips.push(footer_strip(params));

    for strip in &mut strips {
        strip.truncate_to(width);
    }
    strips.truncate(params.height as usize);

    Frame {
        strips,
        mode_selector,
        filter_button,
    }
}

fn header_strip(mode: InteractionMode) -> (Strip, Range<u16>, Option<Range<u16>>) {
    let mut strip = Strip::default();
    let mut col = 0u16;
    let mut push = |strip: &mut Strip, segment: Segment| {
        let width = display_width(&segment.text) as u16;
        strip.push(segment);
        let start = col;
        col += width;
        start..col
    };

    push(&mut strip, Segment::new(" Color Café").bold());
    push(&mut strip, Segment::new(" · "));
    let selector_label = push(&mut strip, Segment::new("mode: "));
    let mode_text = match mode {
        InteractionMode::Live => "live",
        InteractionMode::Submit => "submit",
    };
    let selector_value = push(&mut strip, Segment::new(mode_text).underline());
    let mode_selector = selector_label.start..selector_value.end;

    let filter_button = match mode {
        InteractionMode::Live => None,
        InteractionMode::Submit => {
            push(&mut strip, Segment::new("  "));
            Some(push(&mut strip, Segment::new("[ Filter ]").reverse()))
        }
    };

    (strip, mode_selector, filter_button)
}

fn query_strip(input: &InputDisplay) -> Strip {
    let mut strip = Strip::default();
    strip.push(Segment::new(" Filter: "));
    strip.push(Segment::new(input.before.clone()));
    if !input.cursor_cell.is_empty() {
        strip.push(Segment::new(input.cursor_cell.clone()).reverse());
    }
    strip.push(Segment::new(input.after.clone()));
    strip
}

fn count_strip(count_line: &str) -> Strip {
    let mut strip = Strip::default();
    strip.push(Segment::new(" "));
    strip.push(Segment::new(count_line).dim());
    strip
}

fn item_strip(params: &FrameParams, index: usize) -> Strip {
    let mut strip = Strip::default();
    let Some(item) = params.view.items.get(index) else {
        return strip;
    };

    let marker = if index == params.selected { "❯ " } else { "  " };
    strip.push(Segment::new(marker));
    strip.push(Segment::new("██").fg(item.swatch));
    strip.push(Segment::new(" "));

    match (item.state, item.highlight) {
        (Some(_), _) => strip.push(Segment::new(item.content.clone()).bold()),
        (None, Some((start, end))) => {
            strip.push(Segment::new(item.content[..start].to_string()));
            strip.push(Segment::new(item.content[start..end].to_string()).bold().underline());
            strip.push(Segment::new(item.content[end..].to_string()));
        }
        (None, None) => strip.push(Segment::new(item.content.clone())),
    }
    strip
}

fn footer_strip(params: &FrameParams) -> Strip {
    let mut strip = Strip::default();
    strip.push(Segment::new(" "));
    match params.view.items.get(params.selected) {
        Some(item) => strip.push(Segment::new(view::action_label(item.name))),
        None => strip.push(Segment::new("No matching colors").dim()),
    }
    strip
}

/// Paint a frame over a cleared screen and flush.
pub fn paint(out: &mut impl Write, frame: &Frame) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;
    for (row, strip) in frame.strips.iter().enumerate() {
        queue!(out, MoveTo(0, row as u16))?;
        for segment in &strip.segments {
            if let Some(Rgb(r, g, b)) = segment.fg {
                queue!(out, SetForegroundColor(Color::Rgb { r, g, b }))?;
            }
            if segment.bold {
                queue!(out, SetAttribute(Attribute::Bold))?;
            }
            if segment.dim {
                queue!(out, SetAttribute(Attribute::Dim))?;
            }
            if segment.underline {
                queue!(out, SetAttribute(Attribute::Underlined))?;
            }
            if segment.reverse {
                queue!(out, SetAttribute(Attribute::Reverse))?;
            }
            queue!(out, Print(&segment.text))?;
            if segment.is_styled() {
                queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
            }
        }
    }
    out.flush()
}

/// Plain-text rendering of a frame, one line per strip.
pub fn to_text(frame: &Frame) -> String {
    frame
        .strips
        .iter()
        .map(Strip::text)
        .collect::<Vec<_>>()
        .join("\n")
}
