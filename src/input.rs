//! Single-line query input with grapheme-aware editing.

use crossterm::event::KeyCode;
use unicode_segmentation::UnicodeSegmentation;

fn grapheme_count(text: &str) -> usize {
    UnicodeSegmentation::graphemes(text, true).count()
}

fn grapheme_byte_index(text: &str, grapheme_index: usize) -> usize {
    UnicodeSegmentation::grapheme_indices(text, true)
        .nth(grapheme_index)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}

fn grapheme_byte_range(text: &str, grapheme_index: usize) -> Option<(usize, usize)> {
    let mut iter = UnicodeSegmentation::grapheme_indices(text, true);
    let (start, _) = iter.nth(grapheme_index)?;
    let end = iter.next().map(|(idx, _)| idx).unwrap_or(text.len());
    Some((start, end))
}

/// The editable query field.
pub struct QueryInput {
    value: String,
    /// Grapheme index of the cursor.
    cursor: usize,
}

/// Display split of the field around the cursor cell.
pub struct InputDisplay {
    pub before: String,
    /// The grapheme under the cursor (a space when at end of value), or
    /// empty when the field is not focused.
    pub cursor_cell: String,
    pub after: String,
}

impl QueryInput {
    pub fn new() -> Self {
        Self {
            value: String::new(),
            cursor: 0,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Apply a key to the field. Returns true if the value changed.
    pub fn on_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char(ch) => {
                self.insert_char(ch);
                true
            }
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(grapheme_count(&self.value));
                false
            }
            KeyCode::Home => {
                self.cursor = 0;
                false
            }
            KeyCode::End => {
                self.cursor = grapheme_count(&self.value);
                false
            }
            _ => false,
        }
    }

    pub fn display(&self, focused: bool) -> InputDisplay {
        if !focused {
            return InputDisplay {
                before: self.value.clone(),
                cursor_cell: String::new(),
                after: String::new(),
            };
        }
        let cursor = self.cursor.min(grapheme_count(&self.value));
        match grapheme_byte_range(&self.value, cursor) {
            Some((start, end)) => InputDisplay {
                before: self.value[..start].to_string(),
                cursor_cell: self.value[start..end].to_string(),
                after: self.value[end..].to_string(),
            },
            None => InputDisplay {
                before: self.value.clone(),
                cursor_cell: " ".to_string(),
                after: String::new(),
            },
        }
    }

    fn insert_char(&mut self, ch: char) {
        let cursor = self.cursor.min(grapheme_count(&self.value));
        let byte_index = grapheme_byte_index(&self.value, cursor);
        self.value.insert(byte_index, ch);
        self.cursor = cursor + 1;
    }

    fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let cursor = self.cursor.min(grapheme_count(&self.value));
        let remove_index = cursor.saturating_sub(1);
        if let Some((start, end)) = grapheme_byte_range(&self.value, remove_index) {
            self.value.replace_range(start..end, "");
            self.cursor = remove_index;
            return true;
        }
        false
    }

    fn delete(&mut self) -> bool {
        let cursor = self.cursor.min(grapheme_count(&self.value));
        if let Some((start, end)) = grapheme_byte_range(&self.value, cursor) {
            self.value.replace_range(start..end, "");
            return true;
        }
        false
    }
}

impl Default for QueryInput {
    fn default() -> Self {
        Self::new()
    }
}
