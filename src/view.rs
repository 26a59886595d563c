//! View model for the rendered list.
//!
//! Built fresh from the component on every repaint; the previous render is
//! fully discarded, which is fine at list sizes of at most 148 items.

use crate::browser::{ColorNameBrowser, CopyState};
use crate::colors::{self, Rgb};

/// One rendered list entry.
pub struct ListItem {
    /// Machine-readable color identifier; exactly what a copy action writes.
    pub name: &'static str,
    /// Visible row content: the name, or the transient confirmation text.
    pub content: String,
    /// Byte range of the query match within `content`, for idle items.
    pub highlight: Option<(usize, usize)>,
    /// The item's own color.
    pub swatch: Rgb,
    /// Confirmation state, if a copy action is pending revert.
    pub state: Option<CopyState>,
}

/// The full list view: items in filtered order plus the count line.
pub struct ListView {
    pub items: Vec<ListItem>,
    /// `"Showing {n} of {total} colors"`.
    pub count_line: String,
}

impl ListView {
    pub fn build(browser: &ColorNameBrowser) -> Self {
        let query = browser.query();
        let items = browser
            .filtered()
            .iter()
            .map(|&name| {
                let state = browser.copy_state(name);
                let content = match state {
                    None => name.to_string(),
                    Some(CopyState::Copied) => format!("{name} copied!"),
                    Some(CopyState::Failed) => format!("{name} copy failed!"),
                };
                let highlight = match state {
                    None if !query.is_empty() => {
                        name.find(query).map(|start| (start, start + query.len()))
                    }
                    _ => None,
                };
                ListItem {
                    name,
                    content,
                    highlight,
                    swatch: colors::swatch(name).unwrap_or(Rgb(0, 0, 0)),
                    state,
                }
            })
            .collect();
        ListView {
            items,
            count_line: format!(
                "Showing {} of {} colors",
                browser.filtered().len(),
                browser.total_colors()
            ),
        }
    }
}

/// The full action label for an item, decorating the literal name.
pub fn action_label(name: &str) -> String {
    format!("Copy {name} to your clipboard.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_label_decorates_the_name() {
        let label = action_label("cornflowerblue");
        assert_eq!(label, "Copy cornflowerblue to your clipboard.");
        assert!(label.starts_with("Copy "));
        assert!(label.ends_with(" to your clipboard."));
    }
}
