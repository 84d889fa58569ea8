//! Entry list component.
//!
//! Renders the sheet description followed by one numbered row per visible entry:
//!
//! ```text
//! {n}. {name} - {short_desc} [tag1, tag2]
//! ```
//!
//! Each row is followed by a blank line. Numbering is 1-based and counts visible
//! rows, not positions in the sheet. In search views the matched part of each
//! name is highlighted, except on the selected row which keeps one uniform style.

use crate::domain::Entry;
use crate::ui::helpers::{highlighted_spans, match_range, Line, Role, Span};

/// Rendered list plus the row of the selected entry, for scrolling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryList {
    pub lines: Vec<Line>,
    /// Index into `lines` of the selected entry's row.
    pub selected_line: Option<usize>,
}

/// Rows taken by the description header above the first entry.
const DESCRIPTION_ROWS: usize = 2;

/// Renders `entries` under `description`.
///
/// `highlight` is the active search query, if any.
#[must_use]
pub fn render_entry_list(
    description: &str,
    entries: &[&Entry],
    selected: usize,
    highlight: Option<&str>,
) -> EntryList {
    let mut lines = Vec::with_capacity(DESCRIPTION_ROWS + entries.len() * 2);
    lines.push(Line::styled(description, Role::Text));
    lines.push(Line::blank());

    let mut selected_line = None;
    for (position, entry) in entries.iter().enumerate() {
        let is_selected = position == selected;
        if is_selected {
            selected_line = Some(lines.len());
        }
        lines.push(render_entry_row(position + 1, entry, is_selected, highlight));
        lines.push(Line::blank());
    }

    EntryList {
        lines,
        selected_line,
    }
}

fn render_entry_row(number: usize, entry: &Entry, is_selected: bool, highlight: Option<&str>) -> Line {
    let mut line = Line::blank();

    if is_selected {
        line.push(
            format!("{number}. {} - {}", entry.name, entry.short_desc),
            Role::Selected,
        );
    } else {
        line.push(format!("{number}."), Role::Number);
        line.push(" ", Role::Text);
        let range = highlight.and_then(|query| match_range(&entry.name, query));
        line.spans
            .extend(highlighted_spans(&entry.name, range, Role::Text, false));
        line.spans
            .push(Span::text(format!(" - {}", entry.short_desc)));
    }

    if !entry.tags.is_empty() {
        line.push(format!(" [{}]", entry.tags.join(", ")), Role::Tag);
    }

    line
}
