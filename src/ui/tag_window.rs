//! Bounded-width windowing of the horizontal tag strip.
//!
//! The tag strip has to fit in one terminal row. [`visible_tags`] picks a contiguous
//! run of tags around the selected one so that the selection is never scrolled off
//! screen, and reports whether tags were cut off on either side so the strip can
//! draw `«` / `»` scroll indicators.
//!
//! # Algorithm
//!
//! 1. Commit the selected tag. If its cell alone is wider than the budget, the
//!    strip shows only that tag and no indicators.
//! 2. Grow to the left, nearest tag first, until the next tag would overflow.
//! 3. Grow to the right the same way with whatever budget is left.
//! 4. Flag the left side if the first tag is missing and the right side if the
//!    last tag is missing. Indicator widths are not part of the budget.

use unicode_width::UnicodeWidthStr;

/// Columns reserved around the strip by the surrounding layout.
pub const STRIP_OUTER_PADDING: usize = 8;

/// Left scroll indicator.
pub const LEFT_MARKER: &str = "« ";

/// Right scroll indicator.
pub const RIGHT_MARKER: &str = " »";

/// Horizontal metrics of one tag cell.
///
/// A cell is the label plus `padding` columns on each side, followed by a `gap`
/// separating it from the next cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagCellMetrics {
    pub padding: usize,
    pub gap: usize,
}

impl TagCellMetrics {
    /// Total columns taken by a cell holding `label`.
    #[must_use]
    pub fn cell_width(&self, label: &str) -> usize {
        label.width() + self.padding * 2 + self.gap
    }
}

impl Default for TagCellMetrics {
    fn default() -> Self {
        Self { padding: 1, gap: 1 }
    }
}

/// One tag that made it into the strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleTag {
    /// Position in the full tag menu.
    pub index: usize,
    pub label: String,
    pub selected: bool,
}

/// Result of windowing: the visible run plus the scroll indicators to draw.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagWindow {
    pub left_marker: bool,
    pub tags: Vec<VisibleTag>,
    pub right_marker: bool,
}

impl TagWindow {
    /// Labels of the visible tags in display order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.tags.iter().map(|tag| tag.label.as_str()).collect()
    }
}

/// Column budget for the strip on a terminal `terminal_width` columns wide.
#[must_use]
pub const fn strip_budget(terminal_width: usize) -> usize {
    terminal_width.saturating_sub(STRIP_OUTER_PADDING)
}

/// Computes the visible run of `tags` around `selected` within `budget` columns.
///
/// `selected` is clamped into range first. An empty `tags` slice yields an empty
/// window.
///
/// # Examples
///
/// ```
/// use cheatsheet_viewer::ui::tag_window::{visible_tags, TagCellMetrics};
///
/// let tags: Vec<String> = ["all", "a", "b", "c", "d"].iter().map(|t| t.to_string()).collect();
/// // Every single-letter cell is 4 columns wide; 12 columns fit three of them.
/// let window = visible_tags(&tags, 2, 12, TagCellMetrics::default());
/// assert_eq!(window.labels(), ["a", "b", "c"]);
/// assert!(window.left_marker && window.right_marker);
/// ```
#[must_use]
pub fn visible_tags(
    tags: &[String],
    selected: usize,
    budget: usize,
    metrics: TagCellMetrics,
) -> TagWindow {
    let Some(last) = tags.len().checked_sub(1) else {
        return TagWindow::default();
    };
    let selected = selected.min(last);

    let selected_width = metrics.cell_width(&tags[selected]);
    if selected_width > budget {
        return TagWindow {
            left_marker: false,
            tags: vec![visible(tags, selected, selected)],
            right_marker: false,
        };
    }

    let mut used = selected_width;
    let mut first = selected;
    for index in (0..selected).rev() {
        let width = metrics.cell_width(&tags[index]);
        if used + width > budget {
            break;
        }
        used += width;
        first = index;
    }

    let mut end = selected;
    for (index, tag) in tags.iter().enumerate().skip(selected + 1) {
        let width = metrics.cell_width(tag);
        if used + width > budget {
            break;
        }
        used += width;
        end = index;
    }

    tracing::trace!(selected, first, end, used, budget, "tag window computed");

    TagWindow {
        left_marker: first > 0,
        tags: (first..=end).map(|index| visible(tags, index, selected)).collect(),
        right_marker: end < last,
    }
}

fn visible(tags: &[String], index: usize, selected: usize) -> VisibleTag {
    VisibleTag {
        index,
        label: tags[index].clone(),
        selected: index == selected,
    }
}
