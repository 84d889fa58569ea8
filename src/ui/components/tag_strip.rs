//! Horizontal tag strip.
//!
//! Joins the cells of a [`TagWindow`] into one row. Each cell is the label with
//! one column of padding on both sides followed by a one column gap, matching
//! [`TagCellMetrics::default`](crate::ui::tag_window::TagCellMetrics).

use crate::ui::helpers::{Line, Role};
use crate::ui::tag_window::{TagWindow, LEFT_MARKER, RIGHT_MARKER};

/// Renders a windowed tag strip with its scroll indicators.
///
/// # Example
///
/// ```rust
/// use cheatsheet_viewer::ui::components::tag_strip::render_tag_strip;
/// use cheatsheet_viewer::ui::tag_window::{visible_tags, TagCellMetrics};
///
/// let tags: Vec<String> = ["all", "git"].iter().map(|t| t.to_string()).collect();
/// let window = visible_tags(&tags, 1, 72, TagCellMetrics::default());
/// assert_eq!(render_tag_strip(&window).plain(), " all   git  ");
/// ```
#[must_use]
pub fn render_tag_strip(window: &TagWindow) -> Line {
    let mut line = Line::blank();

    if window.left_marker {
        line.push(LEFT_MARKER, Role::Dim);
    }

    for tag in &window.tags {
        let role = if tag.selected { Role::Selected } else { Role::Text };
        line.push(format!(" {} ", tag.label), role);
        line.push(" ", Role::Text);
    }

    if window.right_marker {
        line.push(RIGHT_MARKER, Role::Dim);
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::tag_window::VisibleTag;

    fn tag(index: usize, label: &str, selected: bool) -> VisibleTag {
        VisibleTag {
            index,
            label: label.to_string(),
            selected,
        }
    }

    #[test]
    fn markers_wrap_the_cells() {
        let window = TagWindow {
            left_marker: true,
            tags: vec![tag(3, "b", false), tag(4, "c", true)],
            right_marker: true,
        };
        let line = render_tag_strip(&window);
        assert_eq!(line.plain(), "«  b   c   »");
        assert_eq!(line.spans.first().map(|s| s.role), Some(Role::Dim));
        assert_eq!(line.spans.iter().filter(|s| s.role == Role::Selected).count(), 1);
    }

    #[test]
    fn single_selected_tag_without_markers() {
        let window = TagWindow {
            left_marker: false,
            tags: vec![tag(0, "all", true)],
            right_marker: false,
        };
        assert_eq!(render_tag_strip(&window).plain(), " all  ");
    }
}
