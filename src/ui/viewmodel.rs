//! View model types representing a renderable frame.
//!
//! This module defines the immutable view model computed from view state and
//! consumed by the renderer. View models contain no business logic, only
//! display-ready lines that already fit the terminal height.
//!
//! # Layout
//!
//! ```text
//! [Header]
//! [blank]
//! [Bar: tag strip / search bar / search indicator]   (optional)
//! [blank]                                             (with bar)
//! [Body rows ...]
//! [blank]
//! [Footer]
//! ```
//!
//! The error screen has no header, bar or footer.
//!
//! # Example
//!
//! ```rust
//! use cheatsheet_viewer::ui::helpers::{Line, Role};
//! use cheatsheet_viewer::ui::viewmodel::UIViewModel;
//!
//! let vm = UIViewModel {
//!     header: Some(Line::styled(" Git ", Role::Title)),
//!     bar: None,
//!     body: vec![Line::styled("git status", Role::Text)],
//!     footer: Some(Line::styled("q: Quit", Role::Dim)),
//! };
//! let frame = vm.frame(6);
//! assert_eq!(frame.len(), 6);
//! assert_eq!(frame[5].plain(), "q: Quit");
//! ```

use crate::ui::helpers::Line;

/// Complete frame description.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UIViewModel {
    /// Title badge.
    pub header: Option<Line>,

    /// Row between header and body.
    pub bar: Option<Line>,

    /// Body rows, already scrolled and cut to [`body_rows`].
    pub body: Vec<Line>,

    /// Keybinding hints.
    pub footer: Option<Line>,
}

impl UIViewModel {
    /// Assembles the frame top to bottom, exactly `height` rows tall.
    ///
    /// The footer sits on the last row; when the terminal is too short the body
    /// is cut first.
    #[must_use]
    pub fn frame(&self, height: usize) -> Vec<Line> {
        let mut top = Vec::new();
        if let Some(header) = &self.header {
            top.push(header.clone());
            top.push(Line::blank());
        }
        if let Some(bar) = &self.bar {
            top.push(bar.clone());
            top.push(Line::blank());
        }

        let mut bottom = Vec::new();
        if let Some(footer) = &self.footer {
            bottom.push(Line::blank());
            bottom.push(footer.clone());
        }

        let body_space = height.saturating_sub(top.len() + bottom.len());
        let mut frame: Vec<Line> = top;
        frame.extend(self.body.iter().take(body_space).cloned());
        frame.resize(height.saturating_sub(bottom.len()), Line::blank());
        frame.extend(bottom);
        frame.truncate(height);
        frame
    }
}

/// Rows left for the body on a terminal `height` rows tall.
///
/// `has_header` also implies a footer. Never less than one.
#[must_use]
pub fn body_rows(height: usize, has_header: bool, has_bar: bool) -> usize {
    let header_rows = if has_header { 4 } else { 0 };
    let bar_rows = if has_bar { 2 } else { 0 };
    let chrome = header_rows + bar_rows;
    height.saturating_sub(chrome).max(1)
}

/// First row to show so that `selected` stays in view.
///
/// Centres the selection where possible and never scrolls past the end.
#[must_use]
pub fn scroll_offset(total: usize, selected: Option<usize>, rows: usize) -> usize {
    let Some(selected) = selected else {
        return 0;
    };
    let max_offset = total.saturating_sub(rows);
    selected.saturating_sub(rows / 2).min(max_offset)
}

/// `rows` lines of `lines` starting at `offset`.
#[must_use]
pub fn window(lines: Vec<Line>, offset: usize, rows: usize) -> Vec<Line> {
    lines.into_iter().skip(offset).take(rows).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::helpers::Role;

    fn numbered(n: usize) -> Vec<Line> {
        (0..n).map(|i| Line::styled(i.to_string(), Role::Text)).collect()
    }

    #[test]
    fn frame_pads_body_and_pins_footer() {
        let vm = UIViewModel {
            header: Some(Line::styled("H", Role::Title)),
            bar: Some(Line::styled("B", Role::Text)),
            body: numbered(2),
            footer: Some(Line::styled("F", Role::Dim)),
        };
        let plain: Vec<String> = vm.frame(10).iter().map(Line::plain).collect();
        assert_eq!(plain, ["H", "", "B", "", "0", "1", "", "", "", "F"]);
    }

    #[test]
    fn short_terminal_cuts_body_first() {
        let vm = UIViewModel {
            header: Some(Line::styled("H", Role::Title)),
            bar: None,
            body: numbered(5),
            footer: Some(Line::styled("F", Role::Dim)),
        };
        let plain: Vec<String> = vm.frame(5).iter().map(Line::plain).collect();
        assert_eq!(plain, ["H", "", "0", "", "F"]);
    }

    #[test]
    fn scroll_keeps_selection_visible() {
        assert_eq!(scroll_offset(100, Some(0), 10), 0);
        assert_eq!(scroll_offset(100, Some(50), 10), 45);
        assert_eq!(scroll_offset(100, Some(99), 10), 90);
        assert_eq!(scroll_offset(5, Some(4), 10), 0);
        assert_eq!(scroll_offset(100, None, 10), 0);
    }

    #[test]
    fn body_rows_never_zero() {
        assert_eq!(body_rows(24, true, true), 18);
        assert_eq!(body_rows(24, true, false), 20);
        assert_eq!(body_rows(3, true, true), 1);
        assert_eq!(body_rows(24, false, false), 24);
    }
}
