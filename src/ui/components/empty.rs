//! Placeholder and error screens.
//!
//! These replace the body when there is nothing to list: while a load is in
//! flight, when a sheet or a search has no entries, and when a load failed.

use crate::ui::helpers::{Line, Role};
use std::path::Path;

/// Shown while the catalog directory is being scanned.
pub const LOADING_SHEETS: &str = "Loading cheatsheets...";

/// Shown while a sheet is being read.
pub const LOADING_SHEET: &str = "Loading cheat sheet...";

/// Shown for a sheet without entries.
pub const NO_ENTRIES: &str = "No commands found in the cheat sheet.";

/// Shown when a search matches nothing.
pub const NO_MATCHES: &str = "No commands match the search.";

/// Renders a single dimmed message line.
#[must_use]
pub fn render_message(message: &str) -> Line {
    Line::styled(message, Role::Dim)
}

/// Message for an empty catalog directory.
#[must_use]
pub fn render_no_sheets(dir: &Path) -> Line {
    render_message(&format!("No cheatsheets found in {}.", dir.display()))
}

/// Full-screen error shown after a failed load.
///
/// # Example
///
/// ```rust
/// use cheatsheet_viewer::ui::components::empty::render_error_screen;
/// use cheatsheet_viewer::ui::helpers::plain_text;
///
/// let screen = render_error_screen("file not found");
/// assert_eq!(plain_text(&screen), "Error: file not found\n\nPress q to quit.");
/// ```
#[must_use]
pub fn render_error_screen(message: &str) -> Vec<Line> {
    vec![
        Line::styled(format!("Error: {message}"), Role::Error),
        Line::blank(),
        Line::styled("Press q to quit.", Role::Dim),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_sheets_names_directory() {
        let line = render_no_sheets(Path::new("cheatsheets"));
        assert_eq!(line.plain(), "No cheatsheets found in cheatsheets.");
    }

    #[test]
    fn error_screen_styles_message() {
        let screen = render_error_screen("boom");
        assert!(screen[0].has_role(Role::Error));
        assert_eq!(screen.len(), 3);
    }
}
