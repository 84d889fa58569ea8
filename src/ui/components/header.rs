//! Header component.
//!
//! The header is a single title badge: the sheet title in the list and search
//! views, the entry name in the detail view, and a fixed label in the selector.

use crate::ui::helpers::{Line, Role};

/// Title shown while picking a sheet.
pub const SELECTOR_TITLE: &str = "Cheatsheet Selector";

/// Title shown before a sheet has finished loading.
pub const LOADING_TITLE: &str = "Cheatsheet";

/// Renders `title` as a padded badge.
///
/// # Example
///
/// ```rust
/// use cheatsheet_viewer::ui::components::header::render_header;
/// use cheatsheet_viewer::ui::helpers::Role;
///
/// let line = render_header("Git", Role::Title);
/// assert_eq!(line.plain(), " Git ");
/// ```
#[must_use]
pub fn render_header(title: &str, role: Role) -> Line {
    Line::styled(format!(" {title} "), role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_keeps_role() {
        let line = render_header(SELECTOR_TITLE, Role::Title);
        assert_eq!(line.plain(), " Cheatsheet Selector ");
        assert!(line.has_role(Role::Title));
    }
}
