//! Footer component with per-mode keybinding hints.

use crate::app::modes::{Mode, SearchFocus};
use crate::ui::helpers::{Line, Role};

/// Keybinding hints for `mode`.
#[must_use]
pub const fn help_text(mode: Mode) -> &'static str {
    match mode {
        Mode::Selector => "↑/↓: Navigate • Enter: Select • q: Quit",
        Mode::List => {
            "↑/↓: Navigate • ←/→: Tag Filter • /: Search • Enter: View details • o: Open cheatsheet • q: Quit"
        }
        Mode::Detail(_) => "↑/↓: Scroll • Esc: Back • o: Open cheatsheet • q: Quit",
        Mode::Search(SearchFocus::Editing) => {
            "Type to search • ↑/↓: Navigate • Enter: Apply • Esc: Cancel • Ctrl-C: Quit"
        }
        Mode::Search(SearchFocus::Applied) => {
            "↑/↓: Navigate • Enter: View details • /: New search • Esc: Clear search • o: Open cheatsheet • q: Quit"
        }
    }
}

/// Renders the help line for `mode`.
#[must_use]
pub fn render_footer(mode: Mode) -> Line {
    Line::styled(help_text(mode), Role::Dim)
}
