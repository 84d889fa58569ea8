//! Search bar and search results indicator.
//!
//! While a query is being typed the bar shows the prompt, the query and a cursor
//! cell. Once the query is applied the bar is replaced by an indicator with the
//! number of results.

use crate::ui::helpers::{Line, Role};

const PROMPT: &str = "Search: ";

/// Renders the editable search bar.
///
/// # Example
///
/// ```rust
/// use cheatsheet_viewer::ui::components::search::render_search_bar;
///
/// assert_eq!(render_search_bar("stat").plain(), "Search: stat ");
/// ```
#[must_use]
pub fn render_search_bar(query: &str) -> Line {
    let mut line = Line::styled(PROMPT, Role::Search);
    line.push(query, Role::Text);
    line.push(" ", Role::Cursor);
    line
}

/// Renders the indicator shown after a query was applied.
#[must_use]
pub fn render_search_indicator(query: &str, results: usize) -> Line {
    Line::styled(format!("{PROMPT}{query} ({results} results)"), Role::Search)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_still_shows_cursor() {
        let line = render_search_bar("");
        assert_eq!(line.plain(), "Search:  ");
        assert!(line.has_role(Role::Cursor));
    }

    #[test]
    fn indicator_counts_results() {
        assert_eq!(
            render_search_indicator("stat", 1).plain(),
            "Search: stat (1 results)"
        );
    }
}
