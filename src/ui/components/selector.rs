//! Sheet selector component.

use crate::ui::helpers::{Line, Role};

/// Renders one row per discovered sheet, marking the selected one.
///
/// Returns the rows and the index of the selected row.
#[must_use]
pub fn render_selector(sheets: &[String], selected: usize) -> (Vec<Line>, Option<usize>) {
    let lines = sheets
        .iter()
        .enumerate()
        .map(|(i, sheet)| {
            if i == selected {
                Line::styled(format!("> {sheet}"), Role::Selected)
            } else {
                Line::styled(format!("  {sheet}"), Role::Text)
            }
        })
        .collect();

    let selected_line = (selected < sheets.len()).then_some(selected);
    (lines, selected_line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_sheet_is_marked() {
        let sheets = vec!["docker.yaml".to_string(), "net/ssh.yaml".to_string()];
        let (lines, selected) = render_selector(&sheets, 1);
        assert_eq!(lines[0].plain(), "  docker.yaml");
        assert_eq!(lines[1].plain(), "> net/ssh.yaml");
        assert!(lines[1].has_role(Role::Selected));
        assert_eq!(selected, Some(1));
    }

    #[test]
    fn no_sheets_no_rows() {
        let (lines, selected) = render_selector(&[], 0);
        assert!(lines.is_empty());
        assert_eq!(selected, None);
    }
}
