//! Entry detail component.
//!
//! Lays out every populated field of an [`Entry`] as labelled sections. Sections
//! whose field is empty are left out entirely. Multi-line code is split so that
//! each physical line keeps the code style.

use crate::domain::Entry;
use crate::ui::helpers::{Line, Role};

/// Renders the detail view body for `entry`.
///
/// # Example
///
/// ```rust
/// use cheatsheet_viewer::domain::Entry;
/// use cheatsheet_viewer::ui::components::detail::render_detail;
/// use cheatsheet_viewer::ui::helpers::plain_text;
///
/// let mut entry = Entry::new("git status", "Show the working tree status");
/// entry.syntax = "git status [<options>]".into();
/// let text = plain_text(&render_detail(&entry));
/// assert!(text.contains("Syntax:\n  git status [<options>]"));
/// ```
#[must_use]
pub fn render_detail(entry: &Entry) -> Vec<Line> {
    let mut lines = Vec::new();

    if !entry.short_desc.is_empty() {
        lines.push(Line::styled(&entry.short_desc, Role::Text));
        lines.push(Line::blank());
    }

    if !entry.syntax.trim().is_empty() {
        lines.push(Line::styled("Syntax:", Role::Heading));
        push_code(&mut lines, "  ", &entry.syntax);
        lines.push(Line::blank());
    }

    if let Some(complexity) = entry.complexity_label() {
        lines.push(Line::styled(format!("Complexity: {complexity}"), Role::Complexity));
        lines.push(Line::blank());
    }

    if !entry.tags.is_empty() {
        lines.push(Line::styled(format!("Tags: {}", entry.tags.join(", ")), Role::Tag));
        lines.push(Line::blank());
    }

    if !entry.options.is_empty() {
        lines.push(Line::styled("Options:", Role::Heading));
        for option in &entry.options {
            lines.push(Line::styled(format!("  {}", option.flag), Role::Flag));
            if !option.description.is_empty() {
                lines.push(Line::styled(format!("    {}", option.description), Role::OptionDesc));
            }
        }
        lines.push(Line::blank());
    }

    if !entry.examples.is_empty() {
        lines.push(Line::styled("Examples:", Role::Heading));
        for (i, example) in entry.examples.iter().enumerate() {
            lines.push(Line::styled(format!("  Example {}:", i + 1), Role::Text));
            push_code(&mut lines, "  $ ", &example.code);
            if !example.description.is_empty() {
                lines.push(Line::styled(format!("    {}", example.description), Role::Text));
            }
            lines.push(Line::blank());
        }
    }

    if !entry.notes.is_empty() {
        lines.push(Line::styled("Notes:", Role::Heading));
        for note in &entry.notes {
            let mut line = Line::styled("  • ", Role::Text);
            line.push(note, Role::Note);
            lines.push(line);
        }
        lines.push(Line::blank());
    }

    if !entry.related.is_empty() {
        lines.push(Line::styled("Related Commands:", Role::Heading));
        let mut line = Line::styled("  ", Role::Text);
        for (i, related) in entry.related.iter().enumerate() {
            if i > 0 {
                line.push(", ", Role::Text);
            }
            line.push(related, Role::Syntax);
        }
        lines.push(line);
    }

    while lines.last().is_some_and(|line| line.spans.is_empty()) {
        lines.pop();
    }

    lines
}

/// Pushes `code` one physical line at a time, `first_prefix` before the first.
fn push_code(lines: &mut Vec<Line>, first_prefix: &str, code: &str) {
    let continuation = " ".repeat(first_prefix.chars().count());
    for (i, code_line) in code.trim_end().lines().enumerate() {
        let prefix = if i == 0 { first_prefix } else { continuation.as_str() };
        let mut line = Line::styled(prefix, Role::Text);
        line.push(code_line, Role::Code);
        lines.push(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CommandOption, Example};
    use crate::ui::helpers::plain_text;

    fn full_entry() -> Entry {
        Entry {
            syntax: "git commit [-m <msg>]".into(),
            tags: vec!["git".into(), "basics".into()],
            complexity: Some("Beginner".into()),
            options: vec![CommandOption {
                flag: "-m".into(),
                description: "Use the given message".into(),
            }],
            examples: vec![Example {
                code: "git commit -m \"fix\"".into(),
                description: "Commit staged changes".into(),
            }],
            notes: vec!["Stage files first".into()],
            related: vec!["git add".into(), "git push".into()],
            ..Entry::new("git commit", "Record changes")
        }
    }

    #[test]
    fn all_sections_in_order() {
        let text = plain_text(&render_detail(&full_entry()));
        let expected = "\
Record changes

Syntax:
  git commit [-m <msg>]

Complexity: Beginner

Tags: git, basics

Options:
  -m
    Use the given message

Examples:
  Example 1:
  $ git commit -m \"fix\"
    Commit staged changes

Notes:
  • Stage files first

Related Commands:
  git add, git push";
        assert_eq!(text, expected);
    }

    #[test]
    fn empty_sections_are_omitted() {
        let text = plain_text(&render_detail(&Entry::new("ls", "List files")));
        assert_eq!(text, "List files");
    }

    #[test]
    fn multi_line_code_keeps_code_role() {
        let entry = Entry {
            syntax: "first\nsecond\n".into(),
            ..Entry::new("x", "")
        };
        let lines = render_detail(&entry);
        assert_eq!(plain_text(&lines), "Syntax:\n  first\n  second");
        assert!(lines[1].has_role(Role::Code) && lines[2].has_role(Role::Code));
    }

    #[test]
    fn rendering_is_idempotent() {
        let entry = full_entry();
        assert_eq!(render_detail(&entry), render_detail(&entry));
    }
}
