//! Styled text primitives shared by the UI components.
//!
//! Components never emit escape sequences. They produce [`Line`]s made of
//! [`Span`]s, each tagged with a semantic [`Role`]; the terminal backend resolves
//! roles to colours through the active [`Theme`](crate::ui::Theme). This keeps
//! every component a pure function that can be asserted on as plain text.
//!
//! # Example
//!
//! ```rust
//! use cheatsheet_viewer::ui::helpers::{Line, Role, Span};
//!
//! let line = Line::from_spans(vec![
//!     Span::new("1.", Role::Number),
//!     Span::new(" git status", Role::Text),
//! ]);
//! assert_eq!(line.plain(), "1. git status");
//! assert_eq!(line.width(), 13);
//! ```

use std::ops::Range;
use unicode_width::UnicodeWidthStr;

/// Semantic style of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Regular body text.
    Text,
    /// Secondary text (help line, scroll indicators).
    Dim,
    /// Sheet title and selector header.
    Title,
    /// Entry name shown as the detail header.
    DetailTitle,
    /// Section headings in the detail view.
    Heading,
    /// Selected list row or tag.
    Selected,
    /// Entry numbers in the list.
    Number,
    /// Inline tags.
    Tag,
    /// Related entry names.
    Syntax,
    /// Code blocks (syntax and examples).
    Code,
    /// Option flags.
    Flag,
    /// Option descriptions.
    OptionDesc,
    /// Notes.
    Note,
    /// Complexity label.
    Complexity,
    /// Search prompt and indicator.
    Search,
    /// Search input cursor cell.
    Cursor,
    /// Part of a name matched by the search query.
    Match,
    /// Error screen message.
    Error,
}

/// A run of text sharing one role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub role: Role,
}

impl Span {
    #[must_use]
    pub fn new(text: impl Into<String>, role: Role) -> Self {
        Self {
            text: text.into(),
            role,
        }
    }

    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(text, Role::Text)
    }
}

/// One display row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    /// An empty row.
    #[must_use]
    pub const fn blank() -> Self {
        Self { spans: Vec::new() }
    }

    #[must_use]
    pub const fn from_spans(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    /// A row holding a single span.
    #[must_use]
    pub fn styled(text: impl Into<String>, role: Role) -> Self {
        Self {
            spans: vec![Span::new(text, role)],
        }
    }

    /// Appends a span, skipping empty text.
    pub fn push(&mut self, text: impl Into<String>, role: Role) {
        let text = text.into();
        if !text.is_empty() {
            self.spans.push(Span::new(text, role));
        }
    }

    /// The row's text without styling.
    #[must_use]
    pub fn plain(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }

    /// Display width in terminal columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.spans.iter().map(|span| span.text.width()).sum()
    }

    /// Returns `true` if any span has `role`.
    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        self.spans.iter().any(|span| span.role == role)
    }
}

/// Plain text of every line, joined with newlines.
#[must_use]
pub fn plain_text(lines: &[Line]) -> String {
    lines.iter().map(Line::plain).collect::<Vec<_>>().join("\n")
}

/// Byte range of the first case-insensitive occurrence of `query` in `text`.
///
/// Returns `None` when there is no match, when `query` is empty, or when
/// lowercasing changes the byte length of `text` (the range would not map back).
#[must_use]
pub fn match_range(text: &str, query: &str) -> Option<Range<usize>> {
    if query.is_empty() {
        return None;
    }

    let lowered = text.to_lowercase();
    if lowered.len() != text.len() {
        return None;
    }

    let start = lowered.find(&query.to_lowercase())?;
    let end = start + query.to_lowercase().len();
    (text.is_char_boundary(start) && text.is_char_boundary(end)).then_some(start..end)
}

/// Splits `text` into spans, giving the `highlight` range the [`Role::Match`] role.
///
/// Selected rows keep a single span so the selection background stays uniform.
#[must_use]
pub fn highlighted_spans(
    text: &str,
    highlight: Option<Range<usize>>,
    base: Role,
    is_selected: bool,
) -> Vec<Span> {
    let Some(range) = highlight.filter(|_| !is_selected) else {
        return vec![Span::new(text, base)];
    };

    let mut spans = Vec::with_capacity(3);
    if range.start > 0 {
        spans.push(Span::new(&text[..range.start], base));
    }
    spans.push(Span::new(&text[range.clone()], Role::Match));
    if range.end < text.len() {
        spans.push(Span::new(&text[range.end..], base));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_range_ignores_case() {
        assert_eq!(match_range("Git Status", "STAT"), Some(4..8));
        assert_eq!(match_range("git", ""), None);
        assert_eq!(match_range("git", "svn"), None);
    }

    #[test]
    fn highlighted_spans_split_around_match() {
        let spans = highlighted_spans("git status", Some(4..8), Role::Text, false);
        let roles: Vec<_> = spans.iter().map(|s| s.role).collect();
        assert_eq!(roles, [Role::Text, Role::Match, Role::Text]);
        assert_eq!(spans[1].text, "stat");

        let selected = highlighted_spans("git status", Some(4..8), Role::Selected, true);
        assert_eq!(selected, vec![Span::new("git status", Role::Selected)]);
    }
}
