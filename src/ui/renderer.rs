//! Frame painter.
//!
//! This module is the only place where styled lines become terminal output. It
//! takes a [`UIViewModel`], lays it out with [`UIViewModel::frame`], resolves each
//! span's role through the [`Theme`] and queues crossterm commands into any
//! [`Write`] sink. Rows are cut to the terminal width so that a long line never
//! wraps into the next row.
//!
//! # Example
//!
//! ```rust
//! use cheatsheet_viewer::ui::helpers::{Line, Role};
//! use cheatsheet_viewer::ui::{render, Theme, UIViewModel};
//!
//! let vm = UIViewModel {
//!     body: vec![Line::styled("hello", Role::Text)],
//!     ..UIViewModel::default()
//! };
//! let mut out = Vec::new();
//! render(&mut out, &vm, &Theme::monochrome(), 20, 3).unwrap();
//! assert!(String::from_utf8_lossy(&out).contains("hello"));
//! ```

use crate::ui::helpers::{Line, Span};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;
use crossterm::cursor::MoveTo;
use crossterm::style::{PrintStyledContent, StyledContent};
use crossterm::terminal::{Clear, ClearType};
use crossterm::queue;
use std::io::{self, Write};
use unicode_width::UnicodeWidthChar;

/// Paints `vm` onto a `width` × `height` terminal.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn render<W: Write>(
    out: &mut W,
    vm: &UIViewModel,
    theme: &Theme,
    width: usize,
    height: usize,
) -> io::Result<()> {
    let _span = tracing::trace_span!("render", width, height).entered();

    for (row, line) in vm.frame(height).iter().enumerate() {
        let row = u16::try_from(row).unwrap_or(u16::MAX);
        queue!(out, MoveTo(0, row), Clear(ClearType::CurrentLine))?;
        for span in fit_to_width(line, width).spans {
            queue!(
                out,
                PrintStyledContent(StyledContent::new(theme.style(span.role), span.text))
            )?;
        }
    }

    out.flush()
}

/// Cuts `line` so that it occupies at most `width` columns.
///
/// A wide character that would straddle the edge is dropped.
#[must_use]
pub fn fit_to_width(line: &Line, width: usize) -> Line {
    let mut used = 0;
    let mut fitted = Line::blank();

    for span in &line.spans {
        let mut text = String::with_capacity(span.text.len());
        for c in span.text.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > width {
                break;
            }
            used += w;
            text.push(c);
        }
        let truncated = text.len() < span.text.len();
        if !text.is_empty() {
            fitted.spans.push(Span::new(text, span.role));
        }
        if truncated {
            break;
        }
    }

    fitted
}
