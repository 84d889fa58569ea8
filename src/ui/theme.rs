//! Theme management and role-to-style resolution.
//!
//! This module defines the colour scheme system for the viewer, supporting both
//! built-in themes and custom themes loaded from TOML files. Components tag their
//! output with a semantic [`Role`]; the theme turns each role into a crossterm
//! [`ContentStyle`] when a frame is painted.
//!
//! # Built-in Themes
//!
//! - `classic`: bright palette on the terminal background (default)
//! - `catppuccin-mocha`: dark theme with warm tones
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! title_fg = "#FFFDF5"
//! title_bg = "#2D9CDB"
//! detail_title_bg = "#25A065"
//! heading = "#FAFAFA"
//! text = ""
//! dim = "#626262"
//! selected_fg = "#FFFFFF"
//! selected_bg = "#3C3836"
//! number = "#777777"
//! tag = "#89DDFF"
//! syntax = "#5AF78E"
//! code_fg = "#B8BB26"
//! code_bg = "#282828"
//! flag = "#F3A922"
//! option_desc = "#DDDDDD"
//! note = "#A8A8A8"
//! complexity = "#B5E8B5"
//! search = "#5AF78E"
//! cursor_bg = "#5AF78E"
//! match_fg = "#282828"
//! match_bg = "#F3A922"
//! error = "#FF5F5F"
//! ```
//!
//! An empty string leaves that colour at the terminal default.
//!
//! # Example
//!
//! ```rust
//! use cheatsheet_viewer::ui::helpers::Role;
//! use cheatsheet_viewer::ui::Theme;
//!
//! let theme = Theme::from_name("catppuccin-mocha").unwrap();
//! let style = theme.style(Role::Selected);
//! assert!(style.background_color.is_some());
//! ```

use crate::domain::{Result, ViewerError};
use crate::ui::helpers::Role;
use crossterm::style::{Attribute, Color, ContentStyle};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "classic";

/// Names accepted by [`Theme::from_name`].
pub const BUILTIN_THEMES: [&str; 2] = ["classic", "catppuccin-mocha"];

/// Colour scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Colour palette for all roles.
    pub colors: ThemeColors,
}

/// Colour definitions, one or two per [`Role`].
///
/// All colours are hex strings (e.g. `"#cdd6f4"`). Missing keys default to an
/// empty string, which leaves the terminal's own colour in place.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeColors {
    /// Header text.
    pub title_fg: String,
    /// Header background for the sheet and selector titles.
    pub title_bg: String,
    /// Header background while an entry is open.
    pub detail_title_bg: String,
    /// Section headings in the detail view.
    pub heading: String,

    /// Regular text.
    pub text: String,
    /// Help line and scroll markers.
    pub dim: String,

    /// Selected row foreground.
    pub selected_fg: String,
    /// Selected row background.
    pub selected_bg: String,

    pub number: String,
    pub tag: String,
    /// Related entry names.
    pub syntax: String,
    pub code_fg: String,
    pub code_bg: String,
    pub flag: String,
    pub option_desc: String,
    pub note: String,
    pub complexity: String,

    /// Search prompt and results indicator.
    pub search: String,
    /// Background of the search input cursor cell.
    pub cursor_bg: String,
    /// Search match highlight foreground.
    pub match_fg: String,
    /// Search match highlight background.
    pub match_bg: String,

    /// Error screen message.
    pub error: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` if the name is not one of [`BUILTIN_THEMES`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "classic" => include_str!("../../themes/classic.toml"),
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::Theme`] if the file cannot be read or is not a
    /// valid theme document.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| ViewerError::Theme(format!("failed to read {}: {e}", path.display())))?;

        toml::from_str(&contents)
            .map_err(|e| ViewerError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// A theme without colours, used when the built-in palette cannot be parsed.
    #[must_use]
    pub fn monochrome() -> Self {
        Self {
            name: "monochrome".to_string(),
            colors: ThemeColors::default(),
        }
    }

    /// Resolves the terminal style for `role`.
    #[must_use]
    pub fn style(&self, role: Role) -> ContentStyle {
        let c = &self.colors;
        match role {
            Role::Text => styled(&c.text, "", &[]),
            Role::Dim => styled(&c.dim, "", &[]),
            Role::Title => styled(&c.title_fg, &c.title_bg, &[Attribute::Bold]),
            Role::DetailTitle => styled(&c.title_fg, &c.detail_title_bg, &[Attribute::Bold]),
            Role::Heading => styled(&c.heading, "", &[Attribute::Bold]),
            Role::Selected => styled(&c.selected_fg, &c.selected_bg, &[Attribute::Bold]),
            Role::Number => styled(&c.number, "", &[]),
            Role::Tag => styled(&c.tag, "", &[Attribute::Italic]),
            Role::Syntax => styled(&c.syntax, "", &[]),
            Role::Code => styled(&c.code_fg, &c.code_bg, &[]),
            Role::Flag => styled(&c.flag, "", &[]),
            Role::OptionDesc => styled(&c.option_desc, "", &[]),
            Role::Note => styled(&c.note, "", &[Attribute::Italic]),
            Role::Complexity => styled(&c.complexity, "", &[]),
            Role::Search => styled(&c.search, "", &[Attribute::Bold]),
            Role::Cursor => styled("", &c.cursor_bg, &[]),
            Role::Match => styled(&c.match_fg, &c.match_bg, &[Attribute::Bold]),
            Role::Error => styled(&c.error, "", &[Attribute::Bold]),
        }
    }
}

impl Default for Theme {
    /// Returns the built-in [`DEFAULT_THEME`].
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).unwrap_or_else(Self::monochrome)
    }
}

fn styled(fg: &str, bg: &str, attributes: &[Attribute]) -> ContentStyle {
    let mut style = ContentStyle::new();
    style.foreground_color = hex_to_color(fg);
    style.background_color = hex_to_color(bg);
    for attribute in attributes {
        style.attributes.set(*attribute);
    }
    style
}

/// Converts a hex colour to a crossterm RGB colour.
///
/// Strips a `#` prefix. Returns `None` for empty or malformed values.
#[must_use]
pub fn hex_to_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb { r, g, b })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_themes_parse() {
        for name in BUILTIN_THEMES {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("neon").is_none());
        assert_eq!(Theme::default().name, DEFAULT_THEME);
    }

    #[test]
    fn hex_parsing() {
        assert_eq!(
            hex_to_color("#7D56F4"),
            Some(Color::Rgb { r: 0x7d, g: 0x56, b: 0xf4 })
        );
        assert_eq!(hex_to_color("89ddff"), Some(Color::Rgb { r: 0x89, g: 0xdd, b: 0xff }));
        assert_eq!(hex_to_color(""), None);
        assert_eq!(hex_to_color("#zzzzzz"), None);
    }

    #[test]
    fn selected_role_is_bold_with_background() {
        let style = Theme::default().style(Role::Selected);
        assert!(style.background_color.is_some());
        assert!(style.attributes.has(Attribute::Bold));
        assert_eq!(Theme::monochrome().style(Role::Text), ContentStyle::new());
    }

    #[test]
    fn custom_theme_file_with_partial_colors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name = \"mine\"\n[colors]\ntag = \"#123456\"").unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "mine");
        assert_eq!(theme.colors.tag, "#123456");
        assert!(theme.colors.flag.is_empty());
    }

    #[test]
    fn invalid_theme_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "this is not toml = = =").unwrap();
        assert!(matches!(Theme::from_file(file.path()), Err(ViewerError::Theme(_))));
    }
}
