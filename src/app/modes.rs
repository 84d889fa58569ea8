//! View mode state types for the application.
//!
//! This module defines the state machine enum that controls which screen is shown
//! and which keybindings are active.
//!
//! # State Machine
//!
//! The viewer is always in exactly one of five modes:
//! - **Selector**: picking a sheet from the catalog directory
//! - **List**: browsing the tag-filtered entries of the loaded sheet
//! - **Detail**: reading a single entry
//! - **Search(Editing)**: typing a query, results update live
//! - **Search(Applied)**: browsing the results of a confirmed query
//!
//! # Example
//!
//! ```rust
//! use cheatsheet_viewer::app::modes::{Mode, SearchFocus};
//!
//! let mode = Mode::Search(SearchFocus::Editing);
//! assert!(mode.is_search());
//! assert!(!Mode::List.is_search());
//! ```

/// Phase of an active search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// The query is being typed; every printable key extends it.
    Editing,

    /// The query was confirmed with Enter; the results can be navigated and opened.
    Applied,
}

/// Where the detail view returns to when closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailOrigin {
    /// Opened from the tag-filtered list.
    List,
    /// Opened from confirmed search results.
    SearchResults,
}

/// Snapshot taken when the detail view is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailView {
    /// Position of the shown entry in the sheet's entry list.
    pub entry: usize,
    pub origin: DetailOrigin,
}

/// Current screen and input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Sheet picker over the discovered catalog files.
    Selector,

    /// Tag-filtered entry list with the tag strip.
    List,

    /// Single entry detail view.
    Detail(DetailView),

    /// Search over entry names; the tag filter is suspended.
    Search(SearchFocus),
}

impl Mode {
    /// Returns `true` for both search phases.
    #[must_use]
    pub const fn is_search(self) -> bool {
        matches!(self, Self::Search(_))
    }

    /// Returns `true` while a search query is being typed.
    #[must_use]
    pub const fn is_editing(self) -> bool {
        matches!(self, Self::Search(SearchFocus::Editing))
    }

    /// Short name used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Selector => "selector",
            Self::List => "list",
            Self::Detail(_) => "detail",
            Self::Search(SearchFocus::Editing) => "search-editing",
            Self::Search(SearchFocus::Applied) => "search-applied",
        }
    }
}
