//! Cheatsheet viewer: an interactive terminal browser for YAML command cheat sheets.
//!
//! The viewer provides:
//! - A sheet selector listing every `.yaml` file under a catalog directory
//! - A command list filtered by a horizontally scrolling tag strip
//! - Case-insensitive live search with match highlighting
//! - A detail view with syntax, options, examples, notes and related commands
//! - Background loading so the terminal never blocks on file I/O

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Binary (main.rs) + terminal session (terminal)     │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Pure event handling                              │
//! │  - Key bindings                                     │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Source Layer  │   │ Worker Layer  │
//! │ (ui/)         │   │ (source/)     │   │ (worker/)     │
//! │ - Rendering   │   │ - YAML decode │   │ - Load thread │
//! │ - Theming     │   │ - Discovery   │   │ - Seq numbers │
//! │ - Tag window  │   │ - Source API  │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure, Domain & Filter                    │
//! │  - Tilde expansion (infrastructure/)                │
//! │  - Error types and catalog model (domain/)          │
//! │  - Tag and search filters (filter)                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing subscriber                               │
//! │  - Daily log files                                  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: View state machine with event/action model
//! - [`cli`]: Command line arguments
//! - [`domain`]: Core domain types (catalog, errors)
//! - [`filter`]: Tag and search filtering
//! - [`infrastructure`]: Platform utilities (paths)
//! - [`observability`]: Logging to daily files
//! - [`source`]: Sheet storage abstraction and YAML implementation
//! - [`terminal`]: crossterm session and input thread
//! - [`ui`]: Rendering, theming and tag strip windowing
//! - [`worker`]: Background loader
//!
//! # Initialization Flow
//!
//! 1. **Startup** (`main.rs`):
//!    - Parse the command line into a [`Config`]
//!    - Initialize tracing
//!    - Resolve the theme
//!    - Build the initial [`ViewState`] and its first load
//!
//! 2. **Loading**:
//!    - Without a sheet argument the catalog directory is scanned and the selector shown
//!    - With a sheet argument that sheet is loaded and the list shown directly
//!
//! 3. **Event Loop**:
//!    - Keys, resizes and load completions arrive on one channel
//!    - [`handle_event`] computes the next state and the actions to run
//!    - The frame is repainted when the transition asks for it
//!
//! # Examples
//!
//! ```rust
//! use cheatsheet_viewer::domain::{Catalog, Entry};
//! use cheatsheet_viewer::worker::LoadResponse;
//! use cheatsheet_viewer::{handle_event, Action, Event, ViewState};
//! use std::path::Path;
//!
//! let (state, actions) = ViewState::start("cheatsheets".into(), Some(Path::new("git.yaml")));
//! let Action::Load(request) = &actions[0] else { unreachable!() };
//!
//! let catalog = Catalog {
//!     title: "Git".into(),
//!     entries: vec![Entry::new("git status", "Show status")],
//!     ..Catalog::default()
//! };
//! let event = Event::Loaded(LoadResponse::catalog(request.seq, catalog));
//! let transition = handle_event(state, &event);
//!
//! assert!(transition.should_render);
//! assert_eq!(transition.state.visible_entries().len(), 1);
//! ```

pub mod app;
pub mod cli;
pub mod domain;
pub mod filter;
pub mod infrastructure;
pub mod observability;
pub mod source;
pub mod terminal;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, Event, Mode, SearchFocus, Transition, ViewState};
pub use domain::{Result, ViewerError};
pub use ui::Theme;

use std::path::PathBuf;

/// Default catalog directory, relative to the working directory.
pub const DEFAULT_SHEET_DIR: &str = "cheatsheets";

/// Default log directory, relative to the working directory.
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Runtime configuration assembled from the command line and environment.
///
/// # Example
///
/// ```rust
/// use cheatsheet_viewer::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     sheet_file: Some(PathBuf::from("cheatsheets/git.yaml")),
///     ..Config::default()
/// };
/// assert_eq!(config.sheet_dir, PathBuf::from("cheatsheets"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root directory scanned for sheets.
    ///
    /// Default: `cheatsheets`
    pub sheet_dir: PathBuf,

    /// Sheet opened directly, skipping the selector.
    pub sheet_file: Option<PathBuf>,

    /// Built-in theme name to use.
    ///
    /// Options: `classic`, `catppuccin-mocha`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<PathBuf>,

    /// Log level name.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub log_level: Option<String>,

    /// Directory receiving the daily log files.
    ///
    /// Default: `logs`
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet_dir: PathBuf::from(DEFAULT_SHEET_DIR),
            sheet_file: None,
            theme_name: None,
            theme_file: None,
            log_level: None,
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
        }
    }
}

/// Resolves the theme selected by `config`.
///
/// A theme file wins over a theme name. An unknown theme name falls back to the
/// default theme with a warning.
///
/// # Errors
///
/// Returns [`ViewerError::Theme`] if the theme file cannot be read or parsed.
///
/// # Example
///
/// ```rust
/// use cheatsheet_viewer::{resolve_theme, Config};
///
/// let config = Config {
///     theme_name: Some("no-such-theme".to_string()),
///     ..Config::default()
/// };
/// let theme = resolve_theme(&config)?;
/// assert_eq!(theme.name, "classic");
/// # Ok::<(), cheatsheet_viewer::ViewerError>(())
/// ```
pub fn resolve_theme(config: &Config) -> Result<Theme> {
    if let Some(theme_file) = &config.theme_file {
        let theme = Theme::from_file(theme_file)?;
        tracing::debug!(theme_file = %theme_file.display(), theme = %theme.name, "theme loaded from file");
        return Ok(theme);
    }

    let theme = config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
        Theme::from_name(theme_name).unwrap_or_else(|| {
            tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
            Theme::default()
        })
    });
    Ok(theme)
}
