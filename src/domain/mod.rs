//! Domain layer for the cheat sheet viewer.
//!
//! This module contains the core domain types, independent of the terminal, the
//! filesystem and the event loop.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`catalog`]: Sheet, entry and tag menu model
//!
//! # Examples
//!
//! ```
//! use cheatsheet_viewer::domain::{Entry, TagMenu};
//!
//! let menu = TagMenu::from_entries(&[Entry::new("git status", "Show status")]);
//! assert_eq!(menu.label(0), "all");
//! ```

pub mod catalog;
pub mod error;

pub use catalog::{Catalog, CommandOption, Entry, Example, TagMenu, ALL_TAG};
pub use error::{ErrorInfo, Result, ViewerError};
