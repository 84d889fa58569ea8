//! Sheet source abstraction.
//!
//! This module defines the [`SheetSource`] trait that abstracts over where cheat
//! sheets come from. The worker only talks to this trait, which keeps the loader
//! testable with in-memory sources.
//!
//! The trait is minimal: each method maps directly to one kind of load request.

use crate::domain::{Catalog, Result};
use std::path::Path;

/// Abstraction over cheat sheet storage.
///
/// # Implementations
///
/// - [`YamlSheetSource`](crate::source::YamlSheetSource): YAML files on the local filesystem
///
/// # Examples
///
/// ```no_run
/// use cheatsheet_viewer::source::{SheetSource, YamlSheetSource};
/// use std::path::Path;
///
/// let source = YamlSheetSource;
/// let sheets = source.discover_sheets(Path::new("cheatsheets"))?;
/// # Ok::<(), cheatsheet_viewer::ViewerError>(())
/// ```
pub trait SheetSource: Send + Sync {
    /// Reads and decodes the sheet at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the sheet cannot be read or is not a valid sheet.
    fn load_catalog(&self, path: &Path) -> Result<Catalog>;

    /// Lists the sheets available under `dir`.
    ///
    /// Names are relative to `dir` and sorted alphabetically so the selector order
    /// is stable between runs.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be walked.
    fn discover_sheets(&self, dir: &Path) -> Result<Vec<String>>;
}
