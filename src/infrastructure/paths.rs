//! Path manipulation utilities.
//!
//! This module handles tilde expansion for paths coming from the command line and
//! the environment, where the shell has not already expanded them.

use std::path::{Path, PathBuf};

/// Expands a leading `~` to the current user's home directory.
///
/// Only `~` on its own and `~/...` are expanded; `~user` forms and paths without
/// a tilde are returned unchanged. If the home directory cannot be determined
/// the path is returned unchanged.
///
/// # Examples
///
/// ```
/// use cheatsheet_viewer::infrastructure::expand_tilde;
/// use std::path::Path;
///
/// assert_eq!(expand_tilde(Path::new("/absolute/path")), Path::new("/absolute/path"));
/// assert_eq!(expand_tilde(Path::new("cheatsheets")), Path::new("cheatsheets"));
/// ```
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    dirs::home_dir().map_or_else(|| path.to_path_buf(), |home| expand_tilde_with(path, &home))
}

/// Expands a leading `~` against an explicit `home` directory.
#[must_use]
pub fn expand_tilde_with(path: &Path, home: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}
