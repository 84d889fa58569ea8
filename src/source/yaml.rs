//! YAML file sheet source.
//!
//! Sheets are plain YAML documents on disk. Discovery walks the catalog directory
//! recursively and reports every `.yaml` file (extension matched
//! case-insensitively) relative to the directory.
//!
//! # File Format
//!
//! ```yaml
//! title: Git Commands
//! description: Everyday version control
//! commands:
//!   - name: git status
//!     shortDesc: Show the working tree status
//!     syntax: git status [options]
//!     tags: [git, basics]
//!     complexity: Beginner
//!     options:
//!       - flag: -s
//!         description: Short format
//!     examples:
//!       - code: git status -s
//!         description: Compact output
//!     notes:
//!       - Run it often
//!     related: [git diff]
//! ```

use crate::domain::{Catalog, Result, ViewerError};
use crate::source::backend::SheetSource;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Sheet source reading YAML files from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlSheetSource;

impl YamlSheetSource {
    fn is_sheet_file(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml"))
    }
}

impl SheetSource for YamlSheetSource {
    fn load_catalog(&self, path: &Path) -> Result<Catalog> {
        let _span = tracing::debug_span!("load_catalog", path = %path.display()).entered();

        let contents = fs::read_to_string(path).map_err(|source| ViewerError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog: Catalog =
            serde_yaml::from_str(&contents).map_err(|source| ViewerError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!(
            title = %catalog.title,
            entries = catalog.entries.len(),
            "catalog parsed"
        );

        Ok(catalog)
    }

    fn discover_sheets(&self, dir: &Path) -> Result<Vec<String>> {
        let _span = tracing::debug_span!("discover_sheets", dir = %dir.display()).entered();

        let mut sheets = Vec::new();
        for entry in WalkDir::new(dir).follow_links(true) {
            let entry = entry.map_err(|source| ViewerError::Discovery {
                path: dir.to_path_buf(),
                source,
            })?;

            if !entry.file_type().is_file() || !Self::is_sheet_file(entry.path()) {
                continue;
            }

            let relative = entry.path().strip_prefix(dir).unwrap_or(entry.path());
            sheets.push(relative.to_string_lossy().into_owned());
        }

        sheets.sort();
        tracing::debug!(count = sheets.len(), "sheets discovered");
        Ok(sheets)
    }
}
