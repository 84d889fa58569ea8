//! Command line arguments.
//!
//! The arguments are parsed with clap's derive API and turned into a [`Config`].
//! Paths given on the command line or through `CHEATSHEET_DIR` may start with `~`,
//! which is expanded here because the shell does not expand it inside environment
//! variables or quoted arguments.

use crate::infrastructure::expand_tilde;
use crate::{Config, DEFAULT_LOG_DIR, DEFAULT_SHEET_DIR};
use clap::Parser;
use std::path::PathBuf;

/// Interactive terminal viewer for YAML command cheat sheets.
#[derive(Debug, Parser)]
#[command(name = "cheatsheet", version, about)]
pub struct Cli {
    /// Directory searched for `.yaml` cheat sheets.
    #[arg(short, long, value_name = "DIR", env = "CHEATSHEET_DIR", default_value = DEFAULT_SHEET_DIR)]
    pub dir: PathBuf,

    /// Sheet to open directly, skipping the selector.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Built-in theme (`classic`, `catppuccin-mocha`).
    #[arg(long, value_name = "NAME")]
    pub theme: Option<String>,

    /// TOML theme file; takes precedence over `--theme`.
    #[arg(long = "theme-file", value_name = "PATH")]
    pub theme_file: Option<PathBuf>,

    /// Log level (`trace`, `debug`, `info`, `warn`, `error`).
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Directory receiving the daily log files.
    #[arg(long = "log-dir", value_name = "DIR", default_value = DEFAULT_LOG_DIR)]
    pub log_dir: PathBuf,
}

impl Cli {
    /// Converts the parsed arguments into a [`Config`], expanding `~` in paths.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cheatsheet_viewer::cli::Cli;
    /// use clap::Parser;
    /// use std::path::PathBuf;
    ///
    /// let cli = Cli::parse_from(["cheatsheet", "--dir", "/srv/sheets", "git.yaml"]);
    /// let config = cli.into_config();
    /// assert_eq!(config.sheet_dir, PathBuf::from("/srv/sheets"));
    /// assert_eq!(config.sheet_file, Some(PathBuf::from("git.yaml")));
    /// ```
    #[must_use]
    pub fn into_config(self) -> Config {
        Config {
            sheet_dir: expand_tilde(&self.dir),
            sheet_file: self.file.map(|file| expand_tilde(&file)),
            theme_name: self.theme,
            theme_file: self.theme_file.map(|file| expand_tilde(&file)),
            log_level: self.log_level,
            log_dir: expand_tilde(&self.log_dir),
        }
    }
}
