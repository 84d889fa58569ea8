//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber, wiring the `tracing` macros
//! used across the crate to a plain-text log file per day.

use super::file_writer::DailyFileWriter;
use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable read when neither `RUST_LOG` nor a configured level is set.
pub const LEVEL_ENV: &str = "LogLevel";

const DEFAULT_LEVEL: &str = "info";

/// Initializes the tracing subscriber writing to `config.log_dir`.
///
/// # Level Resolution
///
/// 1. `RUST_LOG` environment variable (full filter syntax)
/// 2. `config.log_level`
/// 3. `LogLevel` environment variable
/// 4. Default: `"info"`
///
/// # Initialization Behavior
///
/// - Creates the log directory if it doesn't exist
/// - Silently does nothing if the directory cannot be created (observability is optional)
/// - Idempotent: safe to call multiple times (only the first call takes effect)
///
/// # Example
///
/// ```rust
/// use cheatsheet_viewer::observability::init_tracing;
/// use cheatsheet_viewer::Config;
///
/// let dir = tempfile::tempdir().unwrap();
/// let config = Config {
///     log_dir: dir.path().to_path_buf(),
///     log_level: Some("debug".to_string()),
///     ..Config::default()
/// };
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let Ok(writer) = DailyFileWriter::new(&config.log_dir) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = config
            .log_level
            .clone()
            .or_else(|| std::env::var(LEVEL_ENV).ok())
            .unwrap_or_else(|| DEFAULT_LEVEL.to_string());
        EnvFilter::new(normalize_level(&level))
    });

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
}

/// Maps a user-supplied level name onto a `tracing` level, case-insensitively.
///
/// Unknown names fall back to `"info"`.
#[must_use]
pub fn normalize_level(level: &str) -> &'static str {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "warn" | "warning" => "warn",
        "error" | "fatal" | "panic" => "error",
        "off" => "off",
        _ => DEFAULT_LEVEL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_are_normalized() {
        assert_eq!(normalize_level("DEBUG"), "debug");
        assert_eq!(normalize_level("Warning"), "warn");
        assert_eq!(normalize_level("fatal"), "error");
        assert_eq!(normalize_level("verbose"), "info");
        assert_eq!(normalize_level(""), "info");
    }
}
