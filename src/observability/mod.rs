//! File-based logging with `tracing`.
//!
//! This module provides the logging infrastructure for the viewer. Events and
//! spans from the `tracing` macros are formatted as plain text and written to one
//! file per day, so the terminal UI is never disturbed by log output.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → DailyFileWriter → <log-dir>/application_YYYY-MM-DD.log
//! ```
//!
//! # Features
//!
//! - **Daily Files**: `application_YYYY-MM-DD.log`, dated in local time
//! - **Retention**: only the newest 7 files are kept
//! - **Level Control**: `RUST_LOG`, then `--log-level`, then `LogLevel`, then `info`
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`file_writer`]: Daily log file writer

pub mod file_writer;
pub mod init;

pub use file_writer::DailyFileWriter;
pub use init::{init_tracing, normalize_level};
