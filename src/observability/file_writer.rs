//! Daily log file writer with retention.
//!
//! This module provides a thread-safe writer that appends to one log file per
//! calendar day, named `application_YYYY-MM-DD.log`. When the local date changes
//! the next write opens the new day's file, and old files beyond the retention
//! limit are deleted.

use chrono::{Local, NaiveDate};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;

/// Number of daily log files kept, including today's.
pub const MAX_LOG_FILES: usize = 7;

const FILE_PREFIX: &str = "application_";
const FILE_SUFFIX: &str = ".log";

/// Thread-safe writer appending to the current day's log file.
///
/// The file is opened lazily on the first write of each day.
///
/// # Example
///
/// ```rust
/// use cheatsheet_viewer::observability::DailyFileWriter;
/// use chrono::NaiveDate;
///
/// let dir = tempfile::tempdir().unwrap();
/// let writer = DailyFileWriter::new(dir.path()).unwrap();
/// let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
/// writer.write_on(day, b"started\n").unwrap();
/// assert!(dir.path().join("application_2024-05-01.log").exists());
/// ```
pub struct DailyFileWriter {
    /// Directory holding the log files.
    dir: PathBuf,
    /// Currently open file and the day it belongs to.
    current: Mutex<Option<(NaiveDate, File)>>,
}

impl DailyFileWriter {
    /// Creates a writer for `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            current: Mutex::new(None),
        })
    }

    /// Path of the log file for `date`.
    #[must_use]
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir
            .join(format!("{FILE_PREFIX}{}{FILE_SUFFIX}", date.format("%Y-%m-%d")))
    }

    /// Appends `buf` to the log file of `date`, switching files if the day changed.
    ///
    /// # Errors
    ///
    /// May fail due to file system permissions, disk space exhaustion or mutex
    /// poisoning.
    pub fn write_on(&self, date: NaiveDate, buf: &[u8]) -> io::Result<usize> {
        let mut current = self
            .current
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        if current.as_ref().map_or(true, |(day, _)| *day != date) {
            *current = None;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(self.path_for(date))?;
            *current = Some((date, file));
            self.cleanup_old_logs()?;
        }

        let (_, file) = current
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;
        file.write_all(buf)?;
        file.flush()?;
        Ok(buf.len())
    }

    /// Removes log files beyond [`MAX_LOG_FILES`], oldest first.
    ///
    /// Individual deletion errors are ignored so cleanup continues.
    fn cleanup_old_logs(&self) -> io::Result<()> {
        let mut logs: Vec<PathBuf> = fs::read_dir(&self.dir)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| is_daily_log(path))
            .collect();

        // The date in the name sorts lexicographically.
        logs.sort_unstable_by(|a, b| b.file_name().cmp(&a.file_name()));

        for old_log in logs.iter().skip(MAX_LOG_FILES) {
            let _ = fs::remove_file(old_log);
        }

        Ok(())
    }
}

fn is_daily_log(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.strip_prefix(FILE_PREFIX))
        .and_then(|rest| rest.strip_suffix(FILE_SUFFIX))
        .is_some_and(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok())
}

impl std::fmt::Debug for DailyFileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DailyFileWriter")
            .field("dir", &self.dir)
            .finish_non_exhaustive()
    }
}

/// Per-event handle returned by [`MakeWriter`]; writes go to today's file.
#[derive(Debug)]
pub struct DailyLogHandle<'a> {
    writer: &'a DailyFileWriter,
}

impl Write for DailyLogHandle<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write_on(Local::now().date_naive(), buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for DailyFileWriter {
    type Writer = DailyLogHandle<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        DailyLogHandle { writer: self }
    }
}
