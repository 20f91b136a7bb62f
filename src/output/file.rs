//! Day files under month directories: `<base>/<MMYYYY>/<DD>.txt`.

use crate::cleanup::{self, CleanupResult, Period};
use crate::config::{Config, DEFAULT_RETENTION, TimestampMode, WriteMode};
use crate::fmt::timestamp;
use crate::internal;

use super::LogRecord;
use chrono::{DateTime, Datelike, Local};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

/// A resolved day file and what resolving it did to the tree.
#[derive(Debug, Clone)]
pub struct FileTarget {
    /// Absolute path of the day file.
    pub path: PathBuf,
    pub period: Period,
    /// The month directory did not exist before this call.
    pub new_period: bool,
    /// Month directories removed by the retention pass, if one ran.
    pub pruned: CleanupResult,
}

/// File persistence settings captured from a `Config` snapshot.
#[derive(Debug, Clone)]
pub struct FileOutput {
    base_dir: PathBuf,
    write_mode: WriteMode,
    timestamps: bool,
    retention: usize,
}

impl FileOutput {
    /// Creates a file output rooted at `base_dir` with default settings.
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            write_mode: WriteMode::Compat,
            timestamps: true,
            retention: DEFAULT_RETENTION,
        }
    }

    /// `None` when persistence is disabled.
    #[must_use]
    pub fn from_config(config: &Config) -> Option<Self> {
        let base_dir = config.log_file_path.base_dir()?;
        Some(Self {
            base_dir,
            write_mode: config.write_mode,
            timestamps: config.timestamps != TimestampMode::None,
            retention: config.retention,
        })
    }

    #[must_use]
    pub const fn write_mode(mut self, mode: WriteMode) -> Self {
        self.write_mode = mode;
        self
    }

    #[must_use]
    pub const fn timestamps(mut self, enabled: bool) -> Self {
        self.timestamps = enabled;
        self
    }

    #[must_use]
    pub const fn retention(mut self, periods: usize) -> Self {
        self.retention = periods;
        self
    }

    /// Expands a leading `~` and makes the directory absolute against the working directory.
    ///
    /// # Errors
    /// `Error::HomeDirNotFound` if `~` cannot be resolved, I/O errors from reading the
    /// working directory.
    pub fn resolve_base_dir(&self) -> Result<PathBuf, crate::Error> {
        let path = match self.base_dir.strip_prefix("~") {
            Ok(rest) => {
                let user_dirs =
                    directories::UserDirs::new().ok_or(crate::Error::HomeDirNotFound)?;
                user_dirs.home_dir().join(rest)
            }
            Err(_) => self.base_dir.clone(),
        };
        if path.as_os_str().is_empty() {
            return Err(crate::Error::InvalidPath(path));
        }
        Ok(std::path::absolute(path)?)
    }

    /// Ensures the base and month directories exist and returns the day file path.
    /// Creating a month directory triggers the retention pass.
    ///
    /// # Errors
    /// Directory creation, listing, and removal failures.
    pub fn prepare(&self, now: DateTime<Local>) -> Result<FileTarget, crate::Error> {
        let base = self.resolve_base_dir()?;
        let period = Period::of(now);

        if !base.exists() {
            fs::create_dir_all(&base)?;
            internal::info("FILE", &format!("Created log directory: {}", base.display()));
        }

        let period_dir = base.join(period.code());
        let new_period = match fs::create_dir(&period_dir) {
            Ok(()) => true,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => false,
            Err(e) => {
                internal::error(
                    "FILE",
                    &format!("Failed to create directory {}: {e}", period_dir.display()),
                );
                return Err(e.into());
            }
        };

        let pruned = if new_period {
            internal::info("FILE", &format!("Started period {period}"));
            cleanup::prune_periods(&base, self.retention, period)?
        } else {
            CleanupResult::default()
        };

        Ok(FileTarget {
            path: period_dir.join(format!("{:02}.txt", now.day())),
            period,
            new_period,
            pruned,
        })
    }

    /// The persisted line: plain label, no icon, no color, at most one timestamp.
    #[must_use]
    pub fn format_line(&self, record: &LogRecord) -> String {
        let line = record.base_line(record.level.label());
        let mut line = if self.timestamps {
            timestamp::stamp(record.time, &line)
        } else {
            line
        };
        line.push('\n');
        line
    }

    /// Persists one record. In `Compat` mode an existing day file is overwritten
    /// synchronously and a missing one is appended from a detached thread; the returned
    /// handle is only there for callers that want to wait on it.
    ///
    /// # Errors
    /// Directory failures and blocking write failures. Background append failures
    /// are never reported.
    pub fn write(&self, record: &LogRecord) -> Result<Option<JoinHandle<()>>, crate::Error> {
        let target = self.prepare(Local::now())?;
        let line = self.format_line(record);
        internal::info("FILE", &format!("Writing to: {}", target.path.display()));

        match self.write_mode {
            WriteMode::Append => {
                append(&target.path, &line)?;
                Ok(None)
            }
            WriteMode::Compat if target.path.exists() => {
                fs::write(&target.path, line)?;
                Ok(None)
            }
            WriteMode::Compat => {
                let path = target.path;
                Ok(Some(thread::spawn(move || {
                    let _ = append(&path, &line);
                })))
            }
        }
    }
}

fn append(path: &Path, line: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(line.as_bytes())
}
