//! Configuration struct definitions.

use crate::fmt::ColorName;
use crate::level::Level;
use serde::Deserialize;
use std::path::PathBuf;

/// Directory used when persistence is switched on without naming a directory.
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Number of historical month directories kept next to the current one.
pub const DEFAULT_RETENTION: usize = 6;

/// Where persisted lines go, if anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "RawLogFilePath")]
pub enum LogFilePath {
    /// No file output.
    #[default]
    Disabled,
    /// `logs` under the current working directory.
    Default,
    /// Explicit base directory; a leading `~` expands to the home directory.
    Dir(PathBuf),
}

impl LogFilePath {
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }

    /// Base directory before home expansion, `None` when disabled.
    #[must_use]
    pub fn base_dir(&self) -> Option<PathBuf> {
        match self {
            Self::Disabled => None,
            Self::Default => Some(PathBuf::from(DEFAULT_LOG_DIR)),
            Self::Dir(dir) => Some(dir.clone()),
        }
    }
}

/// Config files write `log_file_path = true`, `false`, or a directory string.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawLogFilePath {
    Flag(bool),
    Dir(String),
}

impl From<RawLogFilePath> for LogFilePath {
    fn from(raw: RawLogFilePath) -> Self {
        match raw {
            RawLogFilePath::Flag(false) => Self::Disabled,
            RawLogFilePath::Flag(true) => Self::Default,
            RawLogFilePath::Dir(dir) if dir.is_empty() => Self::Disabled,
            RawLogFilePath::Dir(dir) => Self::Dir(PathBuf::from(dir)),
        }
    }
}

impl From<bool> for LogFilePath {
    fn from(enabled: bool) -> Self {
        if enabled { Self::Default } else { Self::Disabled }
    }
}

impl From<&str> for LogFilePath {
    fn from(dir: &str) -> Self {
        RawLogFilePath::Dir(dir.to_string()).into()
    }
}

impl From<String> for LogFilePath {
    fn from(dir: String) -> Self {
        RawLogFilePath::Dir(dir).into()
    }
}

impl From<PathBuf> for LogFilePath {
    fn from(dir: PathBuf) -> Self {
        Self::Dir(dir)
    }
}

/// Which lines carry an ISO-8601 timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimestampMode {
    None,
    /// Only the persisted file line.
    #[default]
    LogOnly,
    /// Console and file lines.
    All,
}

/// How a line reaches the day file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WriteMode {
    /// An existing day file is overwritten with the new line (blocking); a missing
    /// one is created by a background append whose outcome is discarded.
    #[default]
    Compat,
    /// Every line is appended (blocking, errors returned).
    Append,
}

/// Per-level color names. Kept as raw strings so an unknown name in a config
/// file falls back to the level default instead of failing the whole parse.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct CustomColors {
    pub info: Option<String>,
    pub warn: Option<String>,
    pub error: Option<String>,
}

impl CustomColors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn info(mut self, name: impl Into<String>) -> Self {
        self.info = Some(name.into());
        self
    }

    #[must_use]
    pub fn warn(mut self, name: impl Into<String>) -> Self {
        self.warn = Some(name.into());
        self
    }

    #[must_use]
    pub fn error(mut self, name: impl Into<String>) -> Self {
        self.error = Some(name.into());
        self
    }

    /// Recognized override for a level; unknown names resolve to `None`.
    #[must_use]
    pub fn get(&self, level: Level) -> Option<ColorName> {
        let name = match level {
            Level::Info => self.info.as_deref(),
            Level::Warn => self.warn.as_deref(),
            Level::Error => self.error.as_deref(),
        }?;
        ColorName::lookup(name)
    }
}

/// Effective logger configuration. Every field has a default so an empty file works.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_file_path: LogFilePath,
    pub use_colors: bool,
    pub timestamps: TimestampMode,
    pub icons: bool,
    pub custom_colors: Option<CustomColors>,
    pub write_mode: WriteMode,
    /// Historical month directories kept when a new month directory is created.
    pub retention: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file_path: LogFilePath::Disabled,
            use_colors: true,
            timestamps: TimestampMode::LogOnly,
            icons: true,
            custom_colors: None,
            write_mode: WriteMode::Compat,
            retention: DEFAULT_RETENTION,
        }
    }
}

/// A reconfiguration request: `None` fields leave the current value alone.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct PartialConfig {
    pub log_file_path: Option<LogFilePath>,
    pub use_colors: Option<bool>,
    pub timestamps: Option<TimestampMode>,
    pub icons: Option<bool>,
    pub custom_colors: Option<CustomColors>,
    pub write_mode: Option<WriteMode>,
    pub retention: Option<usize>,
}

impl PartialConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn log_file_path(mut self, path: impl Into<LogFilePath>) -> Self {
        self.log_file_path = Some(path.into());
        self
    }

    #[must_use]
    pub const fn use_colors(mut self, enabled: bool) -> Self {
        self.use_colors = Some(enabled);
        self
    }

    #[must_use]
    pub const fn timestamps(mut self, mode: TimestampMode) -> Self {
        self.timestamps = Some(mode);
        self
    }

    #[must_use]
    pub const fn icons(mut self, enabled: bool) -> Self {
        self.icons = Some(enabled);
        self
    }

    #[must_use]
    pub fn custom_colors(mut self, colors: CustomColors) -> Self {
        self.custom_colors = Some(colors);
        self
    }

    #[must_use]
    pub const fn write_mode(mut self, mode: WriteMode) -> Self {
        self.write_mode = Some(mode);
        self
    }

    #[must_use]
    pub const fn retention(mut self, periods: usize) -> Self {
        self.retention = Some(periods);
        self
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.log_file_path.is_none()
            && self.use_colors.is_none()
            && self.timestamps.is_none()
            && self.icons.is_none()
            && self.custom_colors.is_none()
            && self.write_mode.is_none()
            && self.retention.is_none()
    }
}
