//! Unified error type for all daylog operations.

use std::path::PathBuf;

/// Error type for daylog operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Structured message serialization error.
    Serialize(serde_json::Error),
    /// Home directory could not be resolved for a `~` path.
    HomeDirNotFound,
    /// Invalid path.
    InvalidPath(PathBuf),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::Serialize(e) => write!(f, "serialization error: {e}"),
            Self::HomeDirNotFound => write!(f, "could not resolve home directory"),
            Self::InvalidPath(p) => write!(f, "invalid path: {}", p.display()),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            Self::Serialize(e) => Some(e),
            Self::HomeDirNotFound | Self::InvalidPath(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialize(e)
    }
}
