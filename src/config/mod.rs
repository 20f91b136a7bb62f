//! Logger configuration: defaults, shallow merging, and TOML loading.
//!
//! Struct definitions live in `structs`; this module owns the merge rule and file I/O.

mod structs;

pub use structs::{
    Config, CustomColors, DEFAULT_LOG_DIR, DEFAULT_RETENTION, LogFilePath, PartialConfig,
    TimestampMode, WriteMode,
};

use crate::internal;
use std::fs;
use std::path::Path;

impl Config {
    /// Defaults with `partial` merged on top.
    #[must_use]
    pub fn with(partial: PartialConfig) -> Self {
        let mut config = Self::default();
        config.merge(partial);
        config
    }

    /// Shallow merge: every field present in `partial` replaces the current value,
    /// absent fields persist. `custom_colors` is replaced as a whole.
    pub fn merge(&mut self, partial: PartialConfig) {
        if let Some(path) = partial.log_file_path {
            self.log_file_path = path;
        }
        if let Some(enabled) = partial.use_colors {
            self.use_colors = enabled;
        }
        if let Some(mode) = partial.timestamps {
            self.timestamps = mode;
        }
        if let Some(enabled) = partial.icons {
            self.icons = enabled;
        }
        if let Some(colors) = partial.custom_colors {
            self.custom_colors = Some(colors);
        }
        if let Some(mode) = partial.write_mode {
            self.write_mode = mode;
        }
        if let Some(periods) = partial.retention {
            self.retention = periods;
        }
    }

    /// Parses a full configuration; omitted keys take their defaults.
    ///
    /// # Errors
    /// Returns `Error::ConfigParse` on TOML syntax or type errors.
    pub fn from_toml_str(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// Loads configuration from a TOML file. A missing file yields the defaults.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::info(
                "CONFIG",
                &format!("Config file not found, using defaults: {}", path.display()),
            );
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        internal::info("CONFIG", &format!("Config loaded from {}", path.display()));
        Ok(config)
    }
}

impl PartialConfig {
    /// Parses a reconfiguration request; only the keys present are applied on merge.
    ///
    /// # Errors
    /// Returns `Error::ConfigParse` on TOML syntax or type errors.
    pub fn from_toml_str(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }
}
