//! daylog's own diagnostics (directory creation, retention removals, config loading).
//!
//! Uses `OnceLock` so the diagnostic logger is initialized exactly once. Until `init`
//! is called every diagnostic is dropped, so the library stays silent by default.

use crate::config::{LogFilePath, PartialConfig, TimestampMode};
use crate::level::Level;
use crate::logger::Logger;
use std::sync::OnceLock;

static INTERNAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Turns diagnostics on at the given threshold. Only the first call takes effect.
/// Diagnostics go to the console only; they are never persisted.
pub fn init(level: Level) {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(|| {
        Logger::with_config(
            level,
            PartialConfig::new()
                .log_file_path(LogFilePath::Disabled)
                .timestamps(TimestampMode::None)
                .icons(false),
        )
    });
    if !was_init {
        info("INTERNAL", &format!("Diagnostics enabled at {level}"));
    }
}

#[must_use]
pub fn is_enabled() -> bool {
    INTERNAL_LOGGER.get().is_some()
}

fn log(level: Level, scope: &str, msg: &str) {
    if let Some(logger) = INTERNAL_LOGGER.get() {
        // file output is disabled for this logger, so nothing can fail
        let _ = logger.log(level, format!("{scope} {msg}"), &[]);
    }
}

pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

pub fn warn(scope: &str, msg: &str) {
    log(Level::Warn, scope, msg);
}

pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
