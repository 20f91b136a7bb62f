//! The logger: a fixed severity threshold, a reconfigurable `Config`, and a console sink.
//! Each call snapshots the config, renders once, and hands the record to the console
//! and, when enabled, to the day file.

mod builder;

pub use builder::LoggerBuilder;

use crate::config::{Config, PartialConfig};
use crate::fmt::Message;
use crate::level::Level;
use crate::output::{Console, FileOutput, LogRecord, TerminalOutput};
use chrono::Utc;
use std::mem;
use std::sync::{Mutex, OnceLock, PoisonError, RwLock};
use std::thread::JoinHandle;

static SHARED: OnceLock<Logger> = OnceLock::new();

/// Process-wide logger with the default threshold and configuration, created on first use.
/// It can be reconfigured like any other instance.
///
/// Statics are never dropped, so call [`Logger::flush`] on it before the process exits;
/// otherwise the first line written to a new day file can be lost.
#[must_use]
pub fn shared() -> &'static Logger {
    SHARED.get_or_init(Logger::new)
}

/// The threshold is fixed at construction; the config can change between calls.
/// Dropping a logger waits for its pending background appends.
pub struct Logger {
    threshold: Level,
    config: RwLock<Config>,
    console: Box<dyn Console>,
    pending: Mutex<Vec<JoinHandle<()>>>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Info threshold, default config, real stdout/stderr.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Level::Info, PartialConfig::default())
    }

    #[must_use]
    pub fn with_level(threshold: Level) -> Self {
        Self::with_config(threshold, PartialConfig::default())
    }

    /// `config` is merged over the defaults.
    #[must_use]
    pub fn with_config(threshold: Level, config: PartialConfig) -> Self {
        Self::builder().level(threshold).config(config).build()
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Shallow-merges `partial` into the current config. Only later calls see the change.
    pub fn configure(&self, partial: PartialConfig) {
        self.config
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .merge(partial);
    }

    /// Snapshot of the current config.
    #[must_use]
    pub fn config(&self) -> Config {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub const fn threshold(&self) -> Level {
        self.threshold
    }

    #[must_use]
    pub fn should_log(&self, level: Level) -> bool {
        level >= self.threshold
    }

    /// Core dispatch. Below-threshold calls return before any rendering or I/O.
    ///
    /// # Errors
    /// File persistence failures other than the background append: directory
    /// creation, retention removal, and the blocking overwrite or append.
    pub fn log(
        &self,
        level: Level,
        message: impl Into<Message>,
        args: &[Message],
    ) -> Result<(), crate::Error> {
        if !self.should_log(level) {
            return Ok(());
        }

        let config = self.config();
        let record = LogRecord {
            level,
            message: message.into().render(),
            args: args.iter().map(Message::render).collect(),
            time: Utc::now(),
        };

        TerminalOutput::from_config(&config).write(&record, self.console.as_ref());

        let Some(file) = FileOutput::from_config(&config) else {
            return Ok(());
        };
        if let Some(handle) = file.write(&record)? {
            let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
            pending.retain(|h| !h.is_finished());
            pending.push(handle);
        }

        Ok(())
    }

    /// Waits for every background append started so far. Their outcome is still
    /// not reported; this only guarantees they have run.
    pub fn flush(&self) {
        let pending = mem::take(
            &mut *self
                .pending
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        );
        for handle in pending {
            let _ = handle.join();
        }
    }

    /// Background appends not yet joined by `flush` or pruned as finished.
    #[must_use]
    pub fn pending_writes(&self) -> usize {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// # Errors
    /// See [`Logger::log`].
    pub fn info(&self, message: impl Into<Message>) -> Result<(), crate::Error> {
        self.log(Level::Info, message, &[])
    }

    /// # Errors
    /// See [`Logger::log`].
    pub fn warn(&self, message: impl Into<Message>) -> Result<(), crate::Error> {
        self.log(Level::Warn, message, &[])
    }

    /// # Errors
    /// See [`Logger::log`].
    pub fn error(&self, message: impl Into<Message>) -> Result<(), crate::Error> {
        self.log(Level::Error, message, &[])
    }

    /// Info with extra values printed after the line on the console.
    ///
    /// # Errors
    /// See [`Logger::log`].
    pub fn info_with(
        &self,
        message: impl Into<Message>,
        args: &[Message],
    ) -> Result<(), crate::Error> {
        self.log(Level::Info, message, args)
    }

    /// # Errors
    /// See [`Logger::log`].
    pub fn warn_with(
        &self,
        message: impl Into<Message>,
        args: &[Message],
    ) -> Result<(), crate::Error> {
        self.log(Level::Warn, message, args)
    }

    /// # Errors
    /// See [`Logger::log`].
    pub fn error_with(
        &self,
        message: impl Into<Message>,
        args: &[Message],
    ) -> Result<(), crate::Error> {
        self.log(Level::Error, message, args)
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.flush();
    }
}
