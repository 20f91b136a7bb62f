//! Stepwise construction for the cases `Logger::new`/`with_config` don't cover,
//! mainly swapping the console sink.

use super::Logger;
use crate::config::{Config, PartialConfig};
use crate::level::Level;
use crate::output::{Console, StdConsole};
use std::sync::{Mutex, RwLock};

pub struct LoggerBuilder {
    threshold: Level,
    config: Config,
    console: Box<dyn Console>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            threshold: Level::Info,
            config: Config::default(),
            console: Box::new(StdConsole),
        }
    }

    #[must_use]
    pub const fn level(mut self, threshold: Level) -> Self {
        self.threshold = threshold;
        self
    }

    /// Merged over whatever the builder holds; repeated calls accumulate.
    #[must_use]
    pub fn config(mut self, partial: PartialConfig) -> Self {
        self.config.merge(partial);
        self
    }

    #[must_use]
    pub fn console(mut self, console: impl Console + 'static) -> Self {
        self.console = Box::new(console);
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        Logger {
            threshold: self.threshold,
            config: RwLock::new(self.config),
            console: self.console,
            pending: Mutex::new(Vec::new()),
        }
    }
}
