#![forbid(unsafe_code)]

//! `daylog` - a small leveled logger.
//!
//! Messages go to stdout/stderr, optionally colored and prefixed with a glyph, and can
//! also be persisted to one file per day under one directory per month
//! (`<base>/<MMYYYY>/<DD>.txt`). When a new month directory is created, the oldest month
//! directories beyond the retention count are removed.
//!
//! # Example
//!
//! ```no_run
//! use daylog::{Level, Logger, PartialConfig, TimestampMode};
//!
//! let logger = Logger::with_level(Level::Warn);
//! logger.configure(
//!     PartialConfig::new()
//!         .log_file_path("./logs")
//!         .timestamps(TimestampMode::All),
//! );
//!
//! logger.info("filtered out")?;
//! logger.warn("disk almost full")?;
//! logger.error(daylog::Message::structured(&["a", "b"])?)?;
//! logger.flush();
//! # Ok::<(), daylog::Error>(())
//! ```

pub mod cleanup;
pub mod config;
mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod logger;
pub mod output;

pub use cleanup::{CleanupResult, Period, prune_periods};
pub use config::{Config, CustomColors, LogFilePath, PartialConfig, TimestampMode, WriteMode};
pub use error::Error;
pub use fmt::{ColorName, IconSet, Message};
pub use level::Level;
pub use logger::{Logger, LoggerBuilder, shared};
pub use output::{BufferConsole, Console, FileOutput, StdConsole, Stream, TerminalOutput};
