//! Console and file backends. The console side sits behind the `Console` trait so
//! embedders and tests can capture lines instead of printing them.

mod file;
mod terminal;

pub use file::{FileOutput, FileTarget};
pub use terminal::TerminalOutput;

use crate::level::Level;
use chrono::{DateTime, Utc};
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// Everything a backend needs to render one call.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: Level,
    /// Already-rendered message text.
    pub message: String,
    /// Rendered additional arguments, console only.
    pub args: Vec<String>,
    /// Instant of the log call; both backends stamp with the same value.
    pub time: DateTime<Utc>,
}

impl LogRecord {
    /// `[<label>] <message>`, the line both backends start from.
    #[must_use]
    pub fn base_line(&self, label: &str) -> String {
        format!("[{label}] {}", self.message)
    }
}

/// Console channel a level is printed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// `Send + Sync` so one logger can be shared across threads.
pub trait Console: Send + Sync {
    /// Prints one complete line on the given stream.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn print(&self, stream: Stream, line: &str) -> io::Result<()>;
}

/// The process's real stdout and stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn print(&self, stream: Stream, line: &str) -> io::Result<()> {
        match stream {
            Stream::Stdout => writeln!(io::stdout().lock(), "{line}"),
            Stream::Stderr => writeln!(io::stderr().lock(), "{line}"),
        }
    }
}

/// Collects printed lines in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct BufferConsole {
    lines: Arc<Mutex<Vec<(Stream, String)>>>,
}

impl BufferConsole {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything printed so far, in order.
    #[must_use]
    pub fn lines(&self) -> Vec<(Stream, String)> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }

    pub fn clear(&self) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Console for BufferConsole {
    fn print(&self, stream: Stream, line: &str) -> io::Result<()> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((stream, line.to_string()));
        Ok(())
    }
}
