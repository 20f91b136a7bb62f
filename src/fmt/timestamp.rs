//! ISO-8601 timestamps for console and file lines.

use chrono::{DateTime, SecondsFormat, Utc};

/// `2026-10-18T09:30:00.123Z`: UTC, millisecond precision, `Z` suffix.
#[must_use]
pub fn iso8601(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Prepends `[<timestamp>] ` to a line.
#[must_use]
pub fn stamp(at: DateTime<Utc>, line: &str) -> String {
    format!("[{}] {line}", iso8601(at))
}
