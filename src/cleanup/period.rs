//! Month buckets that partition the log directory (`MMYYYY`).

use chrono::Datelike;
use std::fmt;

/// One calendar month. Field order makes the derived `Ord` chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    /// `None` for a month outside 1..=12.
    #[must_use]
    pub const fn new(year: i32, month: u32) -> Option<Self> {
        if month >= 1 && month <= 12 {
            Some(Self { year, month })
        } else {
            None
        }
    }

    #[must_use]
    pub fn of(date: impl Datelike) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    #[must_use]
    pub const fn month(self) -> u32 {
        self.month
    }

    /// Zero-padded month followed by the year: `102026`.
    #[must_use]
    pub fn code(self) -> String {
        format!("{:02}{}", self.month, self.year)
    }

    /// Reads a directory name back into a period. Names that are not all digits,
    /// or whose first two digits are not a month, are not periods.
    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        if code.len() < 3 || !code.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let month = code[..2].parse().ok()?;
        let year = code[2..].parse().ok()?;
        Self::new(year, month)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}
