//! The nine terminal colors a caller can name, mapped to their SGR codes.

use std::fmt;
use std::str::FromStr;

/// A closed set keeps typos out of escape sequences; unknown names never reach the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorName {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
}

impl ColorName {
    /// Every recognized name, in SGR order.
    pub const ALL: [Self; 9] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
        Self::Gray,
    ];

    /// The numeric part of the `\x1b[<code>m` foreground escape.
    #[must_use]
    pub const fn ansi_code(self) -> &'static str {
        match self {
            Self::Black => "30",
            Self::Red => "31",
            Self::Green => "32",
            Self::Yellow => "33",
            Self::Blue => "34",
            Self::Magenta => "35",
            Self::Cyan => "36",
            Self::White => "37",
            Self::Gray => "90",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
            Self::Gray => "gray",
        }
    }

    /// Lenient lookup for config values: anything unrecognized is `None`, never an error.
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` for names outside the nine recognized colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError(String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown color name: '{}'", self.0)
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for ColorName {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| ParseColorError(s.to_string()))
    }
}

/// Terminates any active SGR styling.
pub const RESET: &str = "\x1b[0m";

/// Wraps the whole text in a foreground escape and a reset.
#[must_use]
pub fn colorize(text: &str, code: &str) -> String {
    format!("\x1b[{code}m{text}{RESET}")
}
