//! Line rendering pieces: colors, icons, message payloads, and timestamps.

mod color;
mod icon;
mod message;
pub mod timestamp;

pub use color::{ColorName, ParseColorError, RESET, colorize};
pub use icon::IconSet;
pub use message::Message;
