//! Console rendering: label, optional timestamp, color wrapping, then extra args.

use crate::config::{Config, CustomColors, TimestampMode};
use crate::fmt::{ColorName, IconSet, colorize, timestamp};
use crate::level::Level;

use super::{Console, LogRecord, Stream};

/// Per-level console behaviour, indexed by `Level::index`.
struct LevelStyle {
    color: ColorName,
    stream: Stream,
}

const LEVEL_STYLES: [LevelStyle; 3] = [
    LevelStyle {
        color: ColorName::White,
        stream: Stream::Stdout,
    },
    LevelStyle {
        color: ColorName::Yellow,
        stream: Stream::Stdout,
    },
    LevelStyle {
        color: ColorName::Red,
        stream: Stream::Stderr,
    },
];

/// Console settings captured from a `Config` snapshot at call time.
#[derive(Debug, Clone, Default)]
pub struct TerminalOutput {
    colors_enabled: bool,
    icons_enabled: bool,
    timestamps: bool,
    custom_colors: CustomColors,
}

impl TerminalOutput {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            colors_enabled: config.use_colors,
            icons_enabled: config.icons,
            timestamps: config.timestamps == TimestampMode::All,
            custom_colors: config.custom_colors.clone().unwrap_or_default(),
        }
    }

    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    #[must_use]
    pub const fn icons(mut self, enabled: bool) -> Self {
        self.icons_enabled = enabled;
        self
    }

    #[must_use]
    pub const fn timestamps(mut self, enabled: bool) -> Self {
        self.timestamps = enabled;
        self
    }

    #[must_use]
    pub fn custom_colors(mut self, colors: CustomColors) -> Self {
        self.custom_colors = colors;
        self
    }

    /// Custom override when it names a known color, the level default otherwise.
    #[must_use]
    pub fn color(&self, level: Level) -> ColorName {
        self.custom_colors
            .get(level)
            .unwrap_or(LEVEL_STYLES[level.index()].color)
    }

    #[must_use]
    pub const fn stream(level: Level) -> Stream {
        LEVEL_STYLES[level.index()].stream
    }

    /// The printed line without extra args: colored as a whole when colors are on.
    #[must_use]
    pub fn format_line(&self, record: &LogRecord) -> String {
        let label = IconSet.label(record.level, self.icons_enabled);
        let mut line = record.base_line(&label);
        if self.timestamps {
            line = timestamp::stamp(record.time, &line);
        }

        if self.colors_enabled {
            colorize(&line, self.color(record.level).ansi_code())
        } else {
            line
        }
    }

    /// Prints the line followed by the extra args, space separated and uncolored.
    /// Console failures are not reported; a closed stdout must not break logging.
    pub fn write(&self, record: &LogRecord, console: &dyn Console) {
        let mut line = self.format_line(record);
        for arg in &record.args {
            line.push(' ');
            line.push_str(arg);
        }
        let _ = console.print(Self::stream(record.level), &line);
    }
}
