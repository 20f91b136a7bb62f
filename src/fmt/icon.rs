//! Decorative glyphs that prefix the level label when icons are enabled.

use crate::level::Level;

/// Glyphs indexed by `Level::index`.
const GLYPHS: [&str; 3] = ["\u{2714}", "\u{26a0}", "\u{2716}"];

/// Fixed glyph per level: check mark, warning sign, cross mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IconSet;

impl IconSet {
    #[must_use]
    pub const fn get(self, level: Level) -> &'static str {
        GLYPHS[level.index()]
    }

    /// `"✔ INFO"` with icons, `"INFO"` without.
    #[must_use]
    pub fn label(self, level: Level, enabled: bool) -> String {
        if enabled {
            format!("{} {}", self.get(level), level.label())
        } else {
            level.label().to_string()
        }
    }
}
