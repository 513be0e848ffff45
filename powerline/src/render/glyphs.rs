// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! You can get the unicode symbols for the drawings here:
//! - <https://symbl.cc/en/unicode/blocks/block-elements/>
//! - <https://symbl.cc/en/unicode/blocks/geometric-shapes/>
//! - <https://github.com/ryanoasis/powerline-extra-symbols>

use crate::{Alignment, Cap};

pub const COLOR_SEPARATOR: &str = "\u{258C}";
pub const REVERSE_COLOR_SEPARATOR: &str = "\u{2590}";
pub const SEPARATOR: &str = "\u{25BA}";
pub const REVERSE_SEPARATOR: &str = "\u{25C4}";

// These need a patched (powerline / nerd) font.
pub const POWERLINE_CAP: &str = "\u{E0B0}";
pub const POWERLINE_REVERSE_CAP: &str = "\u{E0B2}";
pub const POWERLINE_SEPARATOR: &str = "\u{E0B1}";
pub const POWERLINE_REVERSE_SEPARATOR: &str = "\u{E0B3}";
pub const BRANCH: &str = "\u{E0A0}";
pub const LOCK: &str = "\u{E0A2}";

pub const GEAR: &str = "\u{26EF}";
pub const POWER: &str = "\u{26A1}";

/// The glyphs a [`crate::Line`] draws between segments and at column edges.
/// - `separator`: between two segments with the same background.
/// - `color_separator`: between two different backgrounds, and at column edges.
///
/// Left anchored columns use [`Cap::glyph`] with [`Alignment::Left`], right anchored
/// columns use [`Alignment::Right`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptGlyphs {
    pub separator: Cap,
    pub color_separator: Cap,
}

impl Default for PromptGlyphs {
    fn default() -> Self {
        Self {
            separator: Cap::new(REVERSE_SEPARATOR, SEPARATOR),
            color_separator: Cap::new(REVERSE_COLOR_SEPARATOR, COLOR_SEPARATOR),
        }
    }
}

impl PromptGlyphs {
    #[must_use]
    pub fn powerline() -> Self {
        Self {
            separator: Cap::new(POWERLINE_REVERSE_SEPARATOR, POWERLINE_SEPARATOR),
            color_separator: Cap::new(POWERLINE_REVERSE_CAP, POWERLINE_CAP),
        }
    }

    /// `(separator, color_separator)` for one side of a line.
    #[must_use]
    pub fn for_alignment(&self, alignment: Alignment) -> (&str, &str) {
        (
            self.separator.glyph(alignment),
            self.color_separator.glyph(alignment),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn default_glyphs_per_side() {
        let glyphs = PromptGlyphs::default();
        assert_eq2!(glyphs.for_alignment(Alignment::Left), (SEPARATOR, COLOR_SEPARATOR));
        assert_eq2!(
            glyphs.for_alignment(Alignment::Right),
            (REVERSE_SEPARATOR, REVERSE_COLOR_SEPARATOR)
        );
    }

    #[test]
    fn powerline_glyphs_per_side() {
        let glyphs = PromptGlyphs::powerline();
        assert_eq2!(
            glyphs.for_alignment(Alignment::Left),
            (POWERLINE_SEPARATOR, POWERLINE_CAP)
        );
        assert_eq2!(
            glyphs.for_alignment(Alignment::Right),
            (POWERLINE_REVERSE_SEPARATOR, POWERLINE_REVERSE_CAP)
        );
    }
}
