// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::Alignment;

/// A pair of boundary glyphs. Used both for caps (between different backgrounds) and
/// separators (between equal backgrounds).
///
/// Text flows away from the anchor, so the glyph that is drawn is the one facing away
/// from it:
///
/// | Alignment | Glyph   |
/// |-----------|---------|
/// | `Left`    | `right` |
/// | `Right`   | `left`  |
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cap {
    pub left: String,
    pub right: String,
}

/// Used when a cap is given as an empty string.
pub const BLANK_GLYPH: &str = " ";

impl Default for Cap {
    fn default() -> Self {
        Self {
            left: BLANK_GLYPH.to_string(),
            right: BLANK_GLYPH.to_string(),
        }
    }
}

impl Cap {
    /// An empty `left` becomes a space. An empty `right` mirrors `left`.
    #[must_use]
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        let left = left.into();
        let right = right.into();
        let left = if left.is_empty() { BLANK_GLYPH.to_string() } else { left };
        let right = if right.is_empty() { left.clone() } else { right };
        Self { left, right }
    }

    /// Build a cap from a single string:
    /// - `""` is a space on both sides,
    /// - one code point is used on both sides,
    /// - otherwise the first code point is `left` and the second is `right`.
    #[must_use]
    pub fn split(glyphs: &str) -> Self {
        let mut chars = glyphs.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Self::default(),
            (Some(only), None) => Self::new(only.to_string(), only.to_string()),
            (Some(left), Some(right)) => Self::new(left.to_string(), right.to_string()),
        }
    }

    #[must_use]
    pub fn glyph(&self, alignment: Alignment) -> &str {
        match alignment {
            Alignment::Left => &self.right,
            Alignment::Right => &self.left,
        }
    }
}

impl From<&str> for Cap {
    fn from(glyphs: &str) -> Self { Self::split(glyphs) }
}

impl From<(&str, &str)> for Cap {
    fn from((left, right): (&str, &str)) -> Self { Self::new(left, right) }
}
