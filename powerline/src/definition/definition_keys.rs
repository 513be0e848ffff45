// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The finite key sets of a prompt definition. Keys are compared case insensitively
//! once `_` and `-` are removed, so `foreground_color`, `ForegroundColor` and
//! `foreground-color` are the same key.

use crate::DefinitionError;
use std::str::FromStr;

/// Keys of a segment object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum_macros::EnumString)]
#[strum(ascii_case_insensitive)]
pub enum SegmentKey {
    #[strum(serialize = "foregroundcolor", serialize = "fg")]
    Foreground,
    #[strum(serialize = "backgroundcolor", serialize = "bg")]
    Background,
    #[strum(
        serialize = "elevatedforegroundcolor",
        serialize = "adminforegroundcolor",
        serialize = "afg"
    )]
    ElevatedForeground,
    #[strum(
        serialize = "elevatedbackgroundcolor",
        serialize = "adminbackgroundcolor",
        serialize = "abg"
    )]
    ElevatedBackground,
    #[strum(serialize = "errorforegroundcolor", serialize = "efg")]
    ErrorForeground,
    #[strum(serialize = "errorbackgroundcolor", serialize = "ebg")]
    ErrorBackground,
    #[strum(serialize = "content", serialize = "text", serialize = "object")]
    Content,
    #[strum(serialize = "cap")]
    Cap,
    #[strum(serialize = "separator")]
    Separator,
    #[strum(serialize = "clearafter", serialize = "clear")]
    ClearAfter,
    #[strum(serialize = "persistentcolor", serialize = "persist")]
    PersistentColor,
    #[strum(serialize = "decodeentities", serialize = "entities")]
    DecodeEntities,
}

pub const SEGMENT_KEYS: &str = "foreground_color (fg), background_color (bg), \
     elevated_foreground_color (afg), elevated_background_color (abg), \
     error_foreground_color (efg), error_background_color (ebg), \
     content (text, object), cap, separator, clear_after (clear), \
     persistent_color (persist), decode_entities (entities)";

/// Keys of a prompt object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum_macros::EnumString)]
#[strum(ascii_case_insensitive)]
pub enum PromptKey {
    #[strum(serialize = "prefixlines")]
    PrefixLines,
    #[strum(serialize = "lines")]
    Lines,
    #[strum(serialize = "glyphs")]
    Glyphs,
}

pub const PROMPT_KEYS: &str = "prefix_lines, lines, glyphs";

/// Keys of a glyphs object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum_macros::EnumString)]
#[strum(ascii_case_insensitive)]
pub enum GlyphsKey {
    #[strum(serialize = "separator")]
    Separator,
    #[strum(serialize = "colorseparator")]
    ColorSeparator,
}

pub const GLYPHS_KEYS: &str = "separator, color_separator";

/// Remove `_` and `-`, then look the key up. `allowed` is reported on failure.
///
/// # Errors
///
/// [`DefinitionError::UnknownKey`] when no key matches.
pub fn try_parse_key<K: FromStr>(key: &str, allowed: &str) -> Result<K, DefinitionError> {
    let normalized: String = key.chars().filter(|it| !matches!(it, '_' | '-')).collect();
    K::from_str(&normalized).map_err(|_| DefinitionError::UnknownKey {
        key: key.to_string(),
        allowed: allowed.to_string(),
    })
}
