// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Build a [`Prompt`] (or any part of one) from a loosely typed JSON value.
//!
//! ```json
//! {
//!   "prefix_lines": 0,
//!   "glyphs": { "separator": "◄►", "color_separator": "▐▌" },
//!   "lines": [
//!     [
//!       [ { "fg": "White", "bg": "DarkBlue", "content": "~/src" },
//!         { "bg": "#3a3a3a", "efg": "Red", "text": "&Power;" } ],
//!       null
//!     ]
//!   ]
//! }
//! ```
//!
//! | JSON                        | Built                                        |
//! |-----------------------------|----------------------------------------------|
//! | prompt: object or `[line]`  | [`Prompt`]                                   |
//! | line: `[column or null]`    | [`Line`], `null` is an empty column slot     |
//! | column: `[segment]`         | [`Column`]                                   |
//! | segment: object or string   | [`Segment`], see [`SegmentKey`]              |
//! | content: string, array, ... | [`Content`], objects become nested segments  |

use crate::{Cap, Column, CommonResult, Content, DefinitionError, GLYPHS_KEYS, GlyphsKey,
            Line, PROMPT_KEYS, Prompt, PromptGlyphs, PromptKey, SEGMENT_KEYS, Segment,
            SegmentKey, TermColor, try_parse_key};
use miette::IntoDiagnostic;
use serde_json::Value;
use std::str::FromStr;

/// Parse JSON text and build a [`Prompt`] from it.
///
/// # Errors
///
/// Malformed JSON, or any [`DefinitionError`].
pub fn try_parse_prompt_str(input: &str) -> CommonResult<Prompt> {
    let value: Value = serde_json::from_str(input).into_diagnostic()?;
    try_parse_prompt(&value)
}

/// A prompt is either an array of lines, or an object with the keys in [`PromptKey`].
///
/// # Errors
///
/// Any [`DefinitionError`].
pub fn try_parse_prompt(value: &Value) -> CommonResult<Prompt> {
    let prompt = match value {
        Value::Array(_) => Prompt::new(try_parse_lines(value)?),
        Value::Object(map) => {
            let mut prompt = Prompt::default();
            let mut glyphs = None;
            for (key, it) in map {
                match try_parse_key::<PromptKey>(key, PROMPT_KEYS)? {
                    PromptKey::PrefixLines => {
                        prompt.prefix_lines = it
                            .as_i64()
                            .and_then(|it| i32::try_from(it).ok())
                            .ok_or_else(|| DefinitionError::invalid_value(key, "an integer"))?;
                    }
                    PromptKey::Lines => prompt.lines = try_parse_lines(it)?,
                    PromptKey::Glyphs => glyphs = Some(try_parse_glyphs(it)?),
                }
            }
            match glyphs {
                Some(glyphs) => prompt.with_glyphs(&glyphs),
                None => prompt,
            }
        }
        _ => Err(DefinitionError::invalid_value(
            "prompt",
            "an object or an array of lines",
        ))?,
    };

    tracing::debug!(
        message = "Prompt definition loaded",
        lines = prompt.lines.len(),
        prefix_lines = prompt.prefix_lines
    );

    Ok(prompt)
}

fn try_parse_lines(value: &Value) -> CommonResult<Vec<Line>> {
    let Value::Array(items) = value else {
        return Err(DefinitionError::invalid_value("lines", "an array of lines").into());
    };
    items.iter().map(try_parse_line).collect()
}

/// A line is an array of columns. `null` keeps a column slot empty, so
/// `[null, [...]]` is a line with only a right column.
///
/// # Errors
///
/// Any [`DefinitionError`].
pub fn try_parse_line(value: &Value) -> CommonResult<Line> {
    let Value::Array(items) = value else {
        return Err(DefinitionError::invalid_value("line", "an array of columns").into());
    };
    let columns = items
        .iter()
        .map(|it| match it {
            Value::Null => Ok(None),
            other => try_parse_column(other).map(Some),
        })
        .collect::<CommonResult<Vec<_>>>()?;
    Ok(Line::new(columns))
}

/// # Errors
///
/// Any [`DefinitionError`].
pub fn try_parse_column(value: &Value) -> CommonResult<Column> {
    let Value::Array(items) = value else {
        return Err(DefinitionError::invalid_value("column", "an array of segments").into());
    };
    let segments = items
        .iter()
        .map(try_parse_segment)
        .collect::<CommonResult<Vec<_>>>()?;
    Ok(Column::from(segments))
}

/// A bare string is a segment with that content. An object is matched against
/// [`SegmentKey`], unknown keys fail the whole segment.
///
/// # Errors
///
/// Any [`DefinitionError`].
pub fn try_parse_segment(value: &Value) -> CommonResult<Segment> {
    let map = match value {
        Value::String(text) => return Ok(Segment::new(text.as_str())),
        Value::Object(map) => map,
        _ => Err(DefinitionError::invalid_value("segment", "an object or a string"))?,
    };

    let mut segment = Segment::default();
    for (key, it) in map {
        let segment_key = try_parse_key::<SegmentKey>(key, SEGMENT_KEYS)?;
        apply_segment_key(&mut segment, segment_key, key, it)?;
    }
    Ok(segment)
}

#[rustfmt::skip]
fn apply_segment_key(
    segment: &mut Segment,
    segment_key: SegmentKey,
    key: &str,
    it: &Value,
) -> CommonResult<()> {
    match segment_key {
        SegmentKey::Foreground         => segment.colors.foreground = try_parse_color(it)?,
        SegmentKey::Background         => segment.colors.background = try_parse_color(it)?,
        SegmentKey::ElevatedForeground => segment.colors.elevated_foreground = try_parse_color(it)?,
        SegmentKey::ElevatedBackground => segment.colors.elevated_background = try_parse_color(it)?,
        SegmentKey::ErrorForeground    => segment.colors.error_foreground = try_parse_color(it)?,
        SegmentKey::ErrorBackground    => segment.colors.error_background = try_parse_color(it)?,
        SegmentKey::Content            => segment.content = try_parse_content(it)?,
        SegmentKey::Cap                => segment.cap = Some(try_parse_cap(key, it)?),
        SegmentKey::Separator          => segment.separator = try_parse_cap(key, it)?,
        SegmentKey::ClearAfter         => segment.clear_after = try_parse_bool(key, it)?,
        SegmentKey::PersistentColor    => segment.persistent_color = try_parse_bool(key, it)?,
        SegmentKey::DecodeEntities     => segment.decode_entities = try_parse_bool(key, it)?,
    }
    Ok(())
}

/// - string: text, or a control token (`"\t"`, `"\n"`, `" "`),
/// - array: a list,
/// - object: a nested segment,
/// - number or bool: its display text,
/// - `null`: empty.
///
/// # Errors
///
/// Any [`DefinitionError`] from a nested segment.
pub fn try_parse_content(value: &Value) -> CommonResult<Content> {
    Ok(match value {
        Value::Null => Content::Empty,
        Value::String(text) => Content::from(text.as_str()),
        Value::Array(items) => Content::List(
            items
                .iter()
                .map(try_parse_content)
                .collect::<CommonResult<Vec<_>>>()?,
        ),
        Value::Object(_) => Content::from(try_parse_segment(value)?),
        Value::Bool(_) | Value::Number(_) => Content::display(value),
    })
}

/// A color string (see [`TermColor::from_str`]), an ANSI 256 index, or `null` for no
/// color.
///
/// # Errors
///
/// [`DefinitionError::InvalidColor`].
pub fn try_parse_color(value: &Value) -> Result<Option<TermColor>, DefinitionError> {
    match value {
        Value::Null => Ok(None),
        Value::String(text) => TermColor::from_str(text).map(Some),
        Value::Number(number) => number
            .as_u64()
            .and_then(|it| u8::try_from(it).ok())
            .map(|it| Some(TermColor::Ansi(it.into())))
            .ok_or_else(|| DefinitionError::InvalidColor {
                value: number.to_string(),
            }),
        other => Err(DefinitionError::InvalidColor {
            value: other.to_string(),
        }),
    }
}

/// A string split into a pair (see [`Cap::split`]), or an array of two strings.
///
/// # Errors
///
/// [`DefinitionError::InvalidGlyph`] for arrays of the wrong shape,
/// [`DefinitionError::InvalidValue`] for other JSON types.
pub fn try_parse_cap(key: &str, value: &Value) -> Result<Cap, DefinitionError> {
    match value {
        Value::String(glyphs) => Ok(Cap::split(glyphs)),
        Value::Array(items) => match items.as_slice() {
            [Value::String(left), Value::String(right)] => Ok(Cap::new(left, right)),
            _ => Err(DefinitionError::InvalidGlyph {
                value: value.to_string(),
            }),
        },
        _ => Err(DefinitionError::invalid_value(
            key,
            "a string or an array of two strings",
        )),
    }
}

/// `"default"`, `"powerline"`, or an object with the keys in [`GlyphsKey`]. Missing
/// keys keep their default glyphs.
///
/// # Errors
///
/// Any [`DefinitionError`].
pub fn try_parse_glyphs(value: &Value) -> CommonResult<PromptGlyphs> {
    match value {
        Value::String(preset) if preset.eq_ignore_ascii_case("default") => {
            Ok(PromptGlyphs::default())
        }
        Value::String(preset) if preset.eq_ignore_ascii_case("powerline") => {
            Ok(PromptGlyphs::powerline())
        }
        Value::Object(map) => {
            let mut glyphs = PromptGlyphs::default();
            for (key, it) in map {
                match try_parse_key::<GlyphsKey>(key, GLYPHS_KEYS)? {
                    GlyphsKey::Separator => glyphs.separator = try_parse_cap(key, it)?,
                    GlyphsKey::ColorSeparator => {
                        glyphs.color_separator = try_parse_cap(key, it)?;
                    }
                }
            }
            Ok(glyphs)
        }
        _ => Err(DefinitionError::invalid_value(
            "glyphs",
            "\"default\", \"powerline\" or an object",
        )
        .into()),
    }
}

/// `true`/`false`, or `1`/`0`.
fn try_parse_bool(key: &str, value: &Value) -> Result<bool, DefinitionError> {
    match value {
        Value::Bool(it) => Ok(*it),
        Value::Number(number) if number.as_u64() == Some(0) => Ok(false),
        Value::Number(number) if number.as_u64() == Some(1) => Ok(true),
        _ => Err(DefinitionError::invalid_value(key, "a boolean")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AnsiBasicColor, AnsiValue, ControlToken, POWERLINE_CAP, RenderContext,
                RgbValue, assert_eq2};
    use serde_json::json;
    use test_case::test_case;

    fn definition_error(report: &miette::Report) -> Option<&DefinitionError> {
        report.downcast_ref::<DefinitionError>()
    }

    #[test]
    fn segment_from_object() {
        let segment = try_parse_segment(&json!({
            "fg": "White",
            "Background_Color": "#102030",
            "admin-foreground-color": 202,
            "efg": "ansi:9",
            "text": "hi",
            "cap": "<>",
            "separator": ["(", ")"],
            "clear": 1,
            "persist": true,
            "entities": false,
        }))
        .unwrap();

        assert_eq2!(
            segment.colors.foreground,
            Some(TermColor::Basic(AnsiBasicColor::White))
        );
        assert_eq2!(
            segment.colors.background,
            Some(TermColor::Rgb(RgbValue::from_u8(0x10, 0x20, 0x30)))
        );
        assert_eq2!(
            segment.colors.elevated_foreground,
            Some(TermColor::Ansi(AnsiValue::new(202)))
        );
        assert_eq2!(
            segment.colors.error_foreground,
            Some(TermColor::Ansi(AnsiValue::new(9)))
        );
        assert_eq2!(segment.colors.error_background, None);
        assert_eq2!(segment.cap, Some(Cap::new("<", ">")));
        assert_eq2!(segment.separator, Cap::new("(", ")"));
        assert!(segment.clear_after);
        assert!(segment.persistent_color);
        assert!(!segment.decode_entities);
        assert!(matches!(segment.content, Content::Text(ref it) if it == "hi"));
    }

    #[test]
    fn segment_from_string() {
        let segment = try_parse_segment(&json!("\t")).unwrap();
        assert!(matches!(
            segment.content,
            Content::Token(ControlToken::RightAlign)
        ));
    }

    #[test]
    fn unknown_key_fails_whole_segment() {
        let report = try_parse_segment(&json!({"fg": "Red", "colour": "Blue"})).unwrap_err();
        assert!(matches!(
            definition_error(&report),
            Some(DefinitionError::UnknownKey { key, .. }) if key == "colour"
        ));
    }

    #[test_case(json!("#12"))]
    #[test_case(json!("Purple"))]
    #[test_case(json!("ansi:300"))]
    #[test_case(json!(256))]
    #[test_case(json!(-1))]
    #[test_case(json!(true))]
    fn invalid_color(value: Value) {
        let report = try_parse_segment(&json!({ "bg": value })).unwrap_err();
        assert!(matches!(
            definition_error(&report),
            Some(DefinitionError::InvalidColor { .. })
        ));
    }

    #[test]
    fn invalid_values() {
        let report = try_parse_segment(&json!({"clear": "yes"})).unwrap_err();
        assert!(matches!(
            definition_error(&report),
            Some(DefinitionError::InvalidValue { .. })
        ));

        let report = try_parse_segment(&json!({"cap": ["a", "b", "c"]})).unwrap_err();
        assert!(matches!(
            definition_error(&report),
            Some(DefinitionError::InvalidGlyph { .. })
        ));

        let report = try_parse_column(&json!({"fg": "Red"})).unwrap_err();
        assert!(matches!(
            definition_error(&report),
            Some(DefinitionError::InvalidValue { .. })
        ));
    }

    #[test]
    fn content_variants() {
        let mut ctx = RenderContext::new_with(false, true);
        let mut segment = try_parse_segment(&json!({
            "content": ["a", null, 42, { "fg": "Red", "text": "b" }]
        }))
        .unwrap();
        assert_eq2!(
            segment.render(&mut ctx, None, None).unwrap(),
            Some("a 42 \x1b[91mb\x1b[0m\x1b[0m".to_string())
        );
    }

    #[test]
    fn line_with_empty_slot() {
        let line = try_parse_line(&json!([null, ["x"], ["y", "z"]])).unwrap();
        assert_eq2!(line.columns.len(), 3);
        assert!(line.columns[0].is_none());
        assert_eq2!(line.columns[2].as_ref().map(|it| it.sources.len()), Some(2));
    }

    #[test]
    fn prompt_object() {
        let prompt = try_parse_prompt(&json!({
            "prefix_lines": -1,
            "glyphs": "powerline",
            "lines": [[["a"]], [["b"]]],
        }))
        .unwrap();
        assert_eq2!(prompt.prefix_lines, -1);
        assert_eq2!(prompt.lines.len(), 2);
        assert_eq2!(prompt.lines[1].glyphs.color_separator.right, POWERLINE_CAP);
    }

    #[test]
    fn prompt_array_and_glyph_object() {
        let prompt = try_parse_prompt(&json!([[["a"]]])).unwrap();
        assert_eq2!(prompt.prefix_lines, 0);
        assert_eq2!(prompt.lines[0].glyphs, PromptGlyphs::default());

        let glyphs = try_parse_glyphs(&json!({"color_separator": "[]"})).unwrap();
        assert_eq2!(glyphs.color_separator, Cap::new("[", "]"));
        assert_eq2!(glyphs.separator, PromptGlyphs::default().separator);
    }

    #[test]
    fn prompt_errors() {
        assert!(try_parse_prompt_str("{ not json").is_err());

        let report = try_parse_prompt(&json!({"prefix": 1})).unwrap_err();
        assert!(matches!(
            definition_error(&report),
            Some(DefinitionError::UnknownKey { .. })
        ));

        let report = try_parse_prompt(&json!({"prefix_lines": "two"})).unwrap_err();
        assert!(matches!(
            definition_error(&report),
            Some(DefinitionError::InvalidValue { .. })
        ));
    }
}
