// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module contains a parser that parses a hex color string into a [`RgbValue`]
//! struct. The hex color string can be `#RRGGBB`, eg: `#FF0000` for red, or the short
//! form `#RGB`, eg: `#F00`.

use super::RgbValue;
use nom::{IResult, Parser,
          branch::alt,
          bytes::complete::{tag, take_while_m_n},
          combinator::map_res};

/// Parse function that generates an [`RgbValue`] struct from a valid hex color string.
/// Whatever follows the color is returned as the remainder.
///
/// # Errors
///
/// Returns a [`nom::Err`] if the input does not start with a hex color.
pub fn parse_hex_color(input: &str) -> IResult<&str, RgbValue> {
    let (input, _) = tag("#").parse(input)?;
    alt((parse_long_form, parse_short_form)).parse(input)
}

fn parse_long_form(input: &str) -> IResult<&str, RgbValue> {
    let (input, (red, green, blue)) =
        (helper_fns::parse_hex_seg, helper_fns::parse_hex_seg, helper_fns::parse_hex_seg)
            .parse(input)?;
    Ok((input, RgbValue { red, green, blue }))
}

fn parse_short_form(input: &str) -> IResult<&str, RgbValue> {
    let (input, (red, green, blue)) = (
        helper_fns::parse_hex_nibble,
        helper_fns::parse_hex_nibble,
        helper_fns::parse_hex_nibble,
    )
        .parse(input)?;
    Ok((input, RgbValue { red, green, blue }))
}

/// Helper functions to match and parse hex digits.
mod helper_fns {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    /// This function is used by [`take_while_m_n`] and as long as it returns `true`
    /// items will be taken from the input.
    pub fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }

    /// Two hex digits, eg: `ff`.
    pub fn parse_hex_seg(input: &str) -> IResult<&str, u8> {
        map_res(take_while_m_n(2, 2, match_is_hex_digit), |it: &str| {
            u8::from_str_radix(it, 16)
        })
        .parse(input)
    }

    /// One hex digit, repeated, eg: `f` is `ff`.
    pub fn parse_hex_nibble(input: &str) -> IResult<&str, u8> {
        map_res(take_while_m_n(1, 1, match_is_hex_digit), |it: &str| {
            u8::from_str_radix(it, 16).map(|nibble| nibble * 0x11)
        })
        .parse(input)
    }
}
