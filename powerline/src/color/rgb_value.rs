// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::parse_hex_color;
use crate::DefinitionError;
use nom::{Parser, combinator::all_consuming};

/// Represents a color in RGB (24-bit truecolor) format.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct RgbValue {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl From<(u8, u8, u8)> for RgbValue {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

impl RgbValue {
    #[must_use]
    pub fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    /// Parse `#RRGGBB` or `#RGB`. Trailing input is an error.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError::InvalidColor`] if the input is not a hex color.
    pub fn try_from_hex_color(input: &str) -> Result<RgbValue, DefinitionError> {
        match all_consuming(parse_hex_color).parse(input) {
            Ok((_, color)) => Ok(color),
            Err(_) => Err(DefinitionError::InvalidColor {
                value: input.to_string(),
            }),
        }
    }
}
