// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{AnsiBasicColor, AnsiValue, RgbValue};
use crate::{DefinitionError, SgrCode};
use std::{fmt::Display, str::FromStr};

/// Which half of a cell a color applies to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ColorChannel {
    Foreground,
    Background,
}

/// A color a [`crate::Segment`] can be painted with.
///
/// | Variant   | SGR form                   | Parsed from          |
/// |-----------|----------------------------|----------------------|
/// | `Basic`   | `31`, `104`, ...           | `"DarkRed"`, `"Blue"`|
/// | `Ansi`    | `38;5;n`, `48;5;n`         | `"ansi:202"`, `202`  |
/// | `Rgb`     | `38;2;r;g;b`, `48;2;r;g;b` | `"#ff8000"`, `"#f80"`|
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TermColor {
    /// Legacy 16 color console palette.
    Basic(AnsiBasicColor),
    /// 256 color palette.
    Ansi(AnsiValue),
    /// Truecolor.
    Rgb(RgbValue),
}

impl TermColor {
    /// Legacy colors are painted foreground first, see [`crate::paint_text`].
    #[must_use]
    pub fn is_legacy(&self) -> bool { matches!(self, TermColor::Basic(_)) }

    #[rustfmt::skip]
    #[must_use]
    pub fn sgr_code(&self, channel: ColorChannel) -> SgrCode {
        match (*self, channel) {
            (TermColor::Basic(it), ColorChannel::Foreground) => SgrCode::ForegroundBasic(it.fg_code()),
            (TermColor::Basic(it), ColorChannel::Background) => SgrCode::BackgroundBasic(it.bg_code()),
            (TermColor::Ansi(it),  ColorChannel::Foreground) => SgrCode::ForegroundAnsi256(it.index),
            (TermColor::Ansi(it),  ColorChannel::Background) => SgrCode::BackgroundAnsi256(it.index),
            (TermColor::Rgb(it),   ColorChannel::Foreground) => SgrCode::ForegroundRGB(it.red, it.green, it.blue),
            (TermColor::Rgb(it),   ColorChannel::Background) => SgrCode::BackgroundRGB(it.red, it.green, it.blue),
        }
    }

    #[must_use]
    pub fn fg_escape(&self) -> String { self.sgr_code(ColorChannel::Foreground).to_string() }

    #[must_use]
    pub fn bg_escape(&self) -> String { self.sgr_code(ColorChannel::Background).to_string() }
}

mod convenience_conversions {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl From<AnsiBasicColor> for TermColor {
        fn from(basic_color: AnsiBasicColor) -> Self { TermColor::Basic(basic_color) }
    }

    impl From<RgbValue> for TermColor {
        fn from(rgb_value: RgbValue) -> Self { TermColor::Rgb(rgb_value) }
    }

    impl From<AnsiValue> for TermColor {
        fn from(ansi_value: AnsiValue) -> Self { TermColor::Ansi(ansi_value) }
    }

    impl Display for TermColor {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                TermColor::Basic(it) => write!(f, "{it}"),
                TermColor::Ansi(it) => write!(f, "ansi:{}", it.index),
                TermColor::Rgb(it) => {
                    write!(f, "#{:02x}{:02x}{:02x}", it.red, it.green, it.blue)
                }
            }
        }
    }
}

mod parse_term_color {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    pub const ANSI_PREFIX: &str = "ansi:";

    impl FromStr for TermColor {
        type Err = DefinitionError;

        /// Accepts `#RRGGBB`, `#RGB`, `ansi:N` and the [`AnsiBasicColor`] names.
        fn from_str(input: &str) -> Result<Self, Self::Err> {
            let input = input.trim();

            if input.starts_with('#') {
                return RgbValue::try_from_hex_color(input).map(TermColor::Rgb);
            }

            if let Some(index) = input.strip_prefix(ANSI_PREFIX) {
                return index
                    .trim()
                    .parse::<u8>()
                    .map(|it| TermColor::Ansi(AnsiValue::new(it)))
                    .map_err(|_| DefinitionError::InvalidColor {
                        value: input.to_string(),
                    });
            }

            AnsiBasicColor::from_str(input).map(TermColor::Basic).map_err(|_| {
                DefinitionError::InvalidColor {
                    value: input.to_string(),
                }
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test_case("Red", TermColor::Basic(AnsiBasicColor::Red))]
    #[test_case("darkblue", TermColor::Basic(AnsiBasicColor::DarkBlue))]
    #[test_case("#102030", TermColor::Rgb(RgbValue::from_u8(16, 32, 48)))]
    #[test_case(" ansi:202 ", TermColor::Ansi(AnsiValue::new(202)))]
    fn parse(input: &str, expected: TermColor) {
        assert_eq2!(input.parse::<TermColor>().unwrap(), expected);
    }

    #[test_case("purple-ish")]
    #[test_case("#12345")]
    #[test_case("ansi:256")]
    #[test_case("")]
    fn parse_invalid(input: &str) {
        let result = input.parse::<TermColor>();
        assert!(matches!(result, Err(DefinitionError::InvalidColor { .. })));
    }

    #[test]
    fn only_basic_is_legacy() {
        assert!(TermColor::Basic(AnsiBasicColor::Red).is_legacy());
        assert!(!TermColor::Ansi(AnsiValue::new(1)).is_legacy());
        assert!(!TermColor::Rgb(RgbValue::from_u8(1, 2, 3)).is_legacy());
    }

    #[test]
    fn escapes_per_channel() {
        let red = TermColor::Basic(AnsiBasicColor::DarkRed);
        assert_eq2!(red.fg_escape(), "\x1b[31m");
        assert_eq2!(red.bg_escape(), "\x1b[41m");

        let orange = TermColor::Rgb(RgbValue::from_u8(255, 128, 0));
        assert_eq2!(orange.fg_escape(), "\x1b[38;2;255;128;0m");
        assert_eq2!(orange.bg_escape(), "\x1b[48;2;255;128;0m");
    }

    #[test]
    fn display_round_trips_through_parse() {
        let color = TermColor::Rgb(RgbValue::from_u8(0, 170, 255));
        assert_eq2!(color.to_string(), "#00aaff");
        assert_eq2!(color.to_string().parse::<TermColor>().unwrap(), color);
    }
}
