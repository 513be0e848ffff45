// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{CSI, SGR};
use std::fmt::{Display, Formatter, Result};

/// The subset of SGR codes that a prompt uses. The legacy variants carry the raw
/// parameter (30-37, 90-97 for foreground, 40-47, 100-107 for background).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SgrCode {
    Reset,
    Invert,
    InvertOff,
    ResetForeground,
    ResetBackground,
    ForegroundBasic(u8),
    BackgroundBasic(u8),
    ForegroundAnsi256(u8),
    BackgroundAnsi256(u8),
    ForegroundRGB(u8, u8, u8),
    BackgroundRGB(u8, u8, u8),
}

mod sgr_code_impl {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl Display for SgrCode {
        /// SGR: set graphics mode command.
        /// More info:
        /// - <https://notes.burke.libbey.me/ansi-escape-codes/>
        /// - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
        #[rustfmt::skip]
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match *self {
                SgrCode::Reset                    => write!(f, "{CSI}0{SGR}"),
                SgrCode::Invert                   => write!(f, "{CSI}7{SGR}"),
                SgrCode::InvertOff                => write!(f, "{CSI}27{SGR}"),
                SgrCode::ResetForeground          => write!(f, "{CSI}39{SGR}"),
                SgrCode::ResetBackground          => write!(f, "{CSI}49{SGR}"),
                SgrCode::ForegroundBasic(code)    => write!(f, "{CSI}{code}{SGR}"),
                SgrCode::BackgroundBasic(code)    => write!(f, "{CSI}{code}{SGR}"),
                SgrCode::ForegroundAnsi256(index) => write!(f, "{CSI}38;5;{index}{SGR}"),
                SgrCode::BackgroundAnsi256(index) => write!(f, "{CSI}48;5;{index}{SGR}"),
                SgrCode::ForegroundRGB(r, g, b)   => write!(f, "{CSI}38;2;{r};{g};{b}{SGR}"),
                SgrCode::BackgroundRGB(r, g, b)   => write!(f, "{CSI}48;2;{r};{g};{b}{SGR}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SGR_INVERT_OFF, SGR_INVERT_ON, SGR_RESET, SGR_RESET_BG, SGR_RESET_FG};
    use test_case::test_case;

    #[test_case(SgrCode::Reset, SGR_RESET)]
    #[test_case(SgrCode::Invert, SGR_INVERT_ON)]
    #[test_case(SgrCode::InvertOff, SGR_INVERT_OFF)]
    #[test_case(SgrCode::ResetForeground, SGR_RESET_FG)]
    #[test_case(SgrCode::ResetBackground, SGR_RESET_BG)]
    fn resets_match_constants(code: SgrCode, expected: &str) {
        assert_eq!(code.to_string(), expected);
    }

    #[test_case(SgrCode::ForegroundBasic(31), "\x1b[31m")]
    #[test_case(SgrCode::BackgroundBasic(104), "\x1b[104m")]
    #[test_case(SgrCode::ForegroundAnsi256(202), "\x1b[38;5;202m")]
    #[test_case(SgrCode::BackgroundAnsi256(16), "\x1b[48;5;16m")]
    #[test_case(SgrCode::ForegroundRGB(1, 2, 3), "\x1b[38;2;1;2;3m")]
    #[test_case(SgrCode::BackgroundRGB(255, 128, 0), "\x1b[48;2;255;128;0m")]
    fn colors(code: SgrCode, expected: &str) {
        assert_eq!(code.to_string(), expected);
    }
}
