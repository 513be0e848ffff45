// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{SGR_RESET, TermColor};

/// Color escapes that go in front of a body of text. When the foreground is a legacy
/// 16 color value it is emitted first, otherwise the background goes first. Some
/// terminals drop a truecolor background that follows a legacy foreground.
#[must_use]
pub fn color_escapes(foreground: Option<TermColor>, background: Option<TermColor>) -> String {
    let mut acc = String::new();
    match (foreground, background) {
        (Some(fg), bg) if fg.is_legacy() => {
            acc.push_str(&fg.fg_escape());
            if let Some(bg) = bg {
                acc.push_str(&bg.bg_escape());
            }
        }
        (Some(fg), bg) => {
            if let Some(bg) = bg {
                acc.push_str(&bg.bg_escape());
            }
            acc.push_str(&fg.fg_escape());
        }
        (None, Some(bg)) => acc.push_str(&bg.bg_escape()),
        (None, None) => {}
    }
    acc
}

/// `text` in the given colors, followed by a full reset.
#[must_use]
pub fn paint_text(
    foreground: Option<TermColor>,
    background: Option<TermColor>,
    text: &str,
) -> String {
    let mut acc = color_escapes(foreground, background);
    acc.push_str(text);
    acc.push_str(SGR_RESET);
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AnsiBasicColor, AnsiValue, RgbValue, assert_eq2};

    const RED: TermColor = TermColor::Basic(AnsiBasicColor::Red);
    const BLUE: TermColor = TermColor::Basic(AnsiBasicColor::Blue);

    #[test]
    fn legacy_foreground_goes_first() {
        let bg = TermColor::Rgb(RgbValue::from_u8(1, 2, 3));
        assert_eq2!(color_escapes(Some(RED), Some(bg)), "\x1b[91m\x1b[48;2;1;2;3m");
    }

    #[test]
    fn non_legacy_foreground_goes_last() {
        let fg = TermColor::Ansi(AnsiValue::new(15));
        assert_eq2!(color_escapes(Some(fg), Some(BLUE)), "\x1b[104m\x1b[38;5;15m");
    }

    #[test]
    fn missing_channels_emit_nothing() {
        assert_eq2!(color_escapes(None, Some(BLUE)), "\x1b[104m");
        assert_eq2!(color_escapes(Some(RED), None), "\x1b[91m");
        assert_eq2!(color_escapes(None, None), "");
    }

    #[test]
    fn paint() {
        assert_eq2!(paint_text(Some(RED), Some(BLUE), "x"), "\x1b[91m\x1b[104mx\x1b[0m");
        assert_eq2!(paint_text(None, None, "x"), "x\x1b[0m");
    }
}
