// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use unicode_width::UnicodeWidthStr;

/// Number of terminal columns `text` occupies once escape sequences are removed.
/// Wide glyphs (CJK, most emoji) count as 2.
#[must_use]
pub fn visible_width(text: &str) -> usize {
    if !text.contains('\x1b') {
        return text.width();
    }
    strip_ansi_escapes::strip_str(text).width()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("", 0)]
    #[test_case("abc", 3)]
    #[test_case("\x1b[31mred\x1b[0m", 3)]
    #[test_case("\x1b[48;2;1;2;3m\u{e0b0}\x1b[0m", 1)]
    #[test_case("😀", 2)]
    fn width(text: &str, expected: usize) {
        assert_eq!(visible_width(text), expected);
    }
}
