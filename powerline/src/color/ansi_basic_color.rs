// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// The 16 legacy console colors. Names parse case insensitively, eg: `"darkred"` and
/// `"DarkRed"` are both [`AnsiBasicColor::DarkRed`].
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Debug,
    strum_macros::EnumString,
    strum_macros::Display,
)]
#[strum(ascii_case_insensitive)]
pub enum AnsiBasicColor {
    Black,
    DarkRed,
    DarkGreen,
    DarkYellow,
    DarkBlue,
    DarkMagenta,
    DarkCyan,
    Gray,
    DarkGray,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl AnsiBasicColor {
    /// SGR parameter for this color as a foreground, 30-37 or 90-97.
    #[rustfmt::skip]
    #[must_use]
    pub fn fg_code(self) -> u8 {
        match self {
            AnsiBasicColor::Black       => 30,
            AnsiBasicColor::DarkRed     => 31,
            AnsiBasicColor::DarkGreen   => 32,
            AnsiBasicColor::DarkYellow  => 33,
            AnsiBasicColor::DarkBlue    => 34,
            AnsiBasicColor::DarkMagenta => 35,
            AnsiBasicColor::DarkCyan    => 36,
            AnsiBasicColor::Gray        => 37,
            AnsiBasicColor::DarkGray    => 90,
            AnsiBasicColor::Red         => 91,
            AnsiBasicColor::Green       => 92,
            AnsiBasicColor::Yellow      => 93,
            AnsiBasicColor::Blue        => 94,
            AnsiBasicColor::Magenta     => 95,
            AnsiBasicColor::Cyan        => 96,
            AnsiBasicColor::White       => 97,
        }
    }

    /// SGR parameter for this color as a background, 40-47 or 100-107.
    #[must_use]
    pub fn bg_code(self) -> u8 { self.fg_code() + 10 }
}
