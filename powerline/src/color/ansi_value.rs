// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// An index into the 256 color palette. More info:
/// - <https://jonasjacek.github.io/colors/>
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct AnsiValue {
    pub index: u8,
}

impl AnsiValue {
    #[must_use]
    pub fn new(index: u8) -> Self { Self { index } }
}

impl From<u8> for AnsiValue {
    fn from(index: u8) -> Self { Self::new(index) }
}
