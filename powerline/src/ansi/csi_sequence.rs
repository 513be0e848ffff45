// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::CSI;
use std::fmt::{Display, Formatter, Result};

/// Cursor movement sequences emitted around a prompt.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CsiSequence {
    /// `ESC [ s`
    SaveCursor,
    /// `ESC [ u`
    RestoreCursor,
    /// `ESC [ n A`, move up `n` rows.
    CursorUp(u16),
    /// `ESC [ n G`, move to absolute column `n` (1 based).
    CursorHorizontalAbsolute(u16),
}

impl Display for CsiSequence {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match *self {
            CsiSequence::SaveCursor                    => write!(f, "{CSI}s"),
            CsiSequence::RestoreCursor                 => write!(f, "{CSI}u"),
            CsiSequence::CursorUp(rows)                => write!(f, "{CSI}{rows}A"),
            CsiSequence::CursorHorizontalAbsolute(col) => write!(f, "{CSI}{col}G"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CSI_RESTORE_CURSOR, CSI_SAVE_CURSOR};

    #[test]
    fn save_and_restore() {
        assert_eq!(CsiSequence::SaveCursor.to_string(), CSI_SAVE_CURSOR);
        assert_eq!(CsiSequence::RestoreCursor.to_string(), CSI_RESTORE_CURSOR);
    }

    #[test]
    fn movement() {
        assert_eq!(CsiSequence::CursorUp(2).to_string(), "\x1b[2A");
        assert_eq!(CsiSequence::CursorHorizontalAbsolute(71).to_string(), "\x1b[71G");
    }
}
