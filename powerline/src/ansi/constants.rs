// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! CSI (Control Sequence Introducer) and SGR (Select Graphic Rendition) constants.

/// Control Sequence Introducer, `ESC [`.
pub const CSI: &str = "\x1b[";

/// Final byte of an SGR sequence.
pub const SGR: &str = "m";

/// Resets all text attributes (color, reverse video, etc.) to default.
pub const SGR_RESET: &str = "\x1b[0m";

/// Resets only the foreground color.
pub const SGR_RESET_FG: &str = "\x1b[39m";

/// Resets only the background color.
pub const SGR_RESET_BG: &str = "\x1b[49m";

pub const SGR_INVERT_ON: &str = "\x1b[7m";
pub const SGR_INVERT_OFF: &str = "\x1b[27m";

/// SCOSC, save cursor position.
pub const CSI_SAVE_CURSOR: &str = "\x1b[s";

/// SCORC, restore cursor position.
pub const CSI_RESTORE_CURSOR: &str = "\x1b[u";
