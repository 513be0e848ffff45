// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The escape sequences a prompt is made of, and the width of text once they are
//! stripped out. More info:
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code>

// Attach sources.
pub mod constants;
pub mod csi_sequence;
pub mod sgr_code;
pub mod visible_width;

// Re-export.
pub use constants::*;
pub use csi_sequence::*;
pub use sgr_code::*;
pub use visible_width::*;
