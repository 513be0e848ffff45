// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod ansi_basic_color;
pub mod ansi_value;
pub mod color_resolver;
pub mod hex_color_parser;
pub mod rgb_value;
pub mod term_color;

// Re-export.
pub use ansi_basic_color::*;
pub use ansi_value::*;
pub use color_resolver::*;
pub use hex_color_parser::*;
pub use rgb_value::*;
pub use term_color::*;
