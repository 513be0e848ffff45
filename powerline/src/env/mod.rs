// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Facts about the process and terminal a prompt is rendered for.

// Attach sources.
pub mod elevation;
pub mod term;

// Re-export.
pub use elevation::*;
pub use term::*;
