// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod default_prompt;

// Re-export.
pub use default_prompt::*;
