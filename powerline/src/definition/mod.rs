// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod definition_error;
pub mod definition_keys;
pub mod parse_definition;

// Re-export.
pub use definition_error::*;
pub use definition_keys::*;
pub use parse_definition::*;
