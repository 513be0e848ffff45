// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod clap_config;
pub mod run_plp;

// Re-export.
pub use clap_config::*;
pub use run_plp::*;
