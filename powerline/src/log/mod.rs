// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Logging is **disabled** by default. Call [`try_initialize_logging_global`] to turn it
//! on. Render code emits [`tracing`] events whether or not a subscriber is installed.

// Attach sources.
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use tracing_config::*;
pub use tracing_init::*;
