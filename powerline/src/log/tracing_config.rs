// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Add;
use tracing_core::LevelFilter;

/// Where the logs go, and how much of them.
///
/// Anything that converts [`Into<TracingConfig>`] can be passed to
/// [`crate::try_initialize_logging_global`], and configs compose with `+`:
///
/// ```
/// use r3bl_powerline::{DisplayPreference, TracingConfig, WriterConfig};
///
/// let level: TracingConfig = tracing::Level::INFO.into();
/// let file: TracingConfig = WriterConfig::File("prompt.log".to_string()).into();
/// let display: TracingConfig = DisplayPreference::Stderr.into();
///
/// let config = level + file + display;
/// assert_eq!(
///     config.writer_config,
///     WriterConfig::DisplayAndFile(DisplayPreference::Stderr, "prompt.log".to_string())
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    /// Path to the log file.
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

/// The prompt itself is written to stdout, so only use [`DisplayPreference::Stdout`]
/// when nothing else is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl TracingConfig {
    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }
}

pub mod tracing_config_options {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

    impl Default for TracingConfig {
        fn default() -> Self {
            Self {
                writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
                level_filter: LevelFilter::DEBUG,
            }
        }
    }

    impl From<tracing::Level> for TracingConfig {
        fn from(level: tracing::Level) -> Self {
            Self {
                level_filter: level.into(),
                ..Default::default()
            }
        }
    }

    impl From<LevelFilter> for TracingConfig {
        fn from(level_filter: LevelFilter) -> Self {
            Self {
                level_filter,
                ..Default::default()
            }
        }
    }

    impl From<DisplayPreference> for TracingConfig {
        fn from(preferred_display: DisplayPreference) -> Self {
            Self {
                writer_config: WriterConfig::Display(preferred_display),
                ..Default::default()
            }
        }
    }

    impl From<WriterConfig> for TracingConfig {
        fn from(writer_config: WriterConfig) -> Self {
            Self {
                writer_config,
                ..Default::default()
            }
        }
    }

    /// The more verbose level wins, writers are merged with [`WriterConfig`]'s `+`.
    impl Add<TracingConfig> for TracingConfig {
        type Output = Self;

        fn add(self, rhs: Self) -> Self::Output {
            Self {
                level_filter: self.level_filter.max(rhs.level_filter),
                writer_config: self.writer_config + rhs.writer_config,
            }
        }
    }

    /// Display and file settings are combined. When both sides set the same one, `rhs`
    /// wins.
    impl Add<WriterConfig> for WriterConfig {
        type Output = Self;

        fn add(self, rhs: WriterConfig) -> Self::Output {
            let (lhs_display, lhs_file) = self.into_parts();
            let (rhs_display, rhs_file) = rhs.into_parts();
            WriterConfig::from_parts(rhs_display.or(lhs_display), rhs_file.or(lhs_file))
        }
    }

    impl WriterConfig {
        fn into_parts(self) -> (Option<DisplayPreference>, Option<String>) {
            match self {
                WriterConfig::None => (None, None),
                WriterConfig::Display(display) => (Some(display), None),
                WriterConfig::File(file) => (None, Some(file)),
                WriterConfig::DisplayAndFile(display, file) => (Some(display), Some(file)),
            }
        }

        fn from_parts(display: Option<DisplayPreference>, file: Option<String>) -> Self {
            match (display, file) {
                (None, None) => WriterConfig::None,
                (Some(display), None) => WriterConfig::Display(display),
                (None, Some(file)) => WriterConfig::File(file),
                (Some(display), Some(file)) => WriterConfig::DisplayAndFile(display, file),
            }
        }
    }
}
