// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DisplayPreference, TracingConfig, WriterConfig, rolling_file_appender_impl};
use miette::IntoDiagnostic;
use tracing::dispatcher;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, Registry, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer.
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .with_thread_names(false)
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
    };
}

/// Global default subscriber. Once set it can't be changed, so this is for the
/// binary. Does nothing when the level filter is [`LevelFilter::OFF`].
///
/// # Errors
///
/// When the log file can't be created, or a global subscriber is already set.
pub fn try_initialize_logging_global(options: impl Into<TracingConfig>) -> miette::Result<()> {
    let config: TracingConfig = options.into();

    if config.get_level_filter() == LevelFilter::OFF {
        return Ok(());
    }

    let layers = try_create_layers(&config)?;
    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .into_diagnostic()
}

/// Subscriber for the current thread only, for as long as the guard lives. Used by
/// tests.
///
/// # Errors
///
/// When the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let config: TracingConfig = options.into();

    if config.get_level_filter() == LevelFilter::OFF {
        return Ok(None);
    }

    let layers = try_create_layers(&config)?;
    let subscriber = tracing_subscriber::registry().with(layers);
    Ok(Some(tracing::subscriber::set_default(subscriber)))
}

/// The level filter, then a display layer and a file layer if the writer config asks
/// for them.
///
/// # Errors
///
/// When the log file can't be created.
pub fn try_create_layers(
    config: &TracingConfig,
) -> miette::Result<Vec<Box<DynLayer<Registry>>>> {
    let level_filter = config.get_level_filter();
    let mut layers: Vec<Box<DynLayer<Registry>>> = vec![Box::new(level_filter)];

    let (display, file) = match config.get_writer_config() {
        WriterConfig::None => (None, None),
        WriterConfig::Display(display) => (Some(display), None),
        WriterConfig::File(file) => (None, Some(file)),
        WriterConfig::DisplayAndFile(display, file) => (Some(display), Some(file)),
    };

    if let Some(display) = display {
        layers.push(create_display_layer(level_filter, display));
    }

    if let Some(file) = file {
        layers.push(try_create_file_layer(level_filter, &file)?);
    }

    Ok(layers)
}

fn create_display_layer<S>(
    level_filter: LevelFilter,
    preferred_display: DisplayPreference,
) -> Box<DynLayer<S>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!();
    match preferred_display {
        DisplayPreference::Stdout => Box::new(
            fmt_layer
                .with_writer(std::io::stdout)
                .with_filter(level_filter),
        ),
        DisplayPreference::Stderr => Box::new(
            fmt_layer
                .with_writer(std::io::stderr)
                .with_filter(level_filter),
        ),
    }
}

fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    path_str: &str,
) -> miette::Result<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let file = rolling_file_appender_impl::try_create(path_str)?;
    Ok(Box::new(
        create_fmt!()
            .with_ansi(false)
            .with_writer(file)
            .with_filter(level_filter),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn layers_for_display_only() {
        let config: TracingConfig = WriterConfig::Display(DisplayPreference::Stderr).into();
        let layers = try_create_layers(&config).unwrap();
        assert_eq2!(layers.len(), 2);

        let config: TracingConfig = WriterConfig::None.into();
        assert_eq2!(try_create_layers(&config).unwrap().len(), 1);
    }

    #[test]
    fn off_installs_nothing() {
        let guard = try_initialize_logging_thread_local(LevelFilter::OFF).unwrap();
        assert!(guard.is_none());
    }

    #[test]
    fn thread_local_subscriber_sees_render_events() {
        let config = TracingConfig::from(DisplayPreference::Stderr)
            + TracingConfig {
                writer_config: WriterConfig::None,
                level_filter: LevelFilter::DEBUG,
            };
        let guard = try_initialize_logging_thread_local(config).unwrap();
        assert!(guard.is_some());
        tracing::debug!(message = "from test");
    }
}
