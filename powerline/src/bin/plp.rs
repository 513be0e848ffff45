// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use r3bl_powerline::{CLIArg, CommonResult, TracingConfig, WriterConfig, run_plp,
                     tracing_config_options::DEFAULT_LOG_FILE_NAME,
                     try_initialize_logging_global};
use miette::IntoDiagnostic;
use std::io::Write;

fn main() -> CommonResult<()> {
    let cli_arg = CLIArg::parse();

    // stdout carries the prompt, so logs only ever go to the file.
    if cli_arg.global_options.enable_logging {
        try_initialize_logging_global(TracingConfig::from(WriterConfig::File(
            DEFAULT_LOG_FILE_NAME.to_string(),
        )))?;
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    let output = run_plp(&cli_arg)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes()).into_diagnostic()?;
    stdout.flush().into_diagnostic()?;

    Ok(())
}
