// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CLIArg, CacheKey, CommonResult, Prompt, PromptGlyphs, RenderContext,
            default_prompt, get_terminal_width, try_parse_prompt_str};
use miette::{Context, IntoDiagnostic};

/// Build the prompt the arguments ask for and render it once.
///
/// # Errors
///
/// An unreadable or invalid definition file, or a failing content producer.
pub fn run_plp(cli_arg: &CLIArg) -> CommonResult<String> {
    let mut prompt = try_load_prompt(cli_arg)?;

    if cli_arg.powerline {
        prompt = prompt.with_glyphs(&PromptGlyphs::powerline());
    }
    if let Some(prefix_lines) = cli_arg.prefix_lines {
        prompt.prefix_lines = prefix_lines;
    }

    let mut ctx = RenderContext::new(cli_arg.last_exit_code == 0);
    let width = cli_arg.width.unwrap_or_else(get_terminal_width);
    let cache_key = cli_arg.cache_key.as_deref().map(CacheKey::from);

    tracing::debug!(
        message = "Rendering prompt",
        width = width,
        elevated = ctx.elevated,
        last_success = ctx.last_success,
        cache_key = ?cache_key
    );

    prompt.render(&mut ctx, width, cache_key.as_ref())
}

fn try_load_prompt(cli_arg: &CLIArg) -> CommonResult<Prompt> {
    let Some(path) = &cli_arg.config else {
        return Ok(default_prompt());
    };

    let input = std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err(format!("Could not read prompt definition {}", path.display()))?;

    try_parse_prompt_str(&input)
        .wrap_err(format!("Invalid prompt definition {}", path.display()))
}
