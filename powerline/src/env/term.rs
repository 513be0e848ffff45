// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;

pub const DEFAULT_WIDTH: u16 = 80;

/// Get the terminal width. If there is a problem (eg: stdout is not a TTY), or the
/// terminal reports zero columns, return [`DEFAULT_WIDTH`].
#[must_use]
pub fn get_terminal_width() -> u16 {
    match get_size() {
        Ok((columns, _)) if columns > 0 => columns,
        _ => DEFAULT_WIDTH,
    }
}

/// Get the terminal size as `(columns, rows)`.
///
/// # Errors
///
/// Returns an error if:
/// - The terminal size cannot be determined
/// - The terminal is not available or not a TTY
pub fn get_size() -> miette::Result<(u16, u16)> {
    crossterm::terminal::size().into_diagnostic()
}
