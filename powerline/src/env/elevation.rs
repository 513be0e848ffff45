// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::OnceLock;

/// Whether the current process runs with root privilege. Probed once, the answer does
/// not change for the life of the process.
#[must_use]
pub fn is_process_elevated() -> bool {
    static ELEVATED: OnceLock<bool> = OnceLock::new();
    *ELEVATED.get_or_init(|| {
        let it = probe_elevation();
        tracing::debug!(message = "Probed process elevation", elevated = ?it);
        it
    })
}

#[cfg(unix)]
fn probe_elevation() -> bool { rustix::process::geteuid().is_root() }

#[cfg(not(unix))]
fn probe_elevation() -> bool { false }
