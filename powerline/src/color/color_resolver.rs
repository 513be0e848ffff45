// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{ColorChannel, TermColor};
use crate::RenderContext;

/// The six colors a segment can carry. `None` means "terminal default", and no escape
/// is emitted for that channel.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SegmentColors {
    pub foreground: Option<TermColor>,
    pub background: Option<TermColor>,
    pub elevated_foreground: Option<TermColor>,
    pub elevated_background: Option<TermColor>,
    pub error_foreground: Option<TermColor>,
    pub error_background: Option<TermColor>,
}

impl SegmentColors {
    /// Pick the effective color for one channel.
    ///
    /// 1. Elevated process and an elevated override is set: the override.
    /// 2. Last command failed and an error override is set: the override.
    /// 3. Otherwise the base color, which may be `None`.
    #[must_use]
    pub fn resolve(&self, channel: ColorChannel, ctx: &RenderContext) -> Option<TermColor> {
        let (base, elevated, error) = match channel {
            ColorChannel::Foreground => (
                self.foreground,
                self.elevated_foreground,
                self.error_foreground,
            ),
            ColorChannel::Background => (
                self.background,
                self.elevated_background,
                self.error_background,
            ),
        };

        if ctx.elevated
            && let Some(it) = elevated
        {
            return Some(it);
        }

        if !ctx.last_success
            && let Some(it) = error
        {
            return Some(it);
        }

        base
    }

    #[must_use]
    pub fn resolve_foreground(&self, ctx: &RenderContext) -> Option<TermColor> {
        self.resolve(ColorChannel::Foreground, ctx)
    }

    #[must_use]
    pub fn resolve_background(&self, ctx: &RenderContext) -> Option<TermColor> {
        self.resolve(ColorChannel::Background, ctx)
    }

    /// Fill in base colors that are not set. Overrides are left alone.
    pub fn apply_defaults(&mut self, foreground: Option<TermColor>, background: Option<TermColor>) {
        if self.foreground.is_none() {
            self.foreground = foreground;
        }
        if self.background.is_none() {
            self.background = background;
        }
    }
}
