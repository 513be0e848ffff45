// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Alignment, CacheKey, Cap, CommonResult, Content, ControlToken,
            DEBUG_POWERLINE_RENDER, RenderContext, SGR_INVERT_OFF, SGR_INVERT_ON,
            SGR_RESET, SGR_RESET_BG, SGR_RESET_FG, SegmentColors, TermColor, color_escapes,
            visible_width};

/// What a segment's content resolves to once producers have run and nested content is
/// flattened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolved {
    Text(String),
    Token(ControlToken),
}

/// Single slot cache. `key` is `None` when the slot was filled by a keyless
/// evaluation, so no later key can match it.
#[derive(Clone, Debug, PartialEq, Eq)]
struct CacheSlot {
    key: Option<CacheKey>,
    value: Option<Resolved>,
}

/// The atomic unit of a prompt.
///
/// ```
/// use r3bl_powerline::{AnsiBasicColor, RenderContext, Segment, TermColor};
///
/// let mut ctx = RenderContext::new_with(false, true);
/// let mut segment = Segment::new("~/src")
///     .with_foreground(TermColor::Basic(AnsiBasicColor::White))
///     .with_background(TermColor::Basic(AnsiBasicColor::DarkBlue));
/// assert_eq!(
///     segment.render(&mut ctx, None, None).unwrap().unwrap(),
///     "\x1b[97m\x1b[44m~/src\x1b[0m"
/// );
/// ```
#[derive(Debug)]
pub struct Segment {
    pub content: Content,
    pub colors: SegmentColors,
    /// Drawn on the outer edge of the segment, see [`Segment::render`]. `None` draws no
    /// cap.
    pub cap: Option<Cap>,
    /// Joins the items of a [`Content::List`].
    pub separator: Cap,
    /// Reset the colors this segment set before the final full reset.
    pub clear_after: bool,
    /// Re-apply this segment's colors after every full reset inside its body.
    pub persistent_color: bool,
    pub decode_entities: bool,
    cache: Option<CacheSlot>,
}

impl Default for Segment {
    fn default() -> Self {
        Self {
            content: Content::Empty,
            colors: SegmentColors::default(),
            cap: None,
            separator: Cap::default(),
            clear_after: false,
            persistent_color: false,
            decode_entities: true,
            cache: None,
        }
    }
}

mod builder {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl Segment {
        #[must_use]
        pub fn new(content: impl Into<Content>) -> Self {
            Self {
                content: content.into(),
                ..Default::default()
            }
        }

        #[must_use]
        pub fn with_foreground(mut self, color: impl Into<TermColor>) -> Self {
            self.colors.foreground = Some(color.into());
            self
        }

        #[must_use]
        pub fn with_background(mut self, color: impl Into<TermColor>) -> Self {
            self.colors.background = Some(color.into());
            self
        }

        #[must_use]
        pub fn with_elevated_foreground(mut self, color: impl Into<TermColor>) -> Self {
            self.colors.elevated_foreground = Some(color.into());
            self
        }

        #[must_use]
        pub fn with_elevated_background(mut self, color: impl Into<TermColor>) -> Self {
            self.colors.elevated_background = Some(color.into());
            self
        }

        #[must_use]
        pub fn with_error_foreground(mut self, color: impl Into<TermColor>) -> Self {
            self.colors.error_foreground = Some(color.into());
            self
        }

        #[must_use]
        pub fn with_error_background(mut self, color: impl Into<TermColor>) -> Self {
            self.colors.error_background = Some(color.into());
            self
        }

        #[must_use]
        pub fn with_cap(mut self, cap: impl Into<Cap>) -> Self {
            self.cap = Some(cap.into());
            self
        }

        #[must_use]
        pub fn with_separator(mut self, separator: impl Into<Cap>) -> Self {
            self.separator = separator.into();
            self
        }

        #[must_use]
        pub fn with_clear_after(mut self, clear_after: bool) -> Self {
            self.clear_after = clear_after;
            self
        }

        #[must_use]
        pub fn with_persistent_color(mut self, persistent_color: bool) -> Self {
            self.persistent_color = persistent_color;
            self
        }

        #[must_use]
        pub fn with_decode_entities(mut self, decode_entities: bool) -> Self {
            self.decode_entities = decode_entities;
            self
        }
    }
}

mod segment_impl {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl Segment {
        /// Resolve the content, reusing the cached value when `cache_key` is `Some` and
        /// equal to the key the cache was filled with. A `None` key always evaluates.
        ///
        /// Control tokens drive the alignment state machine in `ctx`, on a cache hit as
        /// well as on a fresh evaluation.
        ///
        /// # Errors
        ///
        /// Whatever a content producer returns.
        pub fn invoke(
            &mut self,
            ctx: &mut RenderContext,
            cache_key: Option<&CacheKey>,
        ) -> CommonResult<Option<Resolved>> {
            if let Some(key) = cache_key
                && let Some(slot) = &self.cache
                && slot.key.as_ref() == Some(key)
            {
                DEBUG_POWERLINE_RENDER.then(|| {
                    tracing::debug!(message = "Segment cache hit", cache_key = %key);
                });
                let value = slot.value.clone();
                if let Some(Resolved::Token(token)) = &value {
                    ctx.apply_token(*token);
                }
                return Ok(value);
            }

            let value = resolve_content(&mut self.content, &self.separator, ctx)?;
            if let Some(Resolved::Token(token)) = &value {
                ctx.apply_token(*token);
            }

            DEBUG_POWERLINE_RENDER.then(|| {
                tracing::debug!(
                    message = "Segment evaluated",
                    cache_key = ?cache_key,
                    value = ?value
                );
            });

            self.cache = Some(CacheSlot {
                key: cache_key.cloned(),
                value: value.clone(),
            });

            Ok(value)
        }

        /// Visible width of the resolved content.
        /// - `None`: nothing to show, the segment is left out of the layout.
        /// - `Some(0)`: control tokens, they take part in the layout but take no room.
        ///
        /// # Errors
        ///
        /// Whatever a content producer returns.
        pub fn length(
            &mut self,
            ctx: &mut RenderContext,
            cache_key: Option<&CacheKey>,
        ) -> CommonResult<Option<usize>> {
            Ok(match self.invoke(ctx, cache_key)? {
                None => None,
                Some(Resolved::Token(_)) => Some(0),
                Some(Resolved::Text(text)) if self.decode_entities => {
                    Some(visible_width(&ctx.decode_entities(&text)))
                }
                Some(Resolved::Text(text)) => Some(visible_width(&text)),
            })
        }

        /// Render this segment into an escape coded string. `other_background` is the
        /// background of the neighbor the cap faces.
        ///
        /// 1. [`Alignment::Right`]: neighbor background, own background as foreground,
        ///    cap, foreground reset.
        /// 2. Colors, see [`color_escapes`], then the body.
        /// 3. [`Alignment::Left`]: background reset, neighbor background, own background
        ///    as foreground, cap.
        /// 4. Background and foreground resets if [`Segment::clear_after`] is set.
        /// 5. Full reset.
        ///
        /// A [`ControlToken::Spacer`] has an empty body. Its cap is drawn in reverse
        /// video and the neighbor background stands in for its own colors.
        /// [`ControlToken::RightAlign`] and [`ControlToken::NewLine`] render nothing.
        ///
        /// # Errors
        ///
        /// Whatever a content producer returns.
        pub fn render(
            &mut self,
            ctx: &mut RenderContext,
            other_background: Option<TermColor>,
            cache_key: Option<&CacheKey>,
        ) -> CommonResult<Option<String>> {
            let mut foreground = self.colors.resolve_foreground(ctx);
            let mut background = self.colors.resolve_background(ctx);
            let mut other_background = other_background;
            let mut cap = self
                .cap
                .as_ref()
                .map(|it| it.glyph(ctx.alignment).to_string());

            let body = match self.invoke(ctx, cache_key)? {
                None
                | Some(Resolved::Token(ControlToken::RightAlign | ControlToken::NewLine)) => {
                    return Ok(None);
                }
                Some(Resolved::Token(ControlToken::Spacer)) => {
                    let glyph = cap.unwrap_or_else(|| {
                        Cap::default().glyph(ctx.alignment).to_string()
                    });
                    cap = Some(format!("{SGR_INVERT_ON}{glyph}{SGR_INVERT_OFF}"));
                    background = other_background.take();
                    foreground = None;
                    String::new()
                }
                Some(Resolved::Text(text)) => text,
            };

            let alignment = ctx.alignment;
            let colors = color_escapes(foreground, background);
            let mut acc = String::new();

            if let Some(cap) = &cap
                && alignment == Alignment::Right
            {
                if let Some(it) = other_background {
                    acc.push_str(&it.bg_escape());
                }
                if let Some(it) = background {
                    acc.push_str(&it.fg_escape());
                }
                acc.push_str(cap);
                acc.push_str(SGR_RESET_FG);
            }

            acc.push_str(&colors);
            if self.persistent_color && !colors.is_empty() {
                acc.push_str(&body.replace(SGR_RESET, &format!("{SGR_RESET}{colors}")));
            } else {
                acc.push_str(&body);
            }

            if let Some(cap) = &cap
                && alignment == Alignment::Left
            {
                acc.push_str(SGR_RESET_BG);
                if let Some(it) = other_background {
                    acc.push_str(&it.bg_escape());
                }
                if let Some(it) = background {
                    acc.push_str(&it.fg_escape());
                }
                acc.push_str(cap);
            }

            if self.clear_after {
                if background.is_some() {
                    acc.push_str(SGR_RESET_BG);
                }
                if foreground.is_some() {
                    acc.push_str(SGR_RESET_FG);
                }
            }

            acc.push_str(SGR_RESET);

            if self.decode_entities {
                Ok(Some(ctx.decode_entities(&acc)))
            } else {
                Ok(Some(acc))
            }
        }

        /// Drop the cached value, so the next [`Segment::invoke`] evaluates.
        pub fn clear_cache(&mut self) { self.cache = None; }
    }

    /// Run producers until a concrete value shows up. Tokens are only recognized at
    /// this level, everything else is flattened to text and an empty result is `None`.
    fn resolve_content(
        content: &mut Content,
        separator: &Cap,
        ctx: &mut RenderContext,
    ) -> CommonResult<Option<Resolved>> {
        match content {
            Content::Empty => Ok(None),
            Content::Token(token) => Ok(Some(Resolved::Token(*token))),
            Content::Producer(producer) => {
                let mut produced = producer.produce(ctx)?;
                resolve_content(&mut produced, separator, ctx)
            }
            other => {
                let text = flatten(other, separator, ctx)?;
                Ok((!text.is_empty()).then_some(Resolved::Text(text)))
            }
        }
    }

    fn flatten(
        content: &mut Content,
        separator: &Cap,
        ctx: &mut RenderContext,
    ) -> CommonResult<String> {
        match content {
            Content::Empty | Content::Token(_) => Ok(String::new()),
            Content::Text(text) => Ok(text.clone()),
            Content::Segment(segment) => {
                Ok(segment.render(ctx, None, None)?.unwrap_or_default())
            }
            Content::List(items) => {
                let glyph = separator.glyph(ctx.alignment).to_string();
                let mut parts = Vec::with_capacity(items.len());
                for item in items.iter_mut() {
                    let part = flatten(item, separator, ctx)?;
                    if !part.is_empty() {
                        parts.push(part);
                    }
                }
                Ok(parts.join(&glyph))
            }
            Content::Producer(producer) => {
                let mut produced = producer.produce(ctx)?;
                flatten(&mut produced, separator, ctx)
            }
        }
    }
}
