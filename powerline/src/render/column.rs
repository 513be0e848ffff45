// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Alignment, CacheKey, CommonResult, DEBUG_POWERLINE_RENDER, RenderContext,
            SGR_RESET_BG, SGR_RESET_FG, Segment, SegmentFactory, TermColor, paint_text};

/// One entry of a [`Column`].
#[derive(Debug)]
pub enum SegmentSource {
    Segment(Segment),
    Factory(SegmentFactory),
}

impl SegmentSource {
    fn segments_mut(
        &mut self,
        ctx: &RenderContext,
        cache_key: Option<&CacheKey>,
    ) -> CommonResult<&mut [Segment]> {
        match self {
            SegmentSource::Segment(segment) => Ok(std::slice::from_mut(segment)),
            SegmentSource::Factory(factory) => factory.segments_mut(ctx, cache_key),
        }
    }

    fn segment(&self, item: usize) -> Option<&Segment> {
        match self {
            SegmentSource::Segment(segment) => (item == 0).then_some(segment),
            SegmentSource::Factory(factory) => factory.segments().get(item),
        }
    }

    fn segment_mut(&mut self, item: usize) -> Option<&mut Segment> {
        match self {
            SegmentSource::Segment(segment) => (item == 0).then_some(segment),
            SegmentSource::Factory(factory) => factory.segment_mut(item),
        }
    }
}

impl From<Segment> for SegmentSource {
    fn from(segment: Segment) -> Self { SegmentSource::Segment(segment) }
}

impl From<SegmentFactory> for SegmentSource {
    fn from(factory: SegmentFactory) -> Self { SegmentSource::Factory(factory) }
}

/// Where a segment kept by [`Column::precalculate`] lives, plus the values the layout
/// needs from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct KeptSegment {
    source: usize,
    item: usize,
    length: usize,
    background: Option<TermColor>,
}

/// Segments composed into one color continuous strip.
#[derive(Debug, Default)]
pub struct Column {
    pub sources: Vec<SegmentSource>,
    kept: Vec<KeptSegment>,
    start_background: Option<TermColor>,
    end_background: Option<TermColor>,
    length: Option<usize>,
}

impl From<Vec<Segment>> for Column {
    fn from(segments: Vec<Segment>) -> Self {
        Self::new(segments.into_iter().map(SegmentSource::from).collect())
    }
}

impl Column {
    #[must_use]
    pub fn new(sources: Vec<SegmentSource>) -> Self {
        Self {
            sources,
            ..Default::default()
        }
    }

    /// Background of the first kept segment that has one.
    #[must_use]
    pub fn start_background(&self) -> Option<TermColor> { self.start_background }

    /// Background of the last kept segment that has one.
    #[must_use]
    pub fn end_background(&self) -> Option<TermColor> { self.end_background }

    /// Sum of the kept segments' lengths plus one per gap between them. `None` when no
    /// segment is kept.
    #[must_use]
    pub fn length(&self) -> Option<usize> { self.length }

    /// Evaluate every source, keep the segments that have a length, and compute
    /// [`Column::start_background`], [`Column::end_background`] and
    /// [`Column::length`]. Returns the kept segments.
    ///
    /// # Errors
    ///
    /// Whatever a content producer returns.
    pub fn precalculate(
        &mut self,
        ctx: &mut RenderContext,
        cache_key: Option<&CacheKey>,
    ) -> CommonResult<Vec<&Segment>> {
        self.kept.clear();

        for (source_index, source) in self.sources.iter_mut().enumerate() {
            let segments = source.segments_mut(ctx, cache_key)?;
            for (item_index, segment) in segments.iter_mut().enumerate() {
                if let Some(length) = segment.length(ctx, cache_key)? {
                    self.kept.push(KeptSegment {
                        source: source_index,
                        item: item_index,
                        length,
                        background: segment.colors.resolve_background(ctx),
                    });
                }
            }
        }

        self.start_background = self.kept.iter().find_map(|it| it.background);
        self.end_background = self.kept.iter().rev().find_map(|it| it.background);
        self.length = (!self.kept.is_empty()).then(|| {
            self.kept.iter().map(|it| it.length).sum::<usize>() + self.kept.len() - 1
        });

        DEBUG_POWERLINE_RENDER.then(|| {
            tracing::debug!(
                message = "Column precalculated",
                kept = self.kept.len(),
                length = ?self.length,
                start_background = ?self.start_background,
                end_background = ?self.end_background
            );
        });

        Ok(self
            .kept
            .iter()
            .filter_map(|it| self.sources.get(it.source)?.segment(it.item))
            .collect())
    }

    /// Render the kept segments. Between a segment and a next one with a non zero
    /// length goes `separator` if they share a background, otherwise
    /// `color_separator` painted with the two backgrounds: `(current, next)` as
    /// `(foreground, background)`, swapped when `right_justified`. Ends with background
    /// and foreground resets.
    ///
    /// Evaluates the sources again first, so the layout reflects the current state.
    /// Pass the same `cache_key` as the preceding [`Column::precalculate`] to avoid
    /// running producers twice.
    ///
    /// # Errors
    ///
    /// Whatever a content producer returns.
    pub fn render(
        &mut self,
        ctx: &mut RenderContext,
        separator: &str,
        color_separator: &str,
        right_justified: bool,
        cache_key: Option<&CacheKey>,
    ) -> CommonResult<String> {
        // Precalculating walks every token, the render below walks them again in order.
        let alignment = ctx.alignment;
        self.precalculate(ctx, cache_key)?;
        ctx.alignment = alignment;

        let mut acc = String::new();
        let kept = self.kept.clone();

        for (index, current) in kept.iter().enumerate() {
            let previous = index.checked_sub(1).and_then(|it| kept.get(it));
            let next = kept.get(index + 1);

            // The cap faces the previous segment when right aligned, the next otherwise.
            let neighbor = match ctx.alignment {
                Alignment::Left => next,
                Alignment::Right => previous,
            };
            let other_background = neighbor.and_then(|it| it.background);

            if let Some(segment) = self
                .sources
                .get_mut(current.source)
                .and_then(|it| it.segment_mut(current.item))
                && let Some(rendered) = segment.render(ctx, other_background, cache_key)?
            {
                acc.push_str(&rendered);
            }

            if let Some(next) = next
                && next.length > 0
            {
                if current.background == next.background {
                    acc.push_str(&ctx.decode_entities(separator));
                } else {
                    let (fg, bg) = if right_justified {
                        (next.background, current.background)
                    } else {
                        (current.background, next.background)
                    };
                    acc.push_str(&ctx.decode_entities(&paint_text(fg, bg, color_separator)));
                }
            }
        }

        acc.push_str(SGR_RESET_BG);
        acc.push_str(SGR_RESET_FG);

        Ok(acc)
    }
}
