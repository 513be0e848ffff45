// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CacheKey, CommonResult, RenderContext, Segment, TermColor};
use std::fmt::Debug;

pub type ProduceSegmentsFn = dyn FnMut(&RenderContext) -> CommonResult<Vec<Segment>>;

/// Produces any number of segments at render time, eg: one per path component. The
/// default colors are applied to each produced segment that has no base color of its
/// own.
///
/// Produced segments are kept until the next evaluation. With a `Some` cache key equal
/// to the one used last time, they are reused as is (along with their own caches).
pub struct SegmentFactory {
    producer: Box<ProduceSegmentsFn>,
    pub default_foreground: Option<TermColor>,
    pub default_background: Option<TermColor>,
    produced: Option<(Option<CacheKey>, Vec<Segment>)>,
}

impl Debug for SegmentFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SegmentFactory")
            .field("default_foreground", &self.default_foreground)
            .field("default_background", &self.default_background)
            .field("produced", &self.produced)
            .finish_non_exhaustive()
    }
}

impl SegmentFactory {
    pub fn new(
        producer: impl FnMut(&RenderContext) -> CommonResult<Vec<Segment>> + 'static,
    ) -> Self {
        Self {
            producer: Box::new(producer),
            default_foreground: None,
            default_background: None,
            produced: None,
        }
    }

    #[must_use]
    pub fn with_default_colors(
        mut self,
        foreground: Option<TermColor>,
        background: Option<TermColor>,
    ) -> Self {
        self.default_foreground = foreground;
        self.default_background = background;
        self
    }

    /// # Errors
    ///
    /// Whatever the producer returns.
    pub fn segments_mut(
        &mut self,
        ctx: &RenderContext,
        cache_key: Option<&CacheKey>,
    ) -> CommonResult<&mut [Segment]> {
        let is_hit = matches!(
            (&self.produced, cache_key),
            (Some((Some(last_key), _)), Some(key)) if last_key == key
        );

        if !is_hit {
            let mut segments = (self.producer)(ctx)?;
            for segment in &mut segments {
                segment
                    .colors
                    .apply_defaults(self.default_foreground, self.default_background);
            }
            self.produced = Some((cache_key.cloned(), segments));
        }

        Ok(match &mut self.produced {
            Some((_, segments)) => segments.as_mut_slice(),
            None => &mut [],
        })
    }

    #[must_use]
    pub fn segment_mut(&mut self, index: usize) -> Option<&mut Segment> {
        self.produced
            .as_mut()
            .and_then(|(_, segments)| segments.get_mut(index))
    }

    /// Segments from the last evaluation.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        match &self.produced {
            Some((_, segments)) => segments,
            None => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AnsiBasicColor, assert_eq2};
    use std::{cell::Cell, rc::Rc};

    const GRAY: TermColor = TermColor::Basic(AnsiBasicColor::Gray);
    const BLUE: TermColor = TermColor::Basic(AnsiBasicColor::Blue);

    fn path_factory(count: Rc<Cell<usize>>) -> SegmentFactory {
        SegmentFactory::new(move |_| {
            count.set(count.get() + 1);
            Ok(vec![
                Segment::new("usr"),
                Segment::new("local").with_background(BLUE),
            ])
        })
        .with_default_colors(Some(GRAY), Some(GRAY))
    }

    #[test]
    fn defaults_fill_missing_colors() {
        let ctx = RenderContext::new_with(false, true);
        let mut factory = path_factory(Rc::new(Cell::new(0)));
        let segments = factory.segments_mut(&ctx, None).unwrap();

        assert_eq2!(segments.len(), 2);
        assert_eq2!(segments[0].colors.background, Some(GRAY));
        assert_eq2!(segments[1].colors.background, Some(BLUE));
        assert_eq2!(segments[1].colors.foreground, Some(GRAY));
    }

    #[test]
    fn same_key_reuses_segments() {
        let ctx = RenderContext::new_with(false, true);
        let count = Rc::new(Cell::new(0));
        let mut factory = path_factory(count.clone());
        let key = CacheKey::from("k");

        factory.segments_mut(&ctx, Some(&key)).unwrap();
        factory.segments_mut(&ctx, Some(&key)).unwrap();
        assert_eq2!(count.get(), 1);

        factory.segments_mut(&ctx, None).unwrap();
        factory.segments_mut(&ctx, None).unwrap();
        assert_eq2!(count.get(), 3);
        assert_eq2!(factory.segments().len(), 2);
    }
}
