// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Alignment, CacheKey, Column, CommonResult, CsiSequence, DEBUG_POWERLINE_RENDER,
            PromptGlyphs, RenderContext, SGR_RESET, paint_text};

/// Columns laid out two per terminal row. The first of a pair is anchored on the left,
/// the second on the right (positioned with an absolute column escape). A third column
/// starts a new row. `None` entries are spacers, they take a slot and draw nothing.
#[derive(Debug, Default)]
pub struct Line {
    pub columns: Vec<Option<Column>>,
    pub glyphs: PromptGlyphs,
}

impl From<Column> for Line {
    fn from(column: Column) -> Self { Self::new(vec![Some(column)]) }
}

impl Line {
    #[must_use]
    pub fn new(columns: Vec<Option<Column>>) -> Self {
        Self {
            columns,
            glyphs: PromptGlyphs::default(),
        }
    }

    #[must_use]
    pub fn with_glyphs(mut self, glyphs: PromptGlyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Render every row of this line for a terminal `width` columns wide.
    ///
    /// Per row:
    /// 1. Left column, then a transition out of its end background.
    /// 2. Save cursor, this is where input goes.
    /// 3. Right column: move to `width - length`, a transition into its start
    ///    background, then the column with the reversed glyphs.
    ///
    /// Rows are separated by `\n` and the whole line ends with a full reset.
    ///
    /// # Errors
    ///
    /// Whatever a content producer returns.
    pub fn render(
        &mut self,
        ctx: &mut RenderContext,
        width: u16,
        cache_key: Option<&CacheKey>,
    ) -> CommonResult<String> {
        let (separator, color_separator) = self.glyphs.for_alignment(Alignment::Left);
        let (reverse_separator, reverse_color_separator) =
            self.glyphs.for_alignment(Alignment::Right);

        for column in self.columns.iter_mut().flatten() {
            column.precalculate(ctx, cache_key)?;
        }

        let mut acc = String::new();
        let count = self.columns.len();
        let mut index = 0;

        while index < count {
            ctx.alignment = Alignment::Left;

            if let Some(Some(column)) = self.columns.get_mut(index)
                && column.length().is_some_and(|it| it > 0)
            {
                acc.push_str(&column.render(
                    ctx,
                    separator,
                    color_separator,
                    false,
                    cache_key,
                )?);
                acc.push_str(&ctx.decode_entities(&paint_text(
                    column.end_background(),
                    None,
                    color_separator,
                )));
            }

            acc.push_str(&CsiSequence::SaveCursor.to_string());
            index += 1;

            if let Some(Some(column)) = self.columns.get_mut(index)
                && let Some(length) = column.length().filter(|it| *it > 0)
            {
                let position = usize::from(width).saturating_sub(length).max(1);
                let position = u16::try_from(position).unwrap_or(width);

                DEBUG_POWERLINE_RENDER.then(|| {
                    tracing::debug!(
                        message = "Right column position",
                        width = width,
                        length = length,
                        position = position
                    );
                });

                acc.push_str(&CsiSequence::CursorHorizontalAbsolute(position).to_string());
                acc.push_str(&ctx.decode_entities(&paint_text(
                    column.start_background(),
                    None,
                    reverse_color_separator,
                )));
                acc.push_str(&column.render(
                    ctx,
                    reverse_separator,
                    reverse_color_separator,
                    true,
                    cache_key,
                )?);
            }

            index += 1;
            if index < count {
                acc.push('\n');
            }
        }

        acc.push_str(SGR_RESET);
        Ok(acc)
    }
}
