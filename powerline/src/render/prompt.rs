// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CacheKey, CommonResult, CsiSequence, Line, PromptGlyphs, RenderContext};

/// The whole renderable unit: lines, plus the number of rows to move up first when
/// the prompt is redrawn in place.
#[derive(Debug, Default)]
pub struct Prompt {
    pub lines: Vec<Line>,
    /// Only the magnitude is used, the cursor always moves up.
    pub prefix_lines: i32,
}

impl Prompt {
    #[must_use]
    pub fn new(lines: Vec<Line>) -> Self {
        Self {
            lines,
            prefix_lines: 0,
        }
    }

    #[must_use]
    pub fn with_prefix_lines(mut self, prefix_lines: i32) -> Self {
        self.prefix_lines = prefix_lines;
        self
    }

    /// Use the same glyphs on every line.
    #[must_use]
    pub fn with_glyphs(mut self, glyphs: &PromptGlyphs) -> Self {
        for line in &mut self.lines {
            line.glyphs = glyphs.clone();
        }
        self
    }

    /// Cursor up `|prefix_lines|` rows (if non zero), the lines joined with `\n`, then
    /// restore the cursor to the position stored by the last row's `ESC[s`.
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
        let mut acc = String::new();

        if self.prefix_lines != 0 {
            let rows = u16::try_from(self.prefix_lines.unsigned_abs()).unwrap_or(u16::MAX);
            acc.push_str(&CsiSequence::CursorUp(rows).to_string());
        }

        let mut rendered_lines = Vec::with_capacity(self.lines.len());
        for line in &mut self.lines {
            rendered_lines.push(line.render(ctx, width, cache_key)?);
        }
        acc.push_str(&rendered_lines.join("\n"));

        acc.push_str(&CsiSequence::RestoreCursor.to_string());

        tracing::debug!(
            message = "Prompt rendered",
            lines = self.lines.len(),
            width = width,
            cache_key = ?cache_key
        );

        Ok(acc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Column, Content, Segment, assert_eq2};
    use std::{cell::Cell, rc::Rc};
    use test_case::test_case;

    fn ctx() -> RenderContext { RenderContext::new_with(false, true) }

    #[test_case(2)]
    #[test_case(-2)]
    fn prefix_lines_always_move_up(prefix_lines: i32) {
        let mut ctx = ctx();
        let mut prompt = Prompt::new(vec![Line::from(Column::from(vec![Segment::new("x")]))])
            .with_prefix_lines(prefix_lines);

        let output = prompt.render(&mut ctx, 80, None).unwrap();
        assert!(output.starts_with("\x1b[2Ax"));
        assert!(output.ends_with("\x1b[u"));
    }

    #[test]
    fn no_prefix_no_lines() {
        let mut ctx = ctx();
        assert_eq2!(Prompt::default().render(&mut ctx, 80, None).unwrap(), "\x1b[u");
    }

    #[test]
    fn lines_are_joined() {
        let mut ctx = ctx();
        let mut prompt = Prompt::new(vec![
            Line::from(Column::from(vec![Segment::new("one")])),
            Line::from(Column::from(vec![Segment::new("two")])),
        ]);

        let output = prompt.render(&mut ctx, 80, None).unwrap();
        assert_eq2!(
            output,
            "one\x1b[0m\x1b[49m\x1b[39m▌\x1b[0m\x1b[s\x1b[0m\n\
             two\x1b[0m\x1b[49m\x1b[39m▌\x1b[0m\x1b[s\x1b[0m\
             \x1b[u"
        );
    }

    #[test]
    fn rerender_with_same_key_reuses_content() {
        let mut ctx = ctx();
        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();
        let mut prompt = Prompt::new(vec![Line::from(Column::from(vec![Segment::new(
            Content::producer(move |_| {
                count_clone.set(count_clone.get() + 1);
                Ok(Content::display("slow"))
            }),
        )]))]);
        let key = CacheKey::from(42_u64);

        let first = prompt.render(&mut ctx, 80, Some(&key)).unwrap();
        let second = prompt.render(&mut ctx, 120, Some(&key)).unwrap();
        assert_eq2!(first, second);
        assert_eq2!(count.get(), 1);
    }
}
