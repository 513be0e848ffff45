// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CommonResult, RenderContext, Segment};
use std::fmt::{Debug, Display};

/// Content values that change layout state instead of producing text.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ControlToken {
    /// Switch to [`crate::Alignment::Right`] for the rest of the line.
    RightAlign,
    /// Switch back to [`crate::Alignment::Left`].
    NewLine,
    /// A colored blank drawn with the segment's cap, in reverse video.
    Spacer,
}

impl ControlToken {
    /// The literal markers that stand for each token: tab, newline and a single space.
    #[rustfmt::skip]
    #[must_use]
    pub fn from_marker(text: &str) -> Option<Self> {
        match text {
            "\t" => Some(ControlToken::RightAlign),
            "\n" => Some(ControlToken::NewLine),
            " "  => Some(ControlToken::Spacer),
            _    => None,
        }
    }
}

/// Signature of a deferred content producer. It runs at render time, and may return
/// any [`Content`], including another producer.
pub type ProduceContentFn = dyn FnMut(&RenderContext) -> CommonResult<Content>;

pub struct ContentProducer(Box<ProduceContentFn>);

impl ContentProducer {
    pub fn new(
        producer: impl FnMut(&RenderContext) -> CommonResult<Content> + 'static,
    ) -> Self {
        Self(Box::new(producer))
    }

    /// # Errors
    ///
    /// Whatever the producer returns is passed through untouched.
    pub fn produce(&mut self, ctx: &RenderContext) -> CommonResult<Content> { (self.0)(ctx) }
}

impl Debug for ContentProducer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ContentProducer(..)")
    }
}

/// What a [`Segment`] displays. Resolved lazily, at render time.
#[derive(Debug, Default)]
pub enum Content {
    #[default]
    Empty,
    Text(String),
    Token(ControlToken),
    /// Rendered with its own colors and caps, then used as text.
    Segment(Box<Segment>),
    /// Flattened, then joined with the owning segment's separator.
    List(Vec<Content>),
    Producer(ContentProducer),
}

impl Content {
    pub fn producer(
        producer: impl FnMut(&RenderContext) -> CommonResult<Content> + 'static,
    ) -> Self {
        Content::Producer(ContentProducer::new(producer))
    }

    /// Coerce any displayable value into content. The tab, newline and space markers
    /// become [`ControlToken`]s.
    pub fn display(value: impl Display) -> Self { Content::from(value.to_string()) }
}

mod convenience_conversions {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    impl From<&str> for Content {
        fn from(text: &str) -> Self {
            match ControlToken::from_marker(text) {
                Some(token) => Content::Token(token),
                None => Content::Text(text.to_string()),
            }
        }
    }

    impl From<String> for Content {
        fn from(text: String) -> Self {
            match ControlToken::from_marker(&text) {
                Some(token) => Content::Token(token),
                None => Content::Text(text),
            }
        }
    }

    impl From<ControlToken> for Content {
        fn from(token: ControlToken) -> Self { Content::Token(token) }
    }

    impl From<Segment> for Content {
        fn from(segment: Segment) -> Self { Content::Segment(Box::new(segment)) }
    }

    impl From<Vec<Content>> for Content {
        fn from(items: Vec<Content>) -> Self { Content::List(items) }
    }

    impl From<Vec<Segment>> for Content {
        fn from(items: Vec<Segment>) -> Self {
            Content::List(items.into_iter().map(Content::from).collect())
        }
    }

    impl From<ContentProducer> for Content {
        fn from(producer: ContentProducer) -> Self { Content::Producer(producer) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_become_tokens() {
        assert!(matches!(Content::from("\t"), Content::Token(ControlToken::RightAlign)));
        assert!(matches!(Content::from("\n"), Content::Token(ControlToken::NewLine)));
        assert!(matches!(
            Content::from(" ".to_string()),
            Content::Token(ControlToken::Spacer)
        ));
    }

    #[test]
    fn other_text_stays_text() {
        assert!(matches!(Content::from("  "), Content::Text(it) if it == "  "));
        assert!(matches!(Content::display(42), Content::Text(it) if it == "42"));
    }

    #[test]
    fn producer_runs_on_demand() {
        let ctx = RenderContext::new_with(false, false);
        let mut content =
            Content::producer(|ctx| Ok(Content::display(ctx.last_success)));
        let Content::Producer(producer) = &mut content else {
            panic!("expected a producer");
        };
        assert!(matches!(producer.produce(&ctx).unwrap(), Content::Text(it) if it == "false"));
    }
}
