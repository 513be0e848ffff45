// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ControlToken, DecodeEntities, EntityTable, is_process_elevated};

/// Layout direction. Decides which half of a [`crate::Cap`] is drawn, and on which side
/// of a segment's body the cap goes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Alignment {
    #[default]
    Left,
    Right,
}

/// State for one render pass, passed by `&mut` from [`crate::Prompt`] down to each
/// [`crate::Segment`].
///
/// - `alignment` starts [`Alignment::Left`] at each line and changes only on
///   [`ControlToken::RightAlign`] and [`ControlToken::NewLine`].
/// - `elevated` and `last_success` pick the override colors, see
///   [`crate::SegmentColors::resolve`].
#[derive(Debug)]
pub struct RenderContext {
    pub alignment: Alignment,
    pub elevated: bool,
    pub last_success: bool,
    pub entity_decoder: Box<dyn DecodeEntities>,
}

impl RenderContext {
    /// Elevation is probed from the running process.
    #[must_use]
    pub fn new(last_success: bool) -> Self {
        Self::new_with(is_process_elevated(), last_success)
    }

    #[must_use]
    pub fn new_with(elevated: bool, last_success: bool) -> Self {
        Self {
            alignment: Alignment::default(),
            elevated,
            last_success,
            entity_decoder: Box::new(EntityTable::default()),
        }
    }

    #[must_use]
    pub fn with_entity_decoder(mut self, decoder: impl DecodeEntities + 'static) -> Self {
        self.entity_decoder = Box::new(decoder);
        self
    }

    #[must_use]
    pub fn decode_entities(&self, input: &str) -> String {
        self.entity_decoder.decode_entities(input)
    }

    /// Alignment state machine. [`ControlToken::Spacer`] is not a transition.
    pub fn apply_token(&mut self, token: ControlToken) {
        match token {
            ControlToken::RightAlign => self.alignment = Alignment::Right,
            ControlToken::NewLine => self.alignment = Alignment::Left,
            ControlToken::Spacer => {}
        }
    }
}
