// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Layout and rendering, leaf first: [`Cap`], [`Segment`], [`Column`], [`Line`],
//! [`Prompt`]. All of them render against a `&mut` [`RenderContext`].

// Attach sources.
pub mod cache_key;
pub mod cap;
pub mod column;
pub mod content;
pub mod entities;
pub mod glyphs;
pub mod line;
pub mod paint;
pub mod prompt;
pub mod render_context;
pub mod segment;
pub mod segment_factory;

// Re-export.
pub use cache_key::*;
pub use cap::*;
pub use column::*;
pub use content::*;
pub use entities::*;
pub use glyphs::*;
pub use line::*;
pub use paint::*;
pub use prompt::*;
pub use render_context::*;
pub use segment::*;
pub use segment_factory::*;

/// Flip this on to trace every segment evaluation and cache hit.
pub const DEBUG_POWERLINE_RENDER: bool = false;
