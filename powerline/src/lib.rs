// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_powerline
//!
//! Render a multi segment, color coded shell prompt from a declarative tree of text
//! segments.
//!
//! The composition tree, leaf first:
//!
//! | Type        | What it does                                                        |
//! |-------------|---------------------------------------------------------------------|
//! | [`Segment`] | Content, colors, cap, separator, flags. Owns a single slot cache.   |
//! | [`Column`]  | Segments joined by separators or color transition caps.             |
//! | [`Line`]    | Up to two columns per row, the second one anchored to the right.    |
//! | [`Prompt`]  | Lines plus a count of rows to move up, wrapped in cursor recall.    |
//!
//! Every render takes a `&mut` [`RenderContext`] which carries the current
//! [`Alignment`], whether the process is elevated, and whether the last command
//! succeeded. Nothing is kept in globals.
//!
//! ```
//! use r3bl_powerline::{Column, Line, RenderContext, Segment, TermColor,
//!                      AnsiBasicColor};
//!
//! let mut ctx = RenderContext::new(true);
//! let mut line = Line::new(vec![Some(Column::from(vec![
//!     Segment::new("user").with_background(TermColor::Basic(AnsiBasicColor::Blue)),
//!     Segment::new("~/src").with_background(TermColor::Basic(AnsiBasicColor::DarkBlue)),
//! ]))]);
//! let output = line.render(&mut ctx, 80, None).unwrap();
//! assert!(output.contains("user"));
//! ```
//!
//! Prompts can also be loaded from JSON, see [`try_parse_prompt`]. The `plp` binary
//! renders either a JSON definition or [`default_prompt`].

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod ansi;
pub mod cli;
pub mod color;
pub mod common;
pub mod definition;
pub mod env;
pub mod log;
pub mod preset;
pub mod render;

// Re-export.
pub use ansi::*;
pub use cli::*;
pub use color::*;
pub use common::*;
pub use definition::*;
pub use env::*;
pub use log::*;
pub use preset::*;
pub use render::*;
