// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Type alias to make it easy to work with [`Result`]s.
/// - It is basically `miette::Result<T, miette::Report>`.
/// - Works hand in hand w/ [`crate::DefinitionError`] and any error that a content
///   producer returns.
///
/// # Example
///
/// ```
/// use r3bl_powerline::{CommonResult, Content, RenderContext};
///
/// fn git_branch(_ctx: &RenderContext) -> CommonResult<Content> {
///     Ok(Content::from("main"))
/// }
/// ```
pub type CommonResult<T> = miette::Result<T>;
