// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The prompt `plp` renders when no definition file is given.
//!
//! ```text
//! ▌user@host▌~►src►r3bl▌⚡▌                                  ▐12:34:56▐
//! &gt;
//! ```

use crate::{AnsiBasicColor, Column, Content, Line, Prompt, Segment, SegmentFactory,
            SegmentSource, TermColor};
use miette::IntoDiagnostic;
use std::path::{Component, Path, PathBuf};

/// Only this many trailing directories of the working directory are shown.
pub const MAX_PATH_SEGMENTS: usize = 3;
pub const CLOCK_FORMAT: &str = "%H:%M:%S";

const fn basic(color: AnsiBasicColor) -> TermColor { TermColor::Basic(color) }

/// Two lines:
/// 1. Left: user@host (red when elevated), the working directory, the last command's
///    status (red when it failed). Right: the clock.
/// 2. An input marker, red when the last command failed.
#[must_use]
pub fn default_prompt() -> Prompt {
    let identity = Segment::new(Content::producer(|_| {
        Ok(Content::display(format!("{}@{}", user_name(), host_name())))
    }))
    .with_foreground(basic(AnsiBasicColor::White))
    .with_background(basic(AnsiBasicColor::DarkBlue))
    .with_elevated_background(basic(AnsiBasicColor::DarkRed));

    let working_directory = SegmentFactory::new(|_| {
        let current_dir = std::env::current_dir().into_diagnostic()?;
        let home = std::env::var_os("HOME").map(PathBuf::from);
        Ok(abbreviate_path(&current_dir, home.as_deref())
            .into_iter()
            .map(Segment::new)
            .collect())
    })
    .with_default_colors(
        Some(basic(AnsiBasicColor::White)),
        Some(basic(AnsiBasicColor::Blue)),
    );

    let status = Segment::new("&Power;")
        .with_foreground(basic(AnsiBasicColor::Black))
        .with_background(basic(AnsiBasicColor::DarkGreen))
        .with_error_foreground(basic(AnsiBasicColor::White))
        .with_error_background(basic(AnsiBasicColor::DarkRed));

    let clock = Segment::new(Content::producer(|_| {
        Ok(Content::display(chrono::Local::now().format(CLOCK_FORMAT)))
    }))
    .with_foreground(basic(AnsiBasicColor::Black))
    .with_background(basic(AnsiBasicColor::Gray));

    let input_marker = Segment::new("&gt;")
        .with_foreground(basic(AnsiBasicColor::Green))
        .with_error_foreground(basic(AnsiBasicColor::Red));

    Prompt::new(vec![
        Line::new(vec![
            Some(Column::new(vec![
                SegmentSource::from(identity),
                SegmentSource::from(working_directory),
                SegmentSource::from(status),
            ])),
            Some(Column::from(vec![clock])),
        ]),
        Line::from(Column::from(vec![input_marker])),
    ])
}

/// The last [`MAX_PATH_SEGMENTS`] parts of `path`, with `home` shown as `~`. A path
/// that is cut short starts with `…`.
#[must_use]
pub fn abbreviate_path(path: &Path, home: Option<&Path>) -> Vec<String> {
    let (mut parts, relative) = match home.and_then(|it| path.strip_prefix(it).ok()) {
        Some(relative) => (vec!["~".to_string()], relative),
        None => (vec![], path),
    };

    for component in relative.components() {
        match component {
            Component::RootDir => parts.push("/".to_string()),
            Component::Normal(it) => parts.push(it.to_string_lossy().into_owned()),
            Component::Prefix(it) => parts.push(it.as_os_str().to_string_lossy().into_owned()),
            Component::CurDir | Component::ParentDir => {}
        }
    }

    if parts.len() > MAX_PATH_SEGMENTS {
        let mut tail = parts.split_off(parts.len() - MAX_PATH_SEGMENTS);
        tail.insert(0, "\u{2026}".to_string());
        tail
    } else {
        parts
    }
}

fn user_name() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "user".to_string())
}

fn host_name() -> String {
    std::env::var("HOSTNAME")
        .ok()
        .or_else(|| {
            std::fs::read_to_string("/etc/hostname")
                .ok()
                .map(|it| it.trim().to_string())
        })
        .filter(|it| !it.is_empty())
        .unwrap_or_else(|| "localhost".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RenderContext, assert_eq2};
    use test_case::test_case;

    #[test_case("/home/nadia/src/r3bl", Some("/home/nadia"), &["~", "src", "r3bl"])]
    #[test_case("/home/nadia", Some("/home/nadia"), &["~"])]
    #[test_case("/usr/local/bin", Some("/home/nadia"), &["\u{2026}", "usr", "local", "bin"])]
    #[test_case("/tmp", None, &["/", "tmp"])]
    #[test_case("/home/nadia/a/b/c", Some("/home/nadia"), &["\u{2026}", "a", "b", "c"])]
    fn abbreviate(path: &str, home: Option<&str>, expected: &[&str]) {
        assert_eq2!(
            abbreviate_path(Path::new(path), home.map(Path::new)),
            expected.iter().map(ToString::to_string).collect::<Vec<_>>()
        );
    }

    #[test]
    fn renders_two_lines() {
        let mut ctx = RenderContext::new_with(false, true);
        let output = default_prompt().render(&mut ctx, 80, None).unwrap();

        assert!(output.contains('@'));
        assert!(output.contains("\x1b[42m\u{26a1}"));
        assert!(output.contains("\x1b[92m>"));
        assert_eq2!(output.matches('\n').count(), 1);
        assert!(output.ends_with("\x1b[u"));
    }

    #[test]
    fn failed_command_uses_error_colors() {
        let mut ctx = RenderContext::new_with(false, false);
        let output = default_prompt().render(&mut ctx, 80, None).unwrap();

        assert!(output.contains("\x1b[97m\x1b[41m\u{26a1}"));
        assert!(output.contains("\x1b[91m>"));
    }

    #[test]
    fn elevated_identity_is_red() {
        let mut ctx = RenderContext::new_with(true, true);
        let output = default_prompt().render(&mut ctx, 80, None).unwrap();
        assert!(output.starts_with("\x1b[97m\x1b[41m"));
    }
}
