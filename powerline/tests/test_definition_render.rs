// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use pretty_assertions::assert_eq;
use r3bl_powerline::{DefinitionError, RenderContext, try_parse_prompt_str};

const TWO_COLUMNS: &str = r#"{
    "prefix_lines": 1,
    "glyphs": { "separator": ["<", ">"], "color_separator": ["[", "]"] },
    "lines": [
        [
            [ { "bg": "Red", "text": "A" }, { "background_color": "Red", "content": "B" } ],
            [ { "BG": "Blue", "object": "C" } ]
        ]
    ]
}"#;

#[test]
fn two_columns_with_custom_glyphs() {
    let mut prompt = try_parse_prompt_str(TWO_COLUMNS).unwrap();
    let mut ctx = RenderContext::new_with(false, true);

    let output = prompt.render(&mut ctx, 20, None).unwrap();
    let expected = [
        "\x1b[1A",
        // Left column, same backgrounds joined by the separator.
        "\x1b[101mA\x1b[0m>\x1b[101mB\x1b[0m\x1b[49m\x1b[39m",
        "\x1b[91m]\x1b[0m",
        "\x1b[s",
        // Right column, one cell wide, anchored to column 19.
        "\x1b[19G",
        "\x1b[94m[\x1b[0m",
        "\x1b[104mC\x1b[0m\x1b[49m\x1b[39m",
        "\x1b[0m",
        "\x1b[u",
    ]
    .concat();
    assert_eq!(output, expected);
}

#[test]
fn error_and_elevated_overrides() {
    let definition = r#"[[[
        { "bg": "Blue", "ebg": "Red", "abg": "Green", "text": "x" }
    ]]]"#;

    let render = |elevated, last_success| {
        let mut prompt = try_parse_prompt_str(definition).unwrap();
        let mut ctx = RenderContext::new_with(elevated, last_success);
        prompt.render(&mut ctx, 80, None).unwrap()
    };

    assert!(render(false, true).starts_with("\x1b[104mx"));
    assert!(render(false, false).starts_with("\x1b[101mx"));
    assert!(render(true, false).starts_with("\x1b[102mx"));
}

#[test]
fn nested_content_and_entities() {
    let definition = r##"[[[
        { "text": ["&Branch;", { "fg": "#ff8000", "text": "main" }], "separator": "|" }
    ]]]"##;
    let mut prompt = try_parse_prompt_str(definition).unwrap();
    let mut ctx = RenderContext::new_with(false, true);

    let output = prompt.render(&mut ctx, 80, None).unwrap();
    assert!(output.starts_with("\u{e0a0}|\x1b[38;2;255;128;0mmain\x1b[0m\x1b[0m"));
}

#[test]
fn invalid_definitions_are_diagnostics() {
    let report = try_parse_prompt_str(r#"[[[ { "fg": "Red", "shadow": true } ]]]"#).unwrap_err();
    assert!(matches!(
        report.downcast_ref::<DefinitionError>(),
        Some(DefinitionError::UnknownKey { key, .. }) if key == "shadow"
    ));

    let report = try_parse_prompt_str(r##"[[[ { "bg": "#12345" } ]]]"##).unwrap_err();
    assert!(matches!(
        report.downcast_ref::<DefinitionError>(),
        Some(DefinitionError::InvalidColor { value }) if value == "#12345"
    ));
}
