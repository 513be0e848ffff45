// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser};
use std::path::PathBuf;

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "plp")]
#[command(about = "Render a powerline style shell prompt")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(false))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version}\n\nUSAGE:\n  plp [\x1b[34moptions\x1b[0m]\n\n[options]\n{options}"
)]
pub struct CLIArg {
    #[arg(
        long,
        short = 'w',
        help = "Terminal width in columns. Detected from the terminal if not given."
    )]
    pub width: Option<u16>,

    #[arg(
        long,
        short = 'e',
        default_value_t = 0,
        allow_negative_numbers = true,
        help = "Exit code of the last command. Anything other than 0 renders error colors."
    )]
    pub last_exit_code: i32,

    #[arg(
        long,
        short = 'p',
        allow_negative_numbers = true,
        help = "Rows to move the cursor up before drawing. Overrides the definition file."
    )]
    pub prefix_lines: Option<i32>,

    #[arg(
        long,
        short = 'c',
        help = "JSON prompt definition. The built in prompt is used if not given."
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        short = 'k',
        help = "Cache key for this render. Segments are only evaluated once per key."
    )]
    pub cache_key: Option<String>,

    #[arg(long, help = "Use powerline font glyphs for caps and separators.")]
    pub powerline: bool,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging."
    )]
    pub enable_logging: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn defaults() {
        let args = CLIArg::try_parse_from(["plp"]).unwrap();
        assert_eq2!(args.width, None);
        assert_eq2!(args.last_exit_code, 0);
        assert_eq2!(args.prefix_lines, None);
        assert!(!args.powerline);
        assert!(!args.global_options.enable_logging);
    }

    #[test]
    fn all_flags() {
        let args = CLIArg::try_parse_from([
            "plp",
            "--width",
            "120",
            "--last-exit-code",
            "-1",
            "--prefix-lines",
            "-2",
            "--config",
            "prompt.json",
            "--cache-key",
            "42",
            "--powerline",
            "-l",
        ])
        .unwrap();
        assert_eq2!(args.width, Some(120));
        assert_eq2!(args.last_exit_code, -1);
        assert_eq2!(args.prefix_lines, Some(-2));
        assert_eq2!(args.config, Some(PathBuf::from("prompt.json")));
        assert_eq2!(args.cache_key.as_deref(), Some("42"));
        assert!(args.powerline);
        assert!(args.global_options.enable_logging);
    }
}
