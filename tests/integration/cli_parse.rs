use clap::{CommandFactory, Parser};
use termglow::console::{BorderStyle, Signal};
use termglow::theme::Theme;
use termglow::tooling::cli::{Cli, Commands};

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["termglow", "box", "Hello", "world"],
        vec!["termglow", "box", "--padding", "3", "--border", "single", "x"],
        vec!["termglow", "table"],
        vec!["termglow", "table", "--json", r#"[["a","b"]]"#, "--no-headers"],
        vec!["termglow", "loading", "One", "Two", "--duration-ms", "100"],
        vec!["termglow", "progress", "--signal", "chart", "--step", "10"],
        vec!["termglow", "glow", "shine", "--cycles", "1"],
        vec!["termglow", "glow", "--cycles", "4294967295"],
        vec!["termglow", "theme"],
        vec!["termglow", "theme", "dark"],
        vec!["termglow", "image", "photo.png", "--width", "10", "--height", "5"],
        vec!["termglow", "image", "photo.png", "--algorithm", "sha256", "--max-bytes", "64"],
        vec!["termglow", "stats", "photo.png"],
        vec!["termglow", "stats", "photo.png", "--algorithm", "md5"],
        vec!["termglow", "ask", "Deploy", "now?"],
        vec!["termglow", "ask", "Name?", "--text"],
        vec!["termglow", "config"],
        vec!["termglow", "--no-color", "--theme", "neon", "box"],
        vec!["termglow", "box", "--log-level", "debug", "--log-format", "json"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_rejects_invalid_values() {
    let invalid: Vec<Vec<&str>> = vec![
        vec!["termglow"],
        vec!["termglow", "theme", "sepia"],
        vec!["termglow", "box", "--border", "rounded"],
        vec!["termglow", "progress", "--step", "0"],
        vec!["termglow", "progress", "--step", "101"],
        vec!["termglow", "progress", "--signal", "bell"],
        vec!["termglow", "image"],
        vec!["termglow", "image", "x", "--algorithm", "crc32"],
        vec!["termglow", "glow", "--cycles", "4294967296"],
        vec!["termglow", "glow", "--cycles", "-1"],
        vec!["termglow", "stats"],
    ];

    for args in invalid {
        assert!(
            Cli::try_parse_from(args.clone()).is_err(),
            "expected parse failure for args: {args:?}"
        );
    }
}

#[test]
fn parse_defaults() {
    let cli = Cli::try_parse_from(["termglow", "box"]).unwrap();
    match cli.command {
        Commands::Boxed {
            text,
            padding,
            border,
        } => {
            assert!(text.is_empty());
            assert_eq!(padding, 1);
            assert_eq!(border, BorderStyle::Double);
        }
        _ => panic!("expected box command"),
    }

    let cli = Cli::try_parse_from(["termglow", "progress"]).unwrap();
    match cli.command {
        Commands::Progress {
            signal,
            message,
            step,
        } => {
            assert_eq!(signal, Signal::Cycle);
            assert_eq!(message, "CLI Progress");
            assert_eq!(step, 20);
        }
        _ => panic!("expected progress command"),
    }
}

#[test]
fn global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["termglow", "config", "--theme", "dark", "--no-color"]).unwrap();
    assert_eq!(cli.theme, Some(Theme::Dark));
    assert!(cli.no_color);
}

#[test]
fn command_definition_is_consistent() {
    Cli::command().debug_assert();
}
