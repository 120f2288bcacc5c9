use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use termglow::config::TermglowConfig;
use termglow::console::{BorderStyle, Signal};
use termglow::theme::{Styler, Theme};
use termglow::tooling::cli::{CliContext, Commands};

fn context() -> CliContext {
    CliContext::new(TermglowConfig::default(), Styler::plain(Theme::Default), false)
}

#[test]
fn box_lines_have_equal_width() {
    let output = context()
        .execute(&Commands::Boxed {
            text: vec!["Hello".to_string(), "termglow".to_string()],
            padding: 2,
            border: BorderStyle::Double,
        })
        .unwrap();
    let lines: Vec<&str> = output.lines().collect();
    // border, two padding rows, text, two padding rows, border
    assert_eq!(lines.len(), 7);
    assert!(lines[0].starts_with('╔'));
    assert!(lines[3].starts_with("║  Hello termglow"));
    let width = lines[0].chars().count();
    assert!(lines.iter().all(|l| l.chars().count() == width));
}

#[test]
fn table_from_json_renders_cells() {
    let output = context()
        .execute(&Commands::Table {
            json: Some(r#"[["Name","Deps"],["termglow",0]]"#.to_string()),
            no_headers: false,
            border: BorderStyle::Single,
        })
        .unwrap();
    assert!(output.starts_with('┌'));
    assert!(output.contains("Name"));
    assert!(output.contains("termglow"));
    assert!(output.contains('0'));
}

#[test]
fn table_rejects_invalid_json() {
    let result = context().execute(&Commands::Table {
        json: Some("not json".to_string()),
        no_headers: false,
        border: BorderStyle::Single,
    });
    assert!(result.is_err());
}

#[test]
fn example_table_is_shown_without_json() {
    let output = context()
        .execute(&Commands::Table {
            json: None,
            no_headers: false,
            border: BorderStyle::Double,
        })
        .unwrap();
    assert!(output.contains("Header1"));
    assert!(output.contains("Row1 Col2"));
}

#[test]
fn progress_runs_zero_to_hundred() {
    let output = context()
        .execute(&Commands::Progress {
            signal: Signal::Cycle,
            message: "CLI Progress".to_string(),
            step: 20,
        })
        .unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].contains("0.0%"));
    assert!(lines[5].contains("[████████████████████] 100.0% CLI Progress"));
}

#[test]
fn glow_without_terminal_prints_text_once() {
    let output = context()
        .execute(&Commands::Glow {
            text: Vec::new(),
            cycles: 3,
        })
        .unwrap();
    assert_eq!(output, "CLI Glow Text");
}

#[test]
fn image_preview_and_stats_share_hash_prefix() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("logo.png");
    fs::write(&path, vec![1u8; 1024]).unwrap();
    let cli = context();

    let image = cli
        .execute(&Commands::Image {
            path: path.clone(),
            width: Some(8),
            height: Some(2),
            algorithm: None,
            max_bytes: None,
        })
        .unwrap();
    let stats = cli
        .execute(&Commands::Stats {
            path,
            algorithm: None,
        })
        .unwrap();

    let hash_start = image.find("Hash: ").unwrap() + "Hash: ".len();
    let prefix = &image[hash_start..hash_start + 8];
    assert!(image.contains("Size: 1.00 KB"));
    assert_eq!(image.lines().count(), 1 + 2 + 1);
    assert!(stats.contains(prefix));
    assert!(stats.contains("1.00 KB"));
}

#[test]
fn image_of_missing_file_is_not_a_command_error() {
    let output = context()
        .execute(&Commands::Image {
            path: PathBuf::from("/definitely/not/here.png"),
            width: None,
            height: None,
            algorithm: None,
            max_bytes: None,
        })
        .unwrap();
    assert!(output.starts_with("✗ Preview failed: "));
    assert_eq!(output.lines().count(), 1);
}

#[test]
fn config_prints_effective_toml() {
    let output = context().execute(&Commands::Config).unwrap();
    let parsed: TermglowConfig = toml::from_str(&output).unwrap();
    assert_eq!(parsed, TermglowConfig::default());
}
