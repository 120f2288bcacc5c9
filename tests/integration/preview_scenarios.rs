use std::fs;

use tempfile::TempDir;
use termglow::art::{load_preview, preview, GridSize, PreviewOptions};
use termglow::console::Console;
use termglow::theme::{Styler, Theme};

fn console() -> Console<Vec<u8>> {
    Console::new(Vec::new(), Styler::plain(Theme::Default))
}

#[test]
fn same_content_in_different_files_gives_same_art() {
    let temp = TempDir::new().unwrap();
    let a = temp.path().join("a.png");
    let b = temp.path().join("nested-b.jpg");
    fs::write(&a, b"identical bytes").unwrap();
    fs::write(&b, b"identical bytes").unwrap();

    let options = PreviewOptions::default();
    let art_a = load_preview(&a, &options).unwrap();
    let art_b = load_preview(&b, &options).unwrap();
    assert_eq!(art_a.digest, art_b.digest);
    assert_eq!(art_a.grid, art_b.grid);
}

#[test]
fn empty_file_previews_with_zero_size() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("empty.bin");
    fs::write(&path, b"").unwrap();

    let mut console = console();
    let art = preview(&path, &PreviewOptions::default(), &mut console).unwrap();
    assert_eq!(art.size_bytes, 0);
    let out = String::from_utf8(console.into_inner()).unwrap();
    assert!(out.contains("Size: 0.00 KB | Hash: "));
    assert_eq!(out.lines().count(), 1 + 20 + 1);
}

#[test]
fn grid_lines_match_requested_width() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("image.gif");
    fs::write(&path, vec![0xAB; 4096]).unwrap();
    let options = PreviewOptions {
        size: GridSize::new(12, 4).unwrap(),
        ..PreviewOptions::default()
    };

    let mut console = console();
    preview(&path, &options, &mut console).unwrap();
    let out = String::from_utf8(console.into_inner()).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert!(lines[0].contains("Size: 4.00 KB"));
    assert!(lines[1..5].iter().all(|l| l.chars().count() == 12));
}

#[test]
fn unreadable_path_reports_and_continues() {
    let temp = TempDir::new().unwrap();
    let mut console = console();
    assert!(preview(
        &temp.path().join("missing.png"),
        &PreviewOptions::default(),
        &mut console
    )
    .is_none());
    // The console stays usable after a failed preview.
    console.print("after");
    let out = String::from_utf8(console.into_inner()).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("✗ Preview failed: "));
    assert_eq!(lines[1], "after");
}
