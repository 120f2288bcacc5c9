use std::process::Command;

use tempfile::TempDir;

/// Run the binary with an isolated config home and no logging overrides.
fn termglow(temp: &TempDir, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_termglow"))
        .args(args)
        .env("XDG_CONFIG_HOME", temp.path())
        .env("HOME", temp.path())
        .env_remove("TERMGLOW_LOG")
        .env_remove("TERMGLOW_LOG_FORMAT")
        .env_remove("TERMGLOW_LOG_OUTPUT")
        .env_remove("TERMGLOW_LOG_FILE")
        .env_remove("TERMGLOW_LOG_MODULES")
        .output()
        .unwrap()
}

#[test]
fn failed_preview_prints_one_line_and_nothing_on_stderr() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("missing.png");
    let output = termglow(&temp, &["image", missing.to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("✗ Preview failed: "));
    assert!(
        output.stderr.is_empty(),
        "unexpected stderr: {:?}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn failed_stats_prints_nothing_on_stderr() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("missing.png");
    let output = termglow(&temp, &["stats", missing.to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("✗ Stats failed: "));
    assert!(output.stderr.is_empty());
}

#[test]
fn md5_preview_matches_legacy_hash_prefix() {
    let temp = TempDir::new().unwrap();
    let empty = temp.path().join("empty.png");
    std::fs::write(&empty, b"").unwrap();
    let output = termglow(
        &temp,
        &[
            "image",
            empty.to_str().unwrap(),
            "--algorithm",
            "md5",
            "--width",
            "2",
            "--height",
            "1",
        ],
    );

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Size: 0.00 KB | Hash: d41d8cd9..."));
    assert!(stdout.lines().nth(1).unwrap().starts_with("░ "));
}
