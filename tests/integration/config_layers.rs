use std::fs;

use tempfile::TempDir;
use termglow::art::HashAlgorithm;
use termglow::config::merge::service::MergeService;
use termglow::config::ConfigLoader;
use termglow::theme::{Styler, Theme};
use termglow::tooling::cli::{CliContext, Commands};

#[test]
fn explicit_file_drives_preview_defaults() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("termglow.toml");
    fs::write(
        &config_path,
        "theme = \"neon\"\n[preview]\nwidth = 5\nheight = 2\nalgorithm = \"sha256\"\n",
    )
    .unwrap();
    let config = ConfigLoader::load_from_file(&config_path).unwrap();
    assert_eq!(config.theme, Theme::Neon);
    assert_eq!(config.preview.algorithm, HashAlgorithm::Sha256);

    let image = temp.path().join("pic.png");
    fs::write(&image, b"pixels").unwrap();
    let cli = CliContext::new(config, Styler::plain(Theme::Neon), false);
    let output = cli
        .execute(&Commands::Image {
            path: image,
            width: None,
            height: None,
            algorithm: None,
            max_bytes: None,
        })
        .unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 1 + 2 + 1);
    assert_eq!(lines[1].chars().count(), 5);
}

#[test]
fn invalid_values_are_rejected() {
    let temp = TempDir::new().unwrap();
    let cases = [
        "[preview]\nwidth = 0\n",
        "[preview]\nmax_bytes = 0\n",
        "theme = \"sepia\"\n",
        "[preview]\nalgorithm = \"crc32\"\n",
    ];
    for (i, body) in cases.iter().enumerate() {
        let path = temp.path().join(format!("bad-{}.toml", i));
        fs::write(&path, body).unwrap();
        assert!(
            ConfigLoader::load_from_file(&path).is_err(),
            "expected rejection of {body:?}"
        );
    }
}

#[test]
fn environment_overrides_files() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("file.toml");
    fs::write(&path, "color = true\n[preview]\nheight = 7\n").unwrap();
    std::env::set_var("TERMGLOW_IT_LAYERS__PREVIEW__HEIGHT", "3");
    std::env::set_var("TERMGLOW_IT_LAYERS__COLOR", "false");

    let config = MergeService::load(None, Some(&path), "TERMGLOW_IT_LAYERS").unwrap();
    std::env::remove_var("TERMGLOW_IT_LAYERS__PREVIEW__HEIGHT");
    std::env::remove_var("TERMGLOW_IT_LAYERS__COLOR");

    assert_eq!(config.preview.height, 3);
    assert!(!config.color);
}
