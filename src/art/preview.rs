//! Image preview orchestration: read, digest, render, report.

use super::digest::{compute_digest_with, Digest, HashAlgorithm};
use super::grid::{render_grid, ArtGrid, GridSize};
use crate::console::{Console, LogKind};
use crate::error::ReadError;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Hex characters of the digest shown in stats.
pub const DIGEST_PREFIX_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PreviewOptions {
    pub size: GridSize,
    pub algorithm: HashAlgorithm,
    /// Hash only this many leading bytes; `None` reads the whole file
    pub max_bytes: Option<u64>,
}

/// Result of one preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArt {
    pub path: PathBuf,
    /// File size on disk
    pub size_bytes: u64,
    pub digest: Digest,
    pub grid: ArtGrid,
}

impl RenderedArt {
    /// Size in KiB with two decimals.
    pub fn size_kb(&self) -> String {
        format_kb(self.size_bytes)
    }

    pub fn digest_prefix(&self) -> &str {
        self.digest.prefix(DIGEST_PREFIX_LEN)
    }

    /// `Size: <kb> KB | Hash: <prefix>...`
    pub fn stats_line(&self) -> String {
        format!("Size: {} KB | Hash: {}...", self.size_kb(), self.digest_prefix())
    }
}

pub(crate) fn format_kb(bytes: u64) -> String {
    format!("{:.2}", bytes as f64 / 1024.0)
}

/// Read the file's bytes (up to `max_bytes`) and its size on disk.
pub(crate) fn read_source(path: &Path, max_bytes: Option<u64>) -> Result<(Vec<u8>, u64), ReadError> {
    let file = File::open(path).map_err(|e| ReadError::io(path, e))?;
    let size = file.metadata().map_err(|e| ReadError::io(path, e))?.len();
    let mut bytes = Vec::new();
    match max_bytes {
        Some(limit) => file.take(limit).read_to_end(&mut bytes),
        None => (&file).read_to_end(&mut bytes),
    }
    .map_err(|e| ReadError::io(path, e))?;
    Ok((bytes, size))
}

/// Read `path` and derive its art without printing anything.
pub fn load_preview(path: &Path, options: &PreviewOptions) -> Result<RenderedArt, ReadError> {
    let (bytes, size_bytes) = read_source(path, options.max_bytes)?;
    let digest = compute_digest_with(options.algorithm, &bytes);
    debug!(
        path = %path.display(),
        bytes_hashed = bytes.len(),
        algorithm = options.algorithm.name(),
        digest = %digest,
        "Computed preview digest"
    );
    let grid = render_grid(&digest, options.size);
    Ok(RenderedArt {
        path: path.to_path_buf(),
        size_bytes,
        digest,
        grid,
    })
}

/// Preview `path` on `console`.
///
/// A read failure is reported as one error line and `None` is returned; it is
/// never propagated. The matching diagnostic event is debug level so the
/// default `warn` filter prints nothing beside the console line.
pub fn preview<W: Write>(
    path: &Path,
    options: &PreviewOptions,
    console: &mut Console<W>,
) -> Option<RenderedArt> {
    let art = match load_preview(path, options) {
        Ok(art) => art,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "Preview failed");
            console.log(LogKind::Error, &format!("Preview failed: {}", err));
            return None;
        }
    };

    console.log(
        LogKind::Info,
        &format!("🖼️ Previewing: {} | {}", path.display(), art.stats_line()),
    );
    let lines = art.grid.render_lines(console.styler());
    for line in &lines {
        console.print(line);
    }
    console.log(LogKind::Info, "(Procedural ASCII art - unique per file)");
    Some(art)
}
