//! File Stats
//!
//! Size, modification date and digest prefix of a file, shown as a table.

use crate::art::digest::{compute_digest_with, HashAlgorithm};
use crate::art::preview::{format_kb, read_source, DIGEST_PREFIX_LEN};
use crate::console::{render_table, BorderStyle, Console, LogKind, TableOptions};
use crate::error::ReadError;
use crate::theme::Styler;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileStats {
    pub path: PathBuf,
    pub size_bytes: u64,
    /// `YYYY-MM-DD` in UTC; `None` when the platform has no mtime
    pub modified: Option<String>,
    pub digest_prefix: String,
}

impl FileStats {
    pub fn size_kb(&self) -> String {
        format_kb(self.size_bytes)
    }

    /// Property/value rows, header first.
    pub fn rows(&self) -> Vec<Vec<String>> {
        vec![
            vec!["Property".to_string(), "Value".to_string()],
            vec!["Size".to_string(), format!("{} KB", self.size_kb())],
            vec![
                "Modified".to_string(),
                self.modified.clone().unwrap_or_else(|| "-".to_string()),
            ],
            vec!["Hash".to_string(), self.digest_prefix.clone()],
        ]
    }
}

/// Collect stats for `path`.
pub fn file_stats(path: &Path, algorithm: HashAlgorithm) -> Result<FileStats, ReadError> {
    let metadata = std::fs::metadata(path).map_err(|e| ReadError::io(path, e))?;
    let (bytes, size_bytes) = read_source(path, None)?;
    let digest = compute_digest_with(algorithm, &bytes);
    let modified = metadata
        .modified()
        .ok()
        .map(|mtime| DateTime::<Utc>::from(mtime).format("%Y-%m-%d").to_string());
    Ok(FileStats {
        path: path.to_path_buf(),
        size_bytes,
        modified,
        digest_prefix: digest.prefix(DIGEST_PREFIX_LEN).to_string(),
    })
}

/// Stats as a double-bordered table.
pub fn render_stats(stats: &FileStats, styler: &Styler) -> String {
    let options = TableOptions {
        headers: true,
        border: BorderStyle::Double,
        color: None,
    };
    render_table(&stats.rows(), &options, styler).unwrap_or_default()
}

/// Print stats for `path`; a read failure is logged as one error line.
pub fn show_stats<W: Write>(
    path: &Path,
    algorithm: HashAlgorithm,
    console: &mut Console<W>,
) -> Option<FileStats> {
    match file_stats(path, algorithm) {
        Ok(stats) => {
            let table = render_stats(&stats, console.styler());
            console.print(&table);
            Some(stats)
        }
        Err(err) => {
            debug!(path = %path.display(), error = %err, "Stats failed");
            console.log(LogKind::Error, &format!("Stats failed: {}", err));
            None
        }
    }
}
