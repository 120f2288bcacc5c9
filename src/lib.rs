//! Termglow: Terminal Pretty-Printing and Hash-Derived ASCII Art
//!
//! Styled log lines, boxes, tables, progress bars, spinner and glow
//! animations, plus deterministic ASCII-art previews derived from a file's
//! content hash.

pub mod art;
pub mod config;
pub mod console;
pub mod error;
pub mod logging;
pub mod stats;
pub mod theme;
pub mod tooling;
