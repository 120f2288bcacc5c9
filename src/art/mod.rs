//! Hash Art
//!
//! Deterministic ASCII-art previews. A file's content digest is the only
//! entropy source: the same bytes and grid size always yield the same art.

pub mod digest;
pub mod grid;
pub mod palette;
pub mod preview;

pub use digest::{compute_digest, compute_digest_with, Digest, HashAlgorithm};
pub use grid::{render_grid, ArtGrid, Cell, GridSize};
pub use palette::{ColorPalette, GlyphPalette, COLOR_PALETTE, GLYPH_PALETTE};
pub use preview::{load_preview, preview, PreviewOptions, RenderedArt};
