//! Grid derivation: digest characters to (glyph, color) cells.

use super::digest::Digest;
use super::palette::{COLOR_PALETTE, GLYPH_PALETTE};
use crate::error::ApiError;
use crate::theme::{NamedColor, Styler};
use serde::{Deserialize, Serialize};

pub const DEFAULT_WIDTH: usize = 40;
pub const DEFAULT_HEIGHT: usize = 20;
/// Largest grid accepted, in cells.
pub const MAX_CELLS: usize = 1_000_000;

/// Grid dimensions; both sides are at least 1 and the area is at most
/// [`MAX_CELLS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGridSize")]
pub struct GridSize {
    width: usize,
    height: usize,
}

#[derive(Deserialize)]
struct RawGridSize {
    width: usize,
    height: usize,
}

impl TryFrom<RawGridSize> for GridSize {
    type Error = ApiError;

    fn try_from(raw: RawGridSize) -> Result<Self, Self::Error> {
        GridSize::new(raw.width, raw.height)
    }
}

impl GridSize {
    pub fn new(width: usize, height: usize) -> Result<Self, ApiError> {
        if width == 0 || height == 0 {
            return Err(ApiError::InvalidArgument(format!(
                "Grid size must be at least 1x1, got {}x{}",
                width, height
            )));
        }
        match width.checked_mul(height) {
            Some(cells) if cells <= MAX_CELLS => Ok(Self { width, height }),
            _ => Err(ApiError::InvalidArgument(format!(
                "Grid size {}x{} exceeds {} cells",
                width, height, MAX_CELLS
            ))),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// One art "pixel".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub glyph: char,
    pub color: NamedColor,
}

/// Row-major grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtGrid {
    size: GridSize,
    cells: Vec<Cell>,
}

impl ArtGrid {
    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn width(&self) -> usize {
        self.size.width
    }

    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Cell at column `x`, row `y`.
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        self.cells.get(y * self.size.width + x)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.width)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Glyphs only, one line per row, no trailing newline.
    pub fn to_plain_string(&self) -> String {
        self.rows()
            .map(|row| row.iter().map(|c| c.glyph).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// One line per row with every glyph painted in its cell color.
    pub fn render_lines(&self, styler: &Styler) -> Vec<String> {
        self.rows()
            .map(|row| {
                let mut line = String::new();
                let mut buf = [0u8; 4];
                for cell in row {
                    line.push_str(&styler.paint(cell.glyph.encode_utf8(&mut buf), cell.color));
                }
                line
            })
            .collect()
    }
}

/// Derive the art grid for `digest`.
///
/// Cell (x, y) takes its glyph from the digest character at
/// `(y * width + x) mod len` and its color from the character one position
/// further along, with the same wrap at the end of the digest.
pub fn render_grid(digest: &Digest, size: GridSize) -> ArtGrid {
    let mut cells = Vec::with_capacity(size.cell_count());
    for y in 0..size.height {
        for x in 0..size.width {
            let position = y * size.width + x;
            let glyph = GLYPH_PALETTE.pick(digest.nibble(position) as usize);
            let color = COLOR_PALETTE.pick(digest.nibble(position + 1) as usize);
            cells.push(Cell { glyph, color });
        }
    }
    ArtGrid { size, cells }
}
