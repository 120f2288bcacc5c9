//! Glyph and color palettes for hash art.

use crate::theme::NamedColor;

/// Glyphs ordered from solid to empty.
pub const GLYPH_PALETTE: GlyphPalette = GlyphPalette(&['█', '▓', '▒', '░', ' ']);

pub const COLOR_PALETTE: ColorPalette = ColorPalette(&[
    NamedColor::Red,
    NamedColor::Green,
    NamedColor::Yellow,
    NamedColor::Blue,
    NamedColor::Magenta,
    NamedColor::Cyan,
]);

/// Ordered glyph set indexed cyclically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphPalette(&'static [char]);

impl GlyphPalette {
    pub fn glyphs(&self) -> &'static [char] {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Glyph at `index` modulo the palette size.
    pub fn pick(&self, index: usize) -> char {
        self.0[index % self.0.len()]
    }

    pub fn contains(&self, glyph: char) -> bool {
        self.0.contains(&glyph)
    }
}

/// Ordered color set indexed cyclically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette(&'static [NamedColor]);

impl ColorPalette {
    pub fn colors(&self) -> &'static [NamedColor] {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Color at `index` modulo the palette size.
    pub fn pick(&self, index: usize) -> NamedColor {
        self.0[index % self.0.len()]
    }

    pub fn contains(&self, color: NamedColor) -> bool {
        self.0.contains(&color)
    }
}
