//! Bordered text boxes.

use super::BorderStyle;
use crate::theme::{NamedColor, Styler};

/// Minimum outer width of a box, borders included.
pub const MIN_BOX_WIDTH: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxOptions {
    /// Blank columns on each side and blank rows above and below the text
    pub padding: usize,
    pub border: BorderStyle,
    /// Border and text color; `None` uses the theme's primary color
    pub color: Option<NamedColor>,
}

impl Default for BoxOptions {
    fn default() -> Self {
        Self {
            padding: 1,
            border: BorderStyle::Double,
            color: None,
        }
    }
}

struct BoxChars {
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    horizontal: char,
    vertical: char,
}

fn box_chars(border: BorderStyle) -> BoxChars {
    match border {
        BorderStyle::Double => BoxChars {
            top_left: '╔',
            top_right: '╗',
            bottom_left: '╚',
            bottom_right: '╝',
            horizontal: '═',
            vertical: '║',
        },
        BorderStyle::Single => BoxChars {
            top_left: '┌',
            top_right: '┐',
            bottom_left: '└',
            bottom_right: '┘',
            horizontal: '─',
            vertical: '│',
        },
    }
}

/// Draw `text` (split on newlines) inside a border. Lines are joined with `\n`.
pub fn render_box(text: &str, options: &BoxOptions, styler: &Styler) -> String {
    let chars = box_chars(options.border);
    let lines: Vec<&str> = text.split('\n').collect();
    let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let inner = (longest + 2 * options.padding).max(MIN_BOX_WIDTH - 2);
    let paint = |s: &str| match options.color {
        Some(color) => styler.paint(s, color),
        None => styler.primary(s),
    };

    let horizontal: String = std::iter::repeat(chars.horizontal).take(inner).collect();
    let blank = format!("{}{}{}", chars.vertical, " ".repeat(inner), chars.vertical);

    let mut out = Vec::with_capacity(lines.len() + 2 * options.padding + 2);
    out.push(paint(&format!(
        "{}{}{}",
        chars.top_left, horizontal, chars.top_right
    )));
    for _ in 0..options.padding {
        out.push(paint(&blank));
    }
    for line in &lines {
        let fill = inner - options.padding - line.chars().count();
        out.push(paint(&format!(
            "{}{}{}{}{}",
            chars.vertical,
            " ".repeat(options.padding),
            line,
            " ".repeat(fill),
            chars.vertical
        )));
    }
    for _ in 0..options.padding {
        out.push(paint(&blank));
    }
    out.push(paint(&format!(
        "{}{}{}",
        chars.bottom_left, horizontal, chars.bottom_right
    )));
    out.join("\n")
}
