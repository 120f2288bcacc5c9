//! Aligned tables rendered through comfy-table.

use super::BorderStyle;
use crate::theme::{NamedColor, Styler};
use comfy_table::Table;

/// Single-line borders, header separator only.
pub const SINGLE_PRESET: &str = "││──├─┼┤│    ┬┴┌┐└┘";
/// Double-line borders, header separator only.
pub const DOUBLE_PRESET: &str = "║║══╠═╬╣║    ╦╩╔╗╚╝";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Treat the first row as the header
    pub headers: bool,
    pub border: BorderStyle,
    /// `None` uses the theme's primary color
    pub color: Option<NamedColor>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            headers: true,
            border: BorderStyle::Single,
            color: None,
        }
    }
}

/// Render `rows` as a table. Returns `None` when there is nothing to show.
///
/// Short rows are padded with empty cells up to the widest row.
pub fn render_table<S: AsRef<str>>(
    rows: &[Vec<S>],
    options: &TableOptions,
    styler: &Styler,
) -> Option<String> {
    let columns = rows.iter().map(|r| r.len()).max().unwrap_or(0);
    if rows.is_empty() || columns == 0 {
        return None;
    }

    let pad = |row: &Vec<S>| -> Vec<String> {
        let mut cells: Vec<String> = row.iter().map(|c| c.as_ref().to_string()).collect();
        cells.resize(columns, String::new());
        cells
    };

    let mut table = Table::new();
    table.load_preset(match options.border {
        BorderStyle::Single => SINGLE_PRESET,
        BorderStyle::Double => DOUBLE_PRESET,
    });

    let mut body = rows.iter();
    if options.headers {
        if let Some(header) = body.next() {
            table.set_header(pad(header));
        }
    }
    for row in body {
        table.add_row(pad(row));
    }

    let rendered = table
        .to_string()
        .lines()
        .map(|line| match options.color {
            Some(color) => styler.paint(line, color),
            None => styler.primary(line),
        })
        .collect::<Vec<_>>()
        .join("\n");
    Some(rendered)
}
