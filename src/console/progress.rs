//! Single-line progress bars.

use crate::theme::{NamedColor, Styler};
use serde::{Deserialize, Serialize};

/// Number of cells in a progress bar.
pub const BAR_CELLS: usize = 20;

/// Leading status symbol of a progress line.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    /// ▶
    #[default]
    Play,
    /// ⏹
    Stop,
    /// 🔄
    Cycle,
    /// 📊
    Chart,
    /// ⭐
    Star,
    /// ✅
    Done,
}

impl Signal {
    pub fn symbol(&self) -> &'static str {
        match self {
            Signal::Play => "▶",
            Signal::Stop => "⏹",
            Signal::Cycle => "🔄",
            Signal::Chart => "📊",
            Signal::Star => "⭐",
            Signal::Done => "✅",
        }
    }

    fn line_color(&self) -> NamedColor {
        match self {
            Signal::Chart => NamedColor::Yellow,
            _ => NamedColor::Cyan,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressOptions {
    pub message: String,
    pub signal: Signal,
}

/// Percentage of `current` over `total`; 0 when `total` is 0.
pub fn percent(current: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    current as f64 / total as f64 * 100.0
}

/// Filled cells for `pct`, clamped to the bar length.
pub fn filled_cells(pct: f64) -> usize {
    let filled = (BAR_CELLS as f64 * pct / 100.0).round();
    filled.clamp(0.0, BAR_CELLS as f64) as usize
}

/// `<signal> [<bar>] <pct>% <message>`
pub fn render_progress(current: u64, total: u64, options: &ProgressOptions, styler: &Styler) -> String {
    let pct = percent(current, total);
    let filled = filled_cells(pct);
    let color = options.signal.line_color();

    let mut bar = String::new();
    for _ in 0..filled {
        bar.push_str(&styler.paint("█", NamedColor::Green));
    }
    for _ in filled..BAR_CELLS {
        bar.push_str(&styler.paint("░", NamedColor::Gray));
    }

    let tail = format!("] {:.1}% {}", pct, options.message);
    format!(
        "{}{}{}",
        styler.paint(&format!("{} [", options.signal.symbol()), color),
        bar,
        styler.paint(tail.trim_end(), color)
    )
}
