//! Styled log lines (success, error, warning, info).

use crate::theme::{NamedColor, Styler};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    Success,
    Error,
    Warning,
    Info,
    /// No prefix, white text
    Plain,
}

impl LogKind {
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            LogKind::Success => Some("✓"),
            LogKind::Error => Some("✗"),
            LogKind::Warning => Some("⚠"),
            LogKind::Info => Some("ℹ"),
            LogKind::Plain => None,
        }
    }

    pub fn color(&self) -> NamedColor {
        match self {
            LogKind::Success => NamedColor::Green,
            LogKind::Error => NamedColor::Red,
            LogKind::Warning => NamedColor::Yellow,
            LogKind::Info => NamedColor::Blue,
            LogKind::Plain => NamedColor::White,
        }
    }
}

/// Format `message` as a single log line for `kind`, without a trailing newline.
pub fn format_log_line(kind: LogKind, message: &str, styler: &Styler) -> String {
    let color = kind.color();
    match kind.symbol() {
        Some(symbol) => format!(
            "{} {}",
            styler.paint(symbol, color),
            styler.paint(message, color)
        ),
        None => styler.paint(message, color),
    }
}
