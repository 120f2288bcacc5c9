//! Themes
//!
//! A theme is an immutable value that resolves named colors to ANSI colors.
//! Every rendering call receives it through a [`Styler`]; nothing reads a
//! process-wide "current theme".

use crate::error::ApiError;
use owo_colors::{AnsiColors, OwoColorize, Style};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::IsTerminal;
use std::str::FromStr;

/// Color names shared by every theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
}

impl NamedColor {
    pub fn name(&self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::Red => "red",
            NamedColor::Green => "green",
            NamedColor::Yellow => "yellow",
            NamedColor::Blue => "blue",
            NamedColor::Magenta => "magenta",
            NamedColor::Cyan => "cyan",
            NamedColor::White => "white",
            NamedColor::Gray => "gray",
        }
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Built-in themes
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Default,
    /// Brighter magenta and cyan
    Neon,
    /// White rendered as gray
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Default, Theme::Neon, Theme::Dark];

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::Neon => "neon",
            Theme::Dark => "dark",
        }
    }

    /// Look up a theme by name (`default`, `neon`, `dark`).
    pub fn by_name(name: &str) -> Result<Theme, ApiError> {
        name.parse()
    }

    /// Resolve a named color under this theme.
    pub fn color(&self, color: NamedColor) -> AnsiColors {
        match (self, color) {
            (Theme::Neon, NamedColor::Magenta) => AnsiColors::BrightMagenta,
            (Theme::Neon, NamedColor::Cyan) => AnsiColors::BrightCyan,
            (Theme::Dark, NamedColor::White) => AnsiColors::BrightBlack,
            (_, NamedColor::Black) => AnsiColors::Black,
            (_, NamedColor::Red) => AnsiColors::Red,
            (_, NamedColor::Green) => AnsiColors::Green,
            (_, NamedColor::Yellow) => AnsiColors::Yellow,
            (_, NamedColor::Blue) => AnsiColors::Blue,
            (_, NamedColor::Magenta) => AnsiColors::Magenta,
            (_, NamedColor::Cyan) => AnsiColors::Cyan,
            (_, NamedColor::White) => AnsiColors::White,
            (_, NamedColor::Gray) => AnsiColors::BrightBlack,
        }
    }

    /// Main UI color (boxes, tables, spinners).
    pub fn primary(&self) -> AnsiColors {
        match self {
            Theme::Default => AnsiColors::Cyan,
            Theme::Neon => AnsiColors::BrightCyan,
            Theme::Dark => AnsiColors::BrightBlack,
        }
    }

    pub fn accent(&self) -> AnsiColors {
        match self {
            Theme::Default => AnsiColors::Magenta,
            Theme::Neon => AnsiColors::BrightMagenta,
            Theme::Dark => AnsiColors::White,
        }
    }
}

impl FromStr for Theme {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Theme::Default),
            "neon" => Ok(Theme::Neon),
            "dark" => Ok(Theme::Dark),
            other => Err(ApiError::ConfigError(format!(
                "Unknown theme: {} (must be 'default', 'neon', or 'dark')",
                other
            ))),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Brightness variant used by glow text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Normal,
    Bright,
    Dim,
}

/// Theme plus a color on/off switch. Paints strings for the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styler {
    theme: Theme,
    enabled: bool,
}

impl Styler {
    pub fn new(theme: Theme, enabled: bool) -> Self {
        Self { theme, enabled }
    }

    /// Styler that never emits escape sequences.
    pub fn plain(theme: Theme) -> Self {
        Self::new(theme, false)
    }

    /// Enable color only when requested, `NO_COLOR` is unset, and stdout is a TTY.
    pub fn detect(theme: Theme, want_color: bool) -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        let enabled = want_color && !no_color && std::io::stdout().is_terminal();
        Self::new(theme, enabled)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Paint with a theme-resolved named color.
    pub fn paint(&self, text: &str, color: NamedColor) -> String {
        self.paint_ansi(text, self.theme.color(color))
    }

    pub fn paint_ansi(&self, text: &str, color: AnsiColors) -> String {
        self.paint_shaded(text, color, Shade::Normal)
    }

    pub fn paint_shaded(&self, text: &str, color: AnsiColors, shade: Shade) -> String {
        if !self.enabled {
            return text.to_string();
        }
        let style = Style::new().color(color);
        let style = match shade {
            Shade::Normal => style,
            Shade::Bright => style.bold(),
            Shade::Dim => style.dimmed(),
        };
        format!("{}", text.style(style))
    }

    pub fn primary(&self, text: &str) -> String {
        self.paint_ansi(text, self.theme.primary())
    }

    pub fn accent(&self, text: &str) -> String {
        self.paint_ansi(text, self.theme.accent())
    }

    pub fn heading(&self, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        format!("{}", text.bold().underline())
    }
}

impl Default for Styler {
    fn default() -> Self {
        Self::plain(Theme::Default)
    }
}
