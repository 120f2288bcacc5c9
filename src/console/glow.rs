//! Glowing text: a line that pulses through normal, bright and dim shades.

use super::animation::{spawn_animation, AnimationHandle};
use crate::theme::{Shade, Styler};
use owo_colors::AnsiColors;
use std::io::Write;
use std::time::Duration;

pub const GLOW_INTERVAL: Duration = Duration::from_millis(500);
pub const GLOW_SHADES: [Shade; 3] = [Shade::Normal, Shade::Bright, Shade::Dim];

/// `text` in the shade for frame `tick`.
pub fn glow_frame(text: &str, color: AnsiColors, tick: usize, styler: &Styler) -> String {
    styler.paint_shaded(text, color, GLOW_SHADES[tick % GLOW_SHADES.len()])
}

/// Pulse `text` until the handle is stopped.
pub fn start_glow<W>(
    out: W,
    text: String,
    color: AnsiColors,
    interval: Duration,
    styler: Styler,
) -> AnimationHandle
where
    W: Write + Send + 'static,
{
    spawn_animation(out, interval, move |tick| {
        glow_frame(&text, color, tick, &styler)
    })
}
