//! Console Output
//!
//! Styled formatting passes over caller data: log lines, boxes, tables,
//! progress bars, spinner and glow animations, and prompts. Formatters are
//! pure functions returning strings; [`Console`] writes them out.

pub mod animation;
pub mod boxed;
pub mod glow;
pub mod log;
pub mod progress;
pub mod prompt;
pub mod spinner;
pub mod table;

use crate::theme::Styler;
use serde::{Deserialize, Serialize};
use std::io::Write;
use tracing::debug;

pub use animation::{spawn_animation, AnimationHandle};
pub use boxed::{render_box, BoxOptions};
pub use glow::{glow_frame, start_glow, GLOW_INTERVAL};
pub use log::{format_log_line, LogKind};
pub use progress::{render_progress, ProgressOptions, Signal};
pub use prompt::{confirm, confirm_from, input, input_from, interpret_yes_no};
pub use spinner::{run_loading, start_loading, LoadingPlan, SPINNER_FRAMES};
pub use table::{render_table, TableOptions};

/// Border drawing style shared by boxes and tables.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    Single,
    #[default]
    Double,
}

/// Output sink paired with a [`Styler`].
///
/// Write failures (closed pipe, full disk) are not fatal for a pretty-printer;
/// they are reported at debug level and otherwise ignored.
pub struct Console<W: Write> {
    out: W,
    styler: Styler,
}

impl Console<std::io::Stdout> {
    pub fn stdout(styler: Styler) -> Self {
        Self::new(std::io::stdout(), styler)
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, styler: Styler) -> Self {
        Self { out, styler }
    }

    pub fn styler(&self) -> &Styler {
        &self.styler
    }

    /// Write one styled log line.
    pub fn log(&mut self, kind: LogKind, message: &str) {
        let line = format_log_line(kind, message, &self.styler);
        self.print(&line);
    }

    /// Write `text` followed by a newline.
    pub fn print(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text).and_then(|_| self.out.flush()) {
            debug!(error = %e, "console write failed");
        }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
