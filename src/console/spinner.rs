//! Multi-phase loading spinner.

use super::animation::{spawn_animation, AnimationHandle};
use crate::theme::Styler;
use std::io::Write;
use std::time::Duration;

pub const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
pub const SPINNER_INTERVAL: Duration = Duration::from_millis(100);

/// What the spinner says and for how long.
///
/// Each phase is shown for `duration / phases.len()`; the last phase stays up
/// until the spinner is stopped. With no phases the `message` is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingPlan {
    pub message: String,
    pub phases: Vec<String>,
    pub duration: Duration,
    pub interval: Duration,
}

impl LoadingPlan {
    pub fn new(message: impl Into<String>, phases: Vec<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            phases,
            duration,
            interval: SPINNER_INTERVAL,
        }
    }

    /// Label shown at frame `tick`.
    pub fn phase_at(&self, tick: usize) -> &str {
        if self.phases.is_empty() {
            return &self.message;
        }
        let last = self.phases.len() - 1;
        let phase_time = self.duration.as_millis() / self.phases.len() as u128;
        let index = if phase_time == 0 {
            last
        } else {
            let elapsed = self.interval.as_millis() * tick as u128;
            ((elapsed / phase_time) as usize).min(last)
        };
        &self.phases[index]
    }

    /// Styled spinner line for frame `tick`.
    pub fn frame(&self, tick: usize, styler: &Styler) -> String {
        let spinner = SPINNER_FRAMES[tick % SPINNER_FRAMES.len()];
        styler.primary(&format!("{} {}...", spinner, self.phase_at(tick)))
    }
}

impl Default for LoadingPlan {
    fn default() -> Self {
        Self::new(
            "Loading",
            vec![
                "Loading".to_string(),
                "Processing".to_string(),
                "Done".to_string(),
            ],
            Duration::from_millis(3000),
        )
    }
}

/// Start the spinner; it runs until the handle is stopped.
pub fn start_loading<W>(out: W, plan: LoadingPlan, styler: Styler) -> AnimationHandle
where
    W: Write + Send + 'static,
{
    let interval = plan.interval;
    spawn_animation(out, interval, move |tick| plan.frame(tick, &styler))
}

/// Run the spinner for the plan's full duration. Returns the frame count.
pub fn run_loading<W>(out: W, plan: LoadingPlan, styler: Styler) -> usize
where
    W: Write + Send + 'static,
{
    let duration = plan.duration;
    start_loading(out, plan, styler).run_for(duration)
}
