//! Cancellable terminal animations
//!
//! An animation redraws one line on a background thread until its
//! [`AnimationHandle`] is stopped or dropped. Stopping clears the line, joins
//! the thread, and reports how many frames were drawn.

use parking_lot::RwLock;
use std::io::Write;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::debug;

/// Handle to a running animation.
pub struct AnimationHandle {
    running: Arc<RwLock<bool>>,
    thread: Option<JoinHandle<usize>>,
    frames: usize,
}

impl AnimationHandle {
    pub fn is_running(&self) -> bool {
        *self.running.read()
    }

    /// Stop the animation and return the number of frames drawn.
    ///
    /// Calling `stop` again returns the same count.
    pub fn stop(&mut self) -> usize {
        *self.running.write() = false;
        if let Some(handle) = self.thread.take() {
            handle.thread().unpark();
            match handle.join() {
                Ok(frames) => self.frames = frames,
                Err(_) => debug!("animation thread panicked"),
            }
        }
        self.frames
    }

    /// Let the animation run for `duration`, then stop it.
    pub fn run_for(mut self, duration: Duration) -> usize {
        thread::sleep(duration);
        self.stop()
    }
}

impl Drop for AnimationHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Draw `frame(tick)` to `out` every `interval` until stopped.
///
/// The first frame is drawn immediately. Each frame overwrites the previous one
/// with a carriage return; on stop the line is blanked.
pub fn spawn_animation<W, F>(mut out: W, interval: Duration, mut frame: F) -> AnimationHandle
where
    W: Write + Send + 'static,
    F: FnMut(usize) -> String + Send + 'static,
{
    let running = Arc::new(RwLock::new(true));
    let flag = Arc::clone(&running);

    let thread = thread::spawn(move || {
        let mut tick = 0usize;
        let mut widest = 0usize;
        while *flag.read() {
            let text = frame(tick);
            widest = widest.max(text.chars().count());
            if let Err(e) = write!(out, "\r{}", text).and_then(|_| out.flush()) {
                debug!(error = %e, "animation write failed");
                break;
            }
            tick += 1;
            thread::park_timeout(interval);
        }
        if let Err(e) = write!(out, "\r{}\r", " ".repeat(widest)).and_then(|_| out.flush()) {
            debug!(error = %e, "animation clear failed");
        }
        tick
    });

    AnimationHandle {
        running,
        thread: Some(thread),
        frames: 0,
    }
}
