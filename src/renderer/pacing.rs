//! Wall-clock frame pacing
//!
//! Only throttles presentation; the simulation itself has no notion of time.

use std::time::{Duration, Instant};

/// Keeps frames at most `target_fps` per second
#[derive(Debug, Clone)]
pub struct FramePacer {
    frame_duration: Duration,
    last_frame: Option<Instant>,
}

impl FramePacer {
    pub fn new(target_fps: u32) -> Self {
        let fps = target_fps.max(1);
        Self {
            frame_duration: Duration::from_secs(1) / fps,
            last_frame: None,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// How long to wait at `now` before presenting the next frame
    pub fn delay_at(&self, now: Instant) -> Duration {
        match self.last_frame {
            Some(last) => (last + self.frame_duration).saturating_duration_since(now),
            None => Duration::ZERO,
        }
    }

    /// Mark a frame as presented at `now`
    pub fn mark(&mut self, now: Instant) {
        self.last_frame = Some(now);
    }

    /// Sleep until the next frame is due, then mark it
    pub fn wait(&mut self) {
        let delay = self.delay_at(Instant::now());
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
        self.mark(Instant::now());
    }
}
