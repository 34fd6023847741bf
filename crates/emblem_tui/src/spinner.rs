//! Spinner animation for in-progress badges.
//!
//! Frame-stepped braille spinner; the terminal equivalent of the spinning
//! icon a web chat UI would animate with CSS. Owned and ticked by the
//! caller's frame loop, one per screen is enough since all running badges
//! spin in phase.

use std::time::{Duration, Instant};

/// Braille spinner frames, in animation order.
const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Time between frame advances.
const FRAME_INTERVAL: Duration = Duration::from_millis(80);

/// Spinner state: current frame and timing.
#[derive(Debug, Clone)]
pub struct Spinner {
    frame: usize,
    last_tick: Instant,
    paused: bool,
}

impl Default for Spinner {
    fn default() -> Self {
        Self {
            frame: 0,
            last_tick: Instant::now(),
            paused: false,
        }
    }
}

impl Spinner {
    /// Creates a new spinner at the first frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances by elapsed time. Call once per frame.
    pub fn tick(&mut self) {
        if self.paused {
            return;
        }
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick);
        let steps = (elapsed.as_millis() / FRAME_INTERVAL.as_millis()) as usize;
        if steps > 0 {
            self.frame = (self.frame + steps) % FRAMES.len();
            self.last_tick = now;
        }
    }

    /// Pauses or resumes the animation.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
        if !paused {
            self.last_tick = Instant::now();
        }
    }

    /// Resets to the first frame.
    pub fn reset(&mut self) {
        self.frame = 0;
        self.last_tick = Instant::now();
    }

    /// Current frame glyph.
    pub fn current(&self) -> &'static str {
        FRAMES[self.frame]
    }
}
