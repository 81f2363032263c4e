/// Frame timing for the driver
///
/// The runner core is ticked with an explicit delta; this clock is what the
/// window driver uses to measure that delta from the wall clock. Long
/// stalls (window drags, breakpoints) are clamped so one frame cannot teleport
/// the obstacle through the player.
use std::time::{Duration, Instant};

/// Largest delta handed to the runner in one frame
pub const MAX_FRAME_DELTA: f32 = 0.1;

/// Wall-clock frame timer
pub struct FrameClock {
    /// Time of last frame
    last_frame_time: Instant,
}

impl FrameClock {
    /// Create a new frame clock starting now
    pub fn new() -> Self {
        Self {
            last_frame_time: Instant::now(),
        }
    }

    /// Begin a new frame, returns the clamped delta in seconds
    pub fn begin_frame(&mut self) -> f32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        clamp_delta(frame_time)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

fn clamp_delta(frame_time: Duration) -> f32 {
    let raw = frame_time.as_secs_f32();
    if raw > MAX_FRAME_DELTA {
        log::trace!("Frame took {:.3}s, clamping to {:.3}s", raw, MAX_FRAME_DELTA);
    }
    raw.min(MAX_FRAME_DELTA)
}
