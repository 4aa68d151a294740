use std::time::{Duration, Instant};

/// Shortest frame delta reported.
const MIN_DT: Duration = Duration::from_micros(100);
/// Longest frame delta reported; stalls (minimize, debugger) collapse to this.
const MAX_DT: Duration = Duration::from_millis(250);

/// Timing of one frame.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick, clamped.
    pub dt: f32,
    pub now: Instant,
    /// 0 for the first frame.
    pub frame_index: u64,
}

impl FrameTime {
    /// Instantaneous rate implied by `dt`.
    #[inline]
    pub fn fps(&self) -> f32 {
        1.0 / self.dt
    }
}

#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frames: u64,
    bounds: (Duration, Duration),
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_bounds(MIN_DT, MAX_DT)
    }

    /// `min` is raised to `max` if the two are inverted.
    pub fn with_bounds(min: Duration, max: Duration) -> Self {
        Self {
            last: Instant::now(),
            frames: 0,
            bounds: (min.min(max), max),
        }
    }

    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let (min, max) = self.bounds;
        let elapsed = now.saturating_duration_since(self.last).clamp(min, max);
        self.last = now;

        let frame_index = self.frames;
        self.frames = self.frames.wrapping_add(1);

        FrameTime { dt: elapsed.as_secs_f32(), now, frame_index }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
