use web_time::{Duration, Instant};

/// Frame timing with clamped delta time and smoothed FPS.
pub struct FrameTiming {
    /// Longest delta (seconds) a single frame may report
    max_delta: f64,
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f64,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f64,
}

impl FrameTiming {
    /// Create a new frame timer whose deltas never exceed `max_delta`
    /// seconds.
    #[must_use]
    pub fn new(max_delta: f64) -> Self {
        Self {
            max_delta,
            last_frame: Instant::now(),
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    /* 5% new value, 95% old value for smooth
                                 * display */
        }
    }

    /// Call once per frame. Returns the clamped delta time in seconds since
    /// the previous call.
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f64();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        clamp_delta(elapsed, self.max_delta)
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f64 {
        self.smoothed_fps
    }
}

/// Convert an elapsed duration to seconds, capped at `max_delta`.
#[must_use]
pub fn clamp_delta(elapsed: Duration, max_delta: f64) -> f64 {
    elapsed.as_secs_f64().min(max_delta.max(0.0))
}
