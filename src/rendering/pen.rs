//! Speed-to-width pen model.
//!
//! Approximates pen pressure from drawing speed: slow movement paints wide,
//! fast movement paints thin. The width is `max / (1 + v)` where `v` is an
//! exponentially smoothed velocity in px/ms, clamped to the configured
//! `[min, max]` bounds. The curve itself is not part of the pad contract;
//! monotonic-in-speed and bounded are.

/// Stateful width model for one in-progress stroke.
#[derive(Debug, Clone)]
pub struct Pen {
    min_width: f32,
    max_width: f32,
    /// EMA weight of the newest velocity sample, in `(0, 1]`.
    smoothing: f32,
    velocity: f32,
    last: Option<(f32, f32, f64)>,
}

impl Pen {
    pub fn new(min_width: f32, max_width: f32, smoothing: f32) -> Self {
        Self {
            min_width,
            max_width,
            smoothing,
            velocity: 0.0,
            last: None,
        }
    }

    /// Forget the previous stroke's samples. Called on pointer-down.
    pub fn reset(&mut self) {
        self.velocity = 0.0;
        self.last = None;
    }

    /// Feed the next pointer sample and get the width to paint at it.
    ///
    /// `time_ms` is the sample timestamp; samples without timestamps should
    /// be fed with synthetic 1 ms spacing so width stays monotonic in
    /// geometric spacing.
    pub fn width_for(&mut self, x: f32, y: f32, time_ms: f64) -> f32 {
        let width = match self.last {
            None => self.max_width,
            Some((px, py, pt)) => {
                let dx = x - px;
                let dy = y - py;
                let dist = (dx * dx + dy * dy).sqrt();
                let dt = (time_ms - pt).max(1.0) as f32;
                let v = dist / dt;
                self.velocity = self.smoothing * v + (1.0 - self.smoothing) * self.velocity;
                self.max_width / (1.0 + self.velocity)
            }
        };
        self.last = Some((x, y, time_ms));
        width.clamp(self.min_width, self.max_width)
    }
}
