/// Instantaneous pointer velocity from consecutive move samples.
///
/// Each sample with a later timestamp replaces the velocity with `Δx / Δt` against the
/// previous sample. Samples sharing a timestamp are folded into the next distinct one.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VelocityTracker {
    last: Option<(u64, f64)>,
    velocity: f64,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn add_sample(&mut self, now_ms: u64, x: f64) {
        let Some((prev_ms, prev_x)) = self.last else {
            self.last = Some((now_ms, x));
            return;
        };
        let dt_ms = now_ms.saturating_sub(prev_ms);
        if dt_ms == 0 {
            return;
        }
        self.velocity = (x - prev_x) * 1000.0 / dt_ms as f64;
        self.last = Some((now_ms, x));
    }

    /// Most recent velocity in px/s.
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Velocity to carry into momentum when the pointer is released at `now_ms`.
    ///
    /// Returns `0.0` when the pointer sat still for longer than `assume_stopped_ms`.
    pub fn release_velocity(&self, now_ms: u64, assume_stopped_ms: u64) -> f64 {
        match self.last {
            Some((last_ms, _)) if now_ms.saturating_sub(last_ms) <= assume_stopped_ms => {
                self.velocity
            }
            _ => 0.0,
        }
    }
}
