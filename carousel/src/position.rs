/// Wraps `x` into the half-open interval `(-half_width, 0]`.
///
/// Identity when `half_width` is not a positive finite number (geometry not measured yet).
/// Non-finite input collapses to `0.0`.
pub fn normalize(x: f64, half_width: f64) -> f64 {
    if !(half_width.is_finite() && half_width > 0.0) {
        return x;
    }
    if !x.is_finite() {
        cwarn!(x, "normalize: non-finite position reset to 0");
        return 0.0;
    }
    // `%` keeps the sign of `x`, so `r` is in `(-half_width, half_width)`.
    let r = x % half_width;
    let wrapped = if r > 0.0 { r - half_width } else { r };
    // Guards both `-0.0` and `r - half_width` rounding onto the excluded bound.
    if wrapped <= -half_width || wrapped == 0.0 {
        0.0
    } else {
        wrapped
    }
}

/// The authoritative scroll offset and its wraparound modulus.
///
/// Invariant: when measured, `position` is always in `(-half_width, 0]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PositionModel {
    position: f64,
    half_width: f64,
}

impl PositionModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    pub fn is_measured(&self) -> bool {
        self.half_width > 0.0
    }

    /// Sets the absolute position; a no-op until geometry is measured.
    pub fn set(&mut self, position: f64) {
        if !self.is_measured() {
            return;
        }
        self.position = normalize(position, self.half_width);
    }

    pub fn offset_by(&mut self, delta: f64) {
        self.set(self.position + delta);
    }

    /// Swaps the modulus and re-normalizes the current position against it.
    pub fn set_half_width(&mut self, half_width: f64) {
        let half_width = if half_width.is_finite() && half_width > 0.0 {
            half_width
        } else {
            0.0
        };
        self.half_width = half_width;
        self.position = normalize(self.position, half_width);
    }

    /// Back to the origin, keeping the modulus.
    pub fn reset(&mut self) {
        self.position = 0.0;
    }
}
