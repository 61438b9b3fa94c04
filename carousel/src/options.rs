use crate::OptionsError;

/// Configuration for [`crate::Engine`].
///
/// Options are treated as immutable for the lifetime of an engine: use
/// [`crate::Engine::set_options`] to swap them, which re-derives dependent values (card span,
/// per-second friction) instead of reading fields ad hoc mid-frame.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselOptions {
    /// Rendered width of one card in the scroll axis.
    pub card_width_px: f64,
    /// Space after each card.
    pub gap_px: f64,
    /// Time for the auto-scroll to travel one half-loop, independent of content width.
    pub speed_seconds: f64,

    /// Max pointer displacement (px) that still counts as a tap.
    pub tap_threshold_px: f64,

    /// Momentum multiplier applied once per reference tick (e.g. `0.92` per 1/60 s).
    pub friction_per_tick: f64,
    /// Tick rate `friction_per_tick` is expressed against.
    pub friction_reference_hz: f64,
    /// Momentum is considered exhausted below this speed (px/s).
    pub momentum_floor: f64,
    /// Release speeds below this (px/s) do not seed momentum.
    pub min_release_velocity: f64,
    /// Release speeds are clamped to this magnitude (px/s).
    pub max_release_velocity: f64,
    /// A pointer that has not moved for this long before release is treated as stopped.
    pub assume_stopped_ms: u64,

    /// Pixels of travel per unit of wheel delta.
    pub wheel_sensitivity: f64,
    /// Idle time after the last wheel event before auto-scroll resumes.
    pub wheel_idle_ms: u64,

    /// Lifetime of the one-shot click guard armed after a drag.
    pub click_guard_ms: u64,

    /// Upper bound for a single frame step, in seconds.
    pub max_frame_dt: f64,

    /// Derive an active card index every frame (indicator UI).
    pub track_active_index: bool,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self::banner()
    }
}

impl CarouselOptions {
    /// Preset used by the banner strip.
    pub fn banner() -> Self {
        Self {
            card_width_px: 280.0,
            gap_px: 20.0,
            speed_seconds: 30.0,
            tap_threshold_px: 5.0,
            friction_per_tick: 0.92,
            friction_reference_hz: 60.0,
            momentum_floor: 1.0,
            min_release_velocity: 20.0,
            max_release_velocity: 6_000.0,
            assume_stopped_ms: 100,
            wheel_sensitivity: 0.9,
            wheel_idle_ms: 250,
            click_guard_ms: 50,
            max_frame_dt: 0.1,
            track_active_index: false,
        }
    }

    /// Preset used by the video strip: wider threshold, slower loop, active index tracking.
    pub fn video() -> Self {
        Self {
            card_width_px: 320.0,
            gap_px: 16.0,
            speed_seconds: 40.0,
            tap_threshold_px: 8.0,
            wheel_sensitivity: 1.0,
            track_active_index: true,
            ..Self::banner()
        }
    }

    pub fn with_card_width(mut self, card_width_px: f64) -> Self {
        self.card_width_px = card_width_px;
        self
    }

    pub fn with_gap(mut self, gap_px: f64) -> Self {
        self.gap_px = gap_px;
        self
    }

    pub fn with_speed_seconds(mut self, speed_seconds: f64) -> Self {
        self.speed_seconds = speed_seconds;
        self
    }

    pub fn with_tap_threshold(mut self, tap_threshold_px: f64) -> Self {
        self.tap_threshold_px = tap_threshold_px;
        self
    }

    pub fn with_friction(mut self, friction_per_tick: f64, reference_hz: f64) -> Self {
        self.friction_per_tick = friction_per_tick;
        self.friction_reference_hz = reference_hz;
        self
    }

    pub fn with_momentum_floor(mut self, momentum_floor: f64) -> Self {
        self.momentum_floor = momentum_floor;
        self
    }

    pub fn with_release_velocity(mut self, min: f64, max: f64) -> Self {
        self.min_release_velocity = min;
        self.max_release_velocity = max;
        self
    }

    pub fn with_assume_stopped_ms(mut self, assume_stopped_ms: u64) -> Self {
        self.assume_stopped_ms = assume_stopped_ms;
        self
    }

    pub fn with_wheel(mut self, sensitivity: f64, idle_ms: u64) -> Self {
        self.wheel_sensitivity = sensitivity;
        self.wheel_idle_ms = idle_ms;
        self
    }

    pub fn with_click_guard_ms(mut self, click_guard_ms: u64) -> Self {
        self.click_guard_ms = click_guard_ms;
        self
    }

    pub fn with_max_frame_dt(mut self, max_frame_dt: f64) -> Self {
        self.max_frame_dt = max_frame_dt;
        self
    }

    pub fn with_active_index(mut self, track_active_index: bool) -> Self {
        self.track_active_index = track_active_index;
        self
    }

    /// Distance between the starts of two adjacent cards.
    pub fn card_span(&self) -> f64 {
        self.card_width_px + self.gap_px
    }

    /// Continuous form of `friction_per_tick`: the multiplier for one whole second.
    pub fn friction_per_second(&self) -> f64 {
        crate::math::powf(self.friction_per_tick, self.friction_reference_hz)
    }

    /// Checks every field, returning the first invalid one.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !(self.card_width_px.is_finite() && self.card_width_px > 0.0) {
            return Err(OptionsError::CardWidth(self.card_width_px));
        }
        if !(self.gap_px.is_finite() && self.gap_px >= 0.0) {
            return Err(OptionsError::Gap(self.gap_px));
        }
        if !(self.speed_seconds.is_finite() && self.speed_seconds > 0.0) {
            return Err(OptionsError::Speed(self.speed_seconds));
        }
        if !(self.tap_threshold_px.is_finite() && self.tap_threshold_px >= 0.0) {
            return Err(OptionsError::TapThreshold(self.tap_threshold_px));
        }
        if !(self.friction_per_tick > 0.0 && self.friction_per_tick < 1.0) {
            return Err(OptionsError::Friction(self.friction_per_tick));
        }
        if !(self.friction_reference_hz.is_finite() && self.friction_reference_hz > 0.0) {
            return Err(OptionsError::FrictionReference(self.friction_reference_hz));
        }
        if !(self.momentum_floor.is_finite() && self.momentum_floor >= 0.0) {
            return Err(OptionsError::MomentumFloor(self.momentum_floor));
        }
        let (min, max) = (self.min_release_velocity, self.max_release_velocity);
        if !(min.is_finite() && max.is_finite() && min >= 0.0 && min <= max) {
            return Err(OptionsError::ReleaseVelocity { min, max });
        }
        if !self.wheel_sensitivity.is_finite() {
            return Err(OptionsError::WheelSensitivity(self.wheel_sensitivity));
        }
        if !(self.max_frame_dt.is_finite() && self.max_frame_dt > 0.0) {
            return Err(OptionsError::MaxFrameDt(self.max_frame_dt));
        }
        Ok(())
    }

    /// Replaces every invalid field with the matching [`CarouselOptions::banner`] value.
    pub fn sanitized(self) -> Self {
        let fallback = Self::banner();
        let mut out = self;
        while let Err(err) = out.validate() {
            cwarn!(error = %err, "CarouselOptions: replacing invalid field");
            match err {
                OptionsError::CardWidth(_) => out.card_width_px = fallback.card_width_px,
                OptionsError::Gap(_) => out.gap_px = fallback.gap_px,
                OptionsError::Speed(_) => out.speed_seconds = fallback.speed_seconds,
                OptionsError::TapThreshold(_) => out.tap_threshold_px = fallback.tap_threshold_px,
                OptionsError::Friction(_) => out.friction_per_tick = fallback.friction_per_tick,
                OptionsError::FrictionReference(_) => {
                    out.friction_reference_hz = fallback.friction_reference_hz;
                }
                OptionsError::MomentumFloor(_) => out.momentum_floor = fallback.momentum_floor,
                OptionsError::ReleaseVelocity { .. } => {
                    out.min_release_velocity = fallback.min_release_velocity;
                    out.max_release_velocity = fallback.max_release_velocity;
                }
                OptionsError::WheelSensitivity(_) => {
                    out.wheel_sensitivity = fallback.wheel_sensitivity;
                }
                OptionsError::MaxFrameDt(_) => out.max_frame_dt = fallback.max_frame_dt,
            }
        }
        out
    }
}
