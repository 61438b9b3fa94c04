use thiserror::Error;

/// A rejected [`crate::CarouselOptions`] field.
///
/// Returned by [`crate::CarouselOptions::validate`] and [`crate::Engine::try_new`].
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum OptionsError {
    #[error("card_width_px must be finite and > 0 (got {0})")]
    CardWidth(f64),
    #[error("gap_px must be finite and >= 0 (got {0})")]
    Gap(f64),
    #[error("speed_seconds must be finite and > 0 (got {0})")]
    Speed(f64),
    #[error("tap_threshold_px must be finite and >= 0 (got {0})")]
    TapThreshold(f64),
    #[error("friction_per_tick must be in (0, 1) (got {0})")]
    Friction(f64),
    #[error("friction_reference_hz must be finite and > 0 (got {0})")]
    FrictionReference(f64),
    #[error("momentum_floor must be finite and >= 0 (got {0})")]
    MomentumFloor(f64),
    #[error("release velocity bounds must satisfy 0 <= min <= max (got {min}..{max})")]
    ReleaseVelocity { min: f64, max: f64 },
    #[error("wheel_sensitivity must be finite (got {0})")]
    WheelSensitivity(f64),
    #[error("max_frame_dt must be finite and > 0 (got {0})")]
    MaxFrameDt(f64),
}
