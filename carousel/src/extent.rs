/// Half of the rendered width of the duplicated track; the wraparound modulus.
///
/// `half_width == 0` means "not measured yet" and keeps the engine idle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackExtent {
    pub half_width: f64,
}

impl TrackExtent {
    pub fn from_track_width(track_width: f64) -> Self {
        if !track_width.is_finite() || track_width <= 0.0 {
            return Self::default();
        }
        Self {
            half_width: track_width / 2.0,
        }
    }

    /// Extent of a loop of `source_len` cards laid out at a fixed span.
    ///
    /// Useful for hosts that know their geometry up front (fixed-width cards, tests).
    pub fn estimate(source_len: usize, card_width_px: f64, gap_px: f64) -> Self {
        Self::from_track_width(2.0 * source_len as f64 * (card_width_px + gap_px))
    }

    pub fn is_measured(&self) -> bool {
        self.half_width > 0.0
    }
}

/// Turns raw track measurements into [`TrackExtent`] updates.
///
/// Hosts call [`SizeOracle::observe`] once on mount and again on every layout-affecting
/// change (resize, image load, item count change). Only actual changes are reported.
#[derive(Clone, Copy, Debug, Default)]
pub struct SizeOracle {
    current: TrackExtent,
}

impl SizeOracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extent(&self) -> TrackExtent {
        self.current
    }

    /// Records the full (2N-item) track width; returns the new extent when it changed.
    ///
    /// Negative or non-finite widths are treated as "not measured".
    pub fn observe(&mut self, track_width: f64) -> Option<TrackExtent> {
        let next = TrackExtent::from_track_width(track_width);
        if next == self.current {
            return None;
        }
        ctrace!(
            prev = self.current.half_width,
            next = next.half_width,
            "SizeOracle::observe"
        );
        self.current = next;
        Some(next)
    }

    /// Forgets the last measurement (e.g. when the track is unmounted).
    pub fn reset(&mut self) {
        self.current = TrackExtent::default();
    }
}
