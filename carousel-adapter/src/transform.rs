use alloc::format;
use alloc::string::String;

/// A renderable translation of the track along the scroll axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    pub translate_x: f64,
}

impl Transform {
    pub fn from_position(position: f64) -> Self {
        Self {
            translate_x: position,
        }
    }

    /// CSS form, e.g. `translate3d(-12.5px, 0, 0)`.
    pub fn css(&self) -> String {
        format!("translate3d({}px, 0, 0)", self.translate_x)
    }
}
