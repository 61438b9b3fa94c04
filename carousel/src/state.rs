use crate::{DragAnchor, MotionOwner};

/// A serializable snapshot of an engine's motion state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`. It is meant for
/// inspection and debugging overlays; engines are never restored from it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineState {
    pub position: f64,
    pub half_width: f64,
    /// px/s, nonzero only while momentum from a release is decaying.
    pub velocity: f64,
    pub motion_owner: MotionOwner,
    pub drag_anchor: Option<DragAnchor>,
    pub max_drag_displacement: f64,
    pub suspended: bool,
    pub active_index: Option<usize>,
}
