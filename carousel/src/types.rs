/// Which input source determines the position this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MotionOwner {
    /// Constant auto-scroll (momentum still takes precedence while active).
    #[default]
    Auto,
    /// Hovered or recently wheeled: position only moves through wheel/momentum.
    HoverPaused,
    /// A pointer is down: position follows the pointer.
    Dragging,
}

/// Where a drag started, in pointer and track coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragAnchor {
    pub start_pointer_x: f64,
    pub start_position: f64,
}

/// A host input, already stripped of its concrete event source.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputEvent {
    PointerEnter,
    PointerLeave,
    PointerDown { x: f64 },
    PointerMove { x: f64 },
    PointerUp { x: f64 },
    PointerCancel,
    /// Wheel delta in pixels (positive scrolls content towards negative positions).
    Wheel { delta: f64 },
    /// A click synthesized by the host after a pointer-up.
    Click,
}

/// How a finished pointer sequence was classified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GestureVerdict {
    /// Displacement stayed within the tap threshold; the pending click proceeds.
    Tap,
    /// Displacement exceeded the threshold; exactly one following click is suppressed.
    Drag,
}

/// Whether a click should reach the item under the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClickDecision {
    Allow,
    Suppress,
}

/// Result of [`crate::Engine::dispatch`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dispatch {
    /// The event had no effect (suspended, or not applicable in the current state).
    Ignored,
    Handled,
    /// A drag ended.
    Gesture(GestureVerdict),
    Click(ClickDecision),
}
