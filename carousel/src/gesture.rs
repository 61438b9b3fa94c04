use crate::math::abs;
use crate::{CarouselOptions, ClickDecision, ClickGuard, DragAnchor, GestureVerdict};
use crate::{MotionOwner, VelocityTracker};

/// Outcome of ending a drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Release {
    pub(crate) verdict: GestureVerdict,
    /// Momentum to seed, already filtered by the release noise floor.
    pub(crate) velocity: f64,
}

/// Merges hover, drag and wheel signals into a single [`MotionOwner`], and classifies
/// finished pointer sequences as taps or drags.
///
/// The arbiter never touches the position itself; [`crate::Engine`] applies what it returns.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputArbiter {
    hovered: bool,
    drag: Option<DragAnchor>,
    max_drag_displacement: f64,
    tracker: VelocityTracker,
    wheel_resume_at_ms: Option<u64>,
    guard: ClickGuard,
}

impl InputArbiter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn motion_owner(&self) -> MotionOwner {
        if self.drag.is_some() {
            MotionOwner::Dragging
        } else if self.hovered || self.wheel_resume_at_ms.is_some() {
            MotionOwner::HoverPaused
        } else {
            MotionOwner::Auto
        }
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn drag_anchor(&self) -> Option<DragAnchor> {
        self.drag
    }

    pub fn max_drag_displacement(&self) -> f64 {
        self.max_drag_displacement
    }

    pub fn is_click_guard_armed(&self) -> bool {
        self.guard.is_armed()
    }

    pub fn wheel_resume_at_ms(&self) -> Option<u64> {
        self.wheel_resume_at_ms
    }

    pub(crate) fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub(crate) fn begin_drag(&mut self, pointer_x: f64, position: f64, now_ms: u64) {
        // A guard left over from an earlier drag belongs to a click that already happened.
        self.guard.clear();
        self.hovered = true;
        self.drag = Some(DragAnchor {
            start_pointer_x: pointer_x,
            start_position: position,
        });
        self.max_drag_displacement = 0.0;
        self.tracker.reset();
        self.tracker.add_sample(now_ms, pointer_x);
    }

    /// Records a move; returns the unwrapped position the track should follow.
    pub(crate) fn drag_to(&mut self, pointer_x: f64, now_ms: u64) -> Option<f64> {
        let anchor = self.drag?;
        let dx = pointer_x - anchor.start_pointer_x;
        self.max_drag_displacement = self.max_drag_displacement.max(abs(dx));
        self.tracker.add_sample(now_ms, pointer_x);
        Some(anchor.start_position + dx)
    }

    pub(crate) fn end_drag(&mut self, now_ms: u64, options: &CarouselOptions) -> Option<Release> {
        self.drag.take()?;

        let verdict = if self.max_drag_displacement > options.tap_threshold_px {
            self.guard.arm(now_ms, options.click_guard_ms);
            GestureVerdict::Drag
        } else {
            GestureVerdict::Tap
        };

        let raw = self
            .tracker
            .release_velocity(now_ms, options.assume_stopped_ms);
        let velocity = if abs(raw) < options.min_release_velocity {
            0.0
        } else {
            raw.clamp(-options.max_release_velocity, options.max_release_velocity)
        };
        self.tracker.reset();

        cdebug!(
            ?verdict,
            max_drag_displacement = self.max_drag_displacement,
            velocity,
            "InputArbiter::end_drag"
        );
        Some(Release { verdict, velocity })
    }

    /// Pauses auto-scroll until `wheel_idle_ms` pass without further wheel input.
    pub(crate) fn note_wheel(&mut self, now_ms: u64, idle_ms: u64) {
        self.wheel_resume_at_ms = Some(now_ms.saturating_add(idle_ms));
    }

    pub(crate) fn take_click(&mut self, now_ms: u64) -> ClickDecision {
        if self.guard.take(now_ms) {
            ClickDecision::Suppress
        } else {
            ClickDecision::Allow
        }
    }

    /// Fires due timers: the wheel pause and the click guard.
    pub(crate) fn expire_timers(&mut self, now_ms: u64) {
        if let Some(resume_at) = self.wheel_resume_at_ms {
            if now_ms >= resume_at {
                self.wheel_resume_at_ms = None;
            }
        }
        self.guard.expire(now_ms);
    }

    /// Drops every in-flight interaction: drag, hover, pending timers.
    pub(crate) fn cancel_all(&mut self) {
        *self = Self::default();
    }
}
