use crate::math::{abs, powf, round};
use crate::{
    CarouselOptions, Dispatch, DragAnchor, EngineState, InputArbiter, InputEvent, MotionOwner,
    OptionsError, PositionModel, SizeOracle, TrackExtent,
};

/// A headless auto-scrolling carousel engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects.
/// - Your adapter feeds it input through [`Engine::dispatch`], track measurements through
///   [`Engine::observe_track_width`], and frame timestamps through [`Engine::tick`].
/// - The resulting offset is read back with [`Engine::position`] and applied as a transform.
///
/// Three motion sources are blended into one position: constant auto-scroll, pointer drag
/// (with momentum after release), and wheel nudges. The position is always kept in
/// `(-half_width, 0]` once the track has been measured.
///
/// For frame loops, listener bookkeeping and the banner/video call sites, see the
/// `carousel-adapter` crate.
#[derive(Clone, Debug)]
pub struct Engine {
    options: CarouselOptions,
    friction_per_second: f64,
    card_span: f64,

    model: PositionModel,
    oracle: SizeOracle,
    velocity: f64,
    arbiter: InputArbiter,
    suspended: bool,

    item_count: usize,
    active_index: Option<usize>,
    last_frame_ms: Option<u64>,
}

impl Engine {
    /// Creates an engine, replacing invalid option fields with banner defaults.
    pub fn new(options: CarouselOptions) -> Self {
        let options = options.sanitized();
        cdebug!(
            card_span = options.card_span(),
            speed_seconds = options.speed_seconds,
            tap_threshold_px = options.tap_threshold_px,
            "Engine::new"
        );
        Self {
            friction_per_second: options.friction_per_second(),
            card_span: options.card_span(),
            options,
            model: PositionModel::new(),
            oracle: SizeOracle::new(),
            velocity: 0.0,
            arbiter: InputArbiter::new(),
            suspended: false,
            item_count: 0,
            active_index: None,
            last_frame_ms: None,
        }
    }

    /// Creates an engine, rejecting invalid options.
    pub fn try_new(options: CarouselOptions) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self::new(options))
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// Swaps the configuration and re-derives card span and friction.
    ///
    /// Motion state (position, velocity, in-flight drag) is preserved.
    pub fn set_options(&mut self, options: CarouselOptions) {
        self.options = options.sanitized();
        self.friction_per_second = self.options.friction_per_second();
        self.card_span = self.options.card_span();
        ctrace!(card_span = self.card_span, "Engine::set_options");
        self.refresh_active_index();
    }

    pub fn position(&self) -> f64 {
        self.model.position()
    }

    pub fn half_width(&self) -> f64 {
        self.model.half_width()
    }

    pub fn extent(&self) -> TrackExtent {
        self.oracle.extent()
    }

    pub fn is_measured(&self) -> bool {
        self.model.is_measured()
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn motion_owner(&self) -> MotionOwner {
        self.arbiter.motion_owner()
    }

    pub fn drag_anchor(&self) -> Option<DragAnchor> {
        self.arbiter.drag_anchor()
    }

    pub fn max_drag_displacement(&self) -> f64 {
        self.arbiter.max_drag_displacement()
    }

    pub fn arbiter(&self) -> &InputArbiter {
        &self.arbiter
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    pub fn card_span(&self) -> f64 {
        self.card_span
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Index of the card nearest the leading edge, when active index tracking is enabled.
    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    /// Returns a serializable snapshot of the current motion state.
    pub fn state(&self) -> EngineState {
        EngineState {
            position: self.model.position(),
            half_width: self.model.half_width(),
            velocity: self.velocity,
            motion_owner: self.arbiter.motion_owner(),
            drag_anchor: self.arbiter.drag_anchor(),
            max_drag_displacement: self.arbiter.max_drag_displacement(),
            suspended: self.suspended,
            active_index: self.active_index,
        }
    }

    /// Records the rendered width of the full (duplicated) track.
    ///
    /// Returns the new extent when it changed; the position is re-normalized against it
    /// immediately.
    pub fn observe_track_width(&mut self, track_width: f64) -> Option<TrackExtent> {
        let extent = self.oracle.observe(track_width)?;
        self.apply_extent(extent);
        Some(extent)
    }

    /// Sets the wraparound modulus directly.
    pub fn set_half_width(&mut self, half_width: f64) {
        self.observe_track_width(half_width * 2.0);
    }

    fn apply_extent(&mut self, extent: TrackExtent) {
        cdebug!(half_width = extent.half_width, "Engine: track extent changed");
        self.model.set_half_width(extent.half_width);
        self.refresh_active_index();
    }

    /// Re-initializes motion for a new item list: back to the origin, no momentum, no drag.
    ///
    /// Hover is kept since the pointer has not moved. The measured extent is kept until the
    /// host reports the new track width.
    pub fn reset(&mut self, item_count: usize) {
        cdebug!(item_count, "Engine::reset");
        let hovered = self.arbiter.is_hovered();
        self.arbiter.cancel_all();
        self.arbiter.set_hovered(hovered);
        self.model.reset();
        self.velocity = 0.0;
        self.item_count = item_count;
        self.last_frame_ms = None;
        self.refresh_active_index();
    }

    /// Forgets every in-flight interaction: drag, momentum, hover, wheel pause and click guard.
    ///
    /// For hosts that stop listening to input (e.g. on unmount) and can no longer observe the
    /// matching leave or release.
    pub fn clear_input(&mut self) {
        cdebug!("Engine::clear_input");
        self.arbiter.cancel_all();
        self.velocity = 0.0;
    }

    /// Freezes (or resumes) the engine.
    ///
    /// Suspending ends any drag without momentum and cancels the wheel pause and click guard.
    /// While suspended, input is ignored and frames are skipped. Resuming continues from the
    /// frozen position; the frame clock restarts so the first step has no time jump.
    pub fn set_suspended(&mut self, suspended: bool) {
        if self.suspended == suspended {
            return;
        }
        cdebug!(suspended, position = self.model.position(), "Engine::set_suspended");
        self.suspended = suspended;
        if suspended {
            self.arbiter.cancel_all();
            self.velocity = 0.0;
        }
        self.last_frame_ms = None;
    }

    /// Feeds one host input event into the arbiter.
    ///
    /// Events are applied synchronously, so everything dispatched before a frame is visible to
    /// that frame's [`Engine::tick`].
    pub fn dispatch(&mut self, event: InputEvent, now_ms: u64) -> Dispatch {
        if self.suspended {
            ctrace!(?event, "Engine::dispatch ignored while suspended");
            return Dispatch::Ignored;
        }

        match event {
            InputEvent::PointerEnter => {
                self.arbiter.set_hovered(true);
                Dispatch::Handled
            }
            InputEvent::PointerLeave => {
                self.arbiter.set_hovered(false);
                Dispatch::Handled
            }
            InputEvent::PointerDown { x } => {
                ctrace!(x, position = self.model.position(), "Engine: drag start");
                self.velocity = 0.0;
                self.arbiter.begin_drag(x, self.model.position(), now_ms);
                Dispatch::Handled
            }
            InputEvent::PointerMove { x } => match self.arbiter.drag_to(x, now_ms) {
                Some(target) => {
                    self.model.set(target);
                    Dispatch::Handled
                }
                None => Dispatch::Ignored,
            },
            InputEvent::PointerUp { x } => {
                if let Some(target) = self.arbiter.drag_to(x, now_ms) {
                    self.model.set(target);
                }
                self.finish_drag(now_ms)
            }
            InputEvent::PointerCancel => self.finish_drag(now_ms),
            InputEvent::Wheel { delta } => {
                if self.arbiter.drag_anchor().is_some() {
                    return Dispatch::Ignored;
                }
                self.model
                    .offset_by(-delta * self.options.wheel_sensitivity);
                self.velocity = 0.0;
                self.arbiter.note_wheel(now_ms, self.options.wheel_idle_ms);
                ctrace!(delta, position = self.model.position(), "Engine: wheel nudge");
                Dispatch::Handled
            }
            InputEvent::Click => Dispatch::Click(self.arbiter.take_click(now_ms)),
        }
    }

    fn finish_drag(&mut self, now_ms: u64) -> Dispatch {
        match self.arbiter.end_drag(now_ms, &self.options) {
            Some(release) => {
                self.velocity = release.velocity;
                Dispatch::Gesture(release.verdict)
            }
            None => Dispatch::Ignored,
        }
    }

    /// Runs one display frame at `now_ms`.
    ///
    /// Fires due timers, then integrates motion over the elapsed time (clamped to
    /// `max_frame_dt`). Returns the position to present, or `None` when the frame was skipped
    /// (suspended, or geometry not measured yet).
    pub fn tick(&mut self, now_ms: u64) -> Option<f64> {
        if self.suspended {
            return None;
        }
        self.arbiter.expire_timers(now_ms);

        let dt = match self.last_frame_ms.replace(now_ms) {
            Some(prev) => now_ms.saturating_sub(prev) as f64 / 1000.0,
            None => 0.0,
        };
        if !self.model.is_measured() {
            return None;
        }
        self.advance(dt);
        Some(self.model.position())
    }

    /// Integrates motion over `dt` seconds without touching timers or the frame clock.
    ///
    /// Precedence: drag owns the position; otherwise live momentum; otherwise auto-scroll
    /// when nothing pauses it.
    pub fn advance(&mut self, dt: f64) {
        if self.suspended || !self.model.is_measured() {
            return;
        }
        let dt = if dt.is_finite() {
            dt.clamp(0.0, self.options.max_frame_dt)
        } else {
            0.0
        };

        let owner = self.arbiter.motion_owner();
        if owner == MotionOwner::Dragging {
            self.velocity = 0.0;
        } else if abs(self.velocity) > self.options.momentum_floor {
            self.model.offset_by(self.velocity * dt);
            self.velocity *= powf(self.friction_per_second, dt);
            if abs(self.velocity) <= self.options.momentum_floor {
                ctrace!(position = self.model.position(), "Engine: momentum exhausted");
                self.velocity = 0.0;
            }
        } else {
            self.velocity = 0.0;
            if owner == MotionOwner::Auto {
                let speed = self.model.half_width() / self.options.speed_seconds;
                self.model.offset_by(-speed * dt);
            }
        }

        self.refresh_active_index();
    }

    fn refresh_active_index(&mut self) {
        self.active_index = self.compute_active_index();
    }

    fn compute_active_index(&self) -> Option<usize> {
        if !self.options.track_active_index || self.item_count == 0 {
            return None;
        }
        let half_width = self.model.half_width();
        if half_width <= 0.0 || self.card_span <= 0.0 {
            return None;
        }
        let wrapped = (-self.model.position()) % half_width;
        let slot = round(wrapped / self.card_span);
        if !slot.is_finite() || slot < 0.0 {
            return Some(0);
        }
        Some(slot as usize % self.item_count)
    }
}
