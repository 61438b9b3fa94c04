use alloc::vec::Vec;

use carousel::{
    CarouselOptions, ClickDecision, Dispatch, Engine, InputEvent, LoopedItem, build_loop,
};

use crate::{EventSurface, FrameHandle, FrameLoop, FrameScheduler, ListenerKind, ListenerSet};
use crate::Transform;

/// Everything a strip needs from its host: a frame source and a surface for listeners.
pub trait StripHost: FrameScheduler + EventSurface {}

impl<H: FrameScheduler + EventSurface> StripHost for H {}

/// A framework-neutral strip that wraps a [`carousel::Engine`] and owns its lifecycle.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `mount` / `set_items` / `unmount` as the item list comes and goes
/// - `on_track_resize` whenever the rendered track width may have changed
/// - `dispatch` for pointer and wheel input on the track
/// - `on_frame(handle, now_ms)` when a requested frame fires
///
/// Mounting attaches the pointer, wheel and resize listeners and starts exactly one frame
/// loop; unmounting (or dropping the strip) cancels the loop and detaches every listener.
#[derive(Debug)]
pub struct StripCore<T, H: StripHost> {
    items: Vec<T>,
    looped: Vec<LoopedItem<T>>,
    engine: Engine,
    host: H,
    frame: FrameLoop,
    listeners: ListenerSet,
}

impl<T: Clone, H: StripHost> StripCore<T, H> {
    pub fn new(options: CarouselOptions, host: H) -> Self {
        Self {
            items: Vec::new(),
            looped: Vec::new(),
            engine: Engine::new(options),
            host,
            frame: FrameLoop::new(),
            listeners: ListenerSet::new(),
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn listeners(&self) -> &ListenerSet {
        &self.listeners
    }

    pub fn is_mounted(&self) -> bool {
        self.frame.is_running()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The duplicated list to render, in track order.
    pub fn looped(&self) -> &[LoopedItem<T>] {
        &self.looped
    }

    /// Mounts with an item list. An empty list renders nothing and starts no engine.
    pub fn mount(&mut self, items: Vec<T>) {
        self.set_items(items);
    }

    /// Replaces the item list. Any new list counts as a new identity: motion restarts from
    /// the origin.
    pub fn set_items(&mut self, items: Vec<T>) {
        if items.is_empty() {
            self.items.clear();
            self.teardown();
            return;
        }
        self.looped = build_loop(&items);
        self.engine.reset(items.len());
        self.items = items;

        if !self.is_mounted() {
            adebug!(count = self.items.len(), "StripCore: mount");
            for kind in [ListenerKind::Pointer, ListenerKind::Wheel, ListenerKind::Resize] {
                self.listeners.attach(kind, &mut self.host);
            }
            self.frame.start(&mut self.host);
        }
    }

    pub fn unmount(&mut self) {
        self.items.clear();
        self.teardown();
    }

    fn teardown(&mut self) {
        if !self.is_mounted() && self.listeners.count() == 0 {
            return;
        }
        adebug!("StripCore: unmount");
        self.frame.stop(&mut self.host);
        self.listeners.detach_all(&mut self.host);
        self.looped.clear();
        self.engine.set_suspended(false);
        // Listeners are gone, so a pending leave or release will never arrive.
        self.engine.clear_input();
        self.engine.reset(0);
    }

    /// Reports the rendered width of the whole (duplicated) track.
    pub fn on_track_resize(&mut self, track_width: f64) {
        if !self.listeners.is_attached(ListenerKind::Resize) {
            return;
        }
        self.engine.observe_track_width(track_width);
    }

    /// Runs the frame identified by `handle` and schedules the next one.
    ///
    /// Returns the transform to present, or `None` when the handle is stale or the engine
    /// skipped the frame (suspended, not measured).
    pub fn on_frame(&mut self, handle: FrameHandle, now_ms: u64) -> Option<Transform> {
        if !self.frame.on_frame(handle, &mut self.host) {
            atrace!(?handle, "StripCore: stale frame");
            return None;
        }
        self.engine.tick(now_ms).map(Transform::from_position)
    }

    /// Feeds track input to the engine. Input for a detached listener is dropped.
    pub fn dispatch(&mut self, event: InputEvent, now_ms: u64) -> Dispatch {
        if !self.listeners.is_attached(ListenerKind::for_input(&event)) {
            return Dispatch::Ignored;
        }
        self.engine.dispatch(event, now_ms)
    }

    /// Gates a click on the card at `loop_index` through the tap/drag verdict.
    ///
    /// Returns the source item index when the click may proceed.
    pub fn click(&mut self, loop_index: usize, now_ms: u64) -> Option<usize> {
        let source_index = self.looped.get(loop_index)?.source_index(self.items.len());
        match self.dispatch(InputEvent::Click, now_ms) {
            Dispatch::Click(ClickDecision::Allow) => Some(source_index),
            _ => None,
        }
    }

    /// Freezes the engine and detaches drag/wheel input, or reverses both.
    pub fn set_suspended(&mut self, suspended: bool) {
        if !self.is_mounted() {
            return;
        }
        self.engine.set_suspended(suspended);
        for kind in [ListenerKind::Pointer, ListenerKind::Wheel] {
            if suspended {
                self.listeners.detach(kind, &mut self.host);
            } else {
                self.listeners.attach(kind, &mut self.host);
            }
        }
    }

    pub(crate) fn attach(&mut self, kind: ListenerKind) {
        self.listeners.attach(kind, &mut self.host);
    }

    pub(crate) fn detach(&mut self, kind: ListenerKind) {
        self.listeners.detach(kind, &mut self.host);
    }

    pub fn transform(&self) -> Transform {
        Transform::from_position(self.engine.position())
    }
}

impl<T, H: StripHost> Drop for StripCore<T, H> {
    fn drop(&mut self) {
        if self.frame.is_running() || self.listeners.count() > 0 {
            adebug!(
                listeners = self.listeners.count(),
                "StripCore: dropped while mounted"
            );
        }
        self.frame.stop(&mut self.host);
        self.listeners.detach_all(&mut self.host);
    }
}
