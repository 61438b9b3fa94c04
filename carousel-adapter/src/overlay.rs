use crate::{ScrollLock, ScrollLockGuard};

/// Keys the overlay reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    Escape,
    Other,
}

/// Input that lands inside the overlay boundary.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OverlayEvent {
    /// The explicit close control.
    Close,
    KeyDown(Key),
    /// Any pointer input inside the overlay (player controls, backdrop drags).
    Pointer,
    Wheel { delta: f64 },
}

/// What the overlay did with an event. Propagation to the carousel always stops.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OverlayResponse {
    /// The event closed the overlay.
    Closed,
    /// The event was absorbed at the overlay boundary.
    Consumed,
    /// The overlay is closed; the event is not for it.
    NotOpen,
}

/// An overlay player: `Closed`, or `Open` with the source being played.
///
/// While open it holds the shared page [`ScrollLock`].
#[derive(Debug)]
pub struct Overlay<S> {
    source: Option<S>,
    lock: ScrollLock,
    guard: Option<ScrollLockGuard>,
}

impl<S> Overlay<S> {
    pub fn new(lock: ScrollLock) -> Self {
        Self {
            source: None,
            lock,
            guard: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.source.is_some()
    }

    pub fn source(&self) -> Option<&S> {
        self.source.as_ref()
    }

    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.lock
    }

    /// Opens the overlay on `source`. Returns `false` (and drops `source`) when already open.
    pub fn open(&mut self, source: S) -> bool {
        if self.is_open() {
            return false;
        }
        self.source = Some(source);
        self.guard = Some(self.lock.acquire());
        adebug!("Overlay::open");
        true
    }

    /// Closes the overlay, returning the source that was playing.
    pub fn close(&mut self) -> Option<S> {
        let source = self.source.take()?;
        self.guard = None;
        adebug!("Overlay::close");
        Some(source)
    }

    /// Handles an event inside the overlay boundary. Never forwards it anywhere else.
    pub fn handle(&mut self, event: OverlayEvent) -> OverlayResponse {
        if !self.is_open() {
            return OverlayResponse::NotOpen;
        }
        match event {
            OverlayEvent::Close | OverlayEvent::KeyDown(Key::Escape) => {
                self.close();
                OverlayResponse::Closed
            }
            OverlayEvent::KeyDown(Key::Other)
            | OverlayEvent::Pointer
            | OverlayEvent::Wheel { .. } => OverlayResponse::Consumed,
        }
    }
}
