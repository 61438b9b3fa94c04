use alloc::vec::Vec;

use carousel::{CarouselOptions, Dispatch, Engine, InputEvent, LoopedItem};

use crate::{
    FrameHandle, ListenerKind, Overlay, OverlayEvent, OverlayResponse, ScrollLock, StripCore,
    StripHost, Transform,
};

/// Input for a video strip, split by the boundary it lands in.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VideoEvent {
    /// Input on the carousel track.
    Track(InputEvent),
    /// Input inside the overlay player; never reaches the track.
    Overlay(OverlayEvent),
}

/// Result of [`VideoStrip::dispatch`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VideoDispatch {
    Track(Dispatch),
    Overlay(OverlayResponse),
}

/// Result of clicking a video card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VideoClick {
    /// The overlay player opened on this source item.
    Opened(usize),
    /// A tap on an item without a playable source.
    NotPlayable(usize),
    /// The click ended a drag, hit no card, or arrived while the overlay was open.
    Suppressed,
}

/// The video call site: an endless strip with an active-index indicator and an overlay player
/// that suspends the engine while open.
///
/// `resolve` turns an item into a playable source (e.g. an embeddable video id), or `None`.
#[derive(Debug)]
pub struct VideoStrip<T, H: StripHost, S, R> {
    core: StripCore<T, H>,
    overlay: Overlay<S>,
    resolve: R,
}

impl<T, H, S, R> VideoStrip<T, H, S, R>
where
    T: Clone,
    H: StripHost,
    R: Fn(&T) -> Option<S>,
{
    pub fn new(options: CarouselOptions, host: H, resolve: R) -> Self {
        Self {
            core: StripCore::new(options, host),
            overlay: Overlay::new(ScrollLock::new()),
            resolve,
        }
    }

    /// Uses the [`CarouselOptions::video`] preset.
    pub fn with_host(host: H, resolve: R) -> Self {
        Self::new(CarouselOptions::video(), host, resolve)
    }

    /// Shares a page-wide scroll lock with other modals.
    pub fn with_scroll_lock(mut self, lock: ScrollLock) -> Self {
        self.overlay = Overlay::new(lock);
        self
    }

    pub fn core(&self) -> &StripCore<T, H> {
        &self.core
    }

    pub fn engine(&self) -> &Engine {
        self.core.engine()
    }

    pub fn host(&self) -> &H {
        self.core.host()
    }

    pub fn host_mut(&mut self) -> &mut H {
        self.core.host_mut()
    }

    pub fn overlay(&self) -> &Overlay<S> {
        &self.overlay
    }

    pub fn looped(&self) -> &[LoopedItem<T>] {
        self.core.looped()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.core.engine().active_index()
    }

    /// Whether tapping `item` would open the player.
    pub fn is_playable(&self, item: &T) -> bool {
        (self.resolve)(item).is_some()
    }

    pub fn mount(&mut self, items: Vec<T>) {
        self.core.mount(items);
    }

    pub fn set_items(&mut self, items: Vec<T>) {
        if items.is_empty() {
            // Teardown detaches every listener and un-suspends the engine.
            self.overlay.close();
        }
        self.core.set_items(items);
    }

    pub fn unmount(&mut self) {
        self.overlay.close();
        self.core.unmount();
    }

    pub fn on_track_resize(&mut self, track_width: f64) {
        self.core.on_track_resize(track_width);
    }

    pub fn on_frame(&mut self, handle: FrameHandle, now_ms: u64) -> Option<Transform> {
        self.core.on_frame(handle, now_ms)
    }

    /// Routes input to the track or the overlay. Overlay input stops at the overlay boundary.
    pub fn dispatch(&mut self, event: VideoEvent, now_ms: u64) -> VideoDispatch {
        match event {
            VideoEvent::Track(input) => VideoDispatch::Track(self.core.dispatch(input, now_ms)),
            VideoEvent::Overlay(input) => {
                let response = self.overlay.handle(input);
                if response == OverlayResponse::Closed {
                    self.resume();
                }
                VideoDispatch::Overlay(response)
            }
        }
    }

    /// Gates a click on the card at `loop_index`; a tap on a playable card opens the player.
    pub fn click_item(&mut self, loop_index: usize, now_ms: u64) -> VideoClick {
        if self.overlay.is_open() {
            return VideoClick::Suppressed;
        }
        let Some(source_index) = self.core.click(loop_index, now_ms) else {
            return VideoClick::Suppressed;
        };
        let Some(source) = self.core.items().get(source_index).and_then(&self.resolve) else {
            return VideoClick::NotPlayable(source_index);
        };
        self.overlay.open(source);
        self.core.set_suspended(true);
        self.core.attach(ListenerKind::Keyboard);
        adebug!(source_index, "VideoStrip: overlay opened");
        VideoClick::Opened(source_index)
    }

    /// Closes the player (explicit close control) and resumes the strip.
    pub fn close_overlay(&mut self) -> Option<S> {
        let source = self.overlay.close()?;
        self.resume();
        Some(source)
    }

    fn resume(&mut self) {
        self.core.detach(ListenerKind::Keyboard);
        self.core.set_suspended(false);
        adebug!("VideoStrip: overlay closed");
    }

    pub fn transform(&self) -> Transform {
        self.core.transform()
    }
}
