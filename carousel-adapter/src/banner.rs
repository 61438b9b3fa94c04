use alloc::vec::Vec;

use carousel::{CarouselOptions, Dispatch, Engine, InputEvent, LoopedItem};

use crate::{FrameHandle, StripCore, StripHost, Transform};

/// Result of clicking a banner card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BannerClick {
    /// A tap: follow the banner's link for this source item.
    Navigate(usize),
    /// The click ended a drag (or hit no card) and must not navigate.
    Suppressed,
}

/// The banner call site: an endless strip whose taps navigate.
#[derive(Debug)]
pub struct BannerStrip<T, H: StripHost> {
    core: StripCore<T, H>,
}

impl<T: Clone, H: StripHost> BannerStrip<T, H> {
    pub fn new(options: CarouselOptions, host: H) -> Self {
        Self {
            core: StripCore::new(options, host),
        }
    }

    /// Uses the [`CarouselOptions::banner`] preset.
    pub fn with_host(host: H) -> Self {
        Self::new(CarouselOptions::banner(), host)
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

    pub fn looped(&self) -> &[LoopedItem<T>] {
        self.core.looped()
    }

    pub fn mount(&mut self, items: Vec<T>) {
        self.core.mount(items);
    }

    pub fn set_items(&mut self, items: Vec<T>) {
        self.core.set_items(items);
    }

    pub fn unmount(&mut self) {
        self.core.unmount();
    }

    pub fn on_track_resize(&mut self, track_width: f64) {
        self.core.on_track_resize(track_width);
    }

    pub fn on_frame(&mut self, handle: FrameHandle, now_ms: u64) -> Option<Transform> {
        self.core.on_frame(handle, now_ms)
    }

    pub fn dispatch(&mut self, event: InputEvent, now_ms: u64) -> Dispatch {
        self.core.dispatch(event, now_ms)
    }

    pub fn click_item(&mut self, loop_index: usize, now_ms: u64) -> BannerClick {
        match self.core.click(loop_index, now_ms) {
            Some(source_index) => BannerClick::Navigate(source_index),
            None => BannerClick::Suppressed,
        }
    }

    pub fn transform(&self) -> Transform {
        self.core.transform()
    }
}
