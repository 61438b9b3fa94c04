use alloc::vec::Vec;
use core::mem;

/// Identifies one requested frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameHandle(pub u64);

/// A display-synced frame source (e.g. `requestAnimationFrame`).
///
/// Every requested frame fires at most once; cancelled frames never fire.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameHandle;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// A cooperative frame loop that keeps exactly one request outstanding while running.
///
/// The loop never blocks: each fired frame re-arms the next one before any work runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameLoop {
    pending: Option<FrameHandle>,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn start<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if self.pending.is_none() {
            self.pending = Some(scheduler.request_frame());
        }
    }

    pub fn stop<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel_frame(handle);
        }
    }

    /// Call when `handle` fires. Re-requests the next frame and returns `true` when the frame
    /// belongs to this loop; stale or foreign handles return `false`.
    pub fn on_frame<S: FrameScheduler + ?Sized>(
        &mut self,
        handle: FrameHandle,
        scheduler: &mut S,
    ) -> bool {
        if self.pending != Some(handle) {
            return false;
        }
        self.pending = Some(scheduler.request_frame());
        true
    }
}

/// A deterministic, hand-driven scheduler (fake clock).
///
/// Useful for tests, simulations and headless hosts: call [`ManualScheduler::advance`] to
/// move time forward and collect the frames that fire.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    now_ms: u64,
    next_id: u64,
    pending: Vec<FrameHandle>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of frame requests that have neither fired nor been cancelled.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Moves the clock forward by `dt_ms` and fires every frame requested so far, in request
    /// order. Frames requested while handling the returned ones fire on the next advance.
    pub fn advance(&mut self, dt_ms: u64) -> Vec<FrameHandle> {
        self.now_ms = self.now_ms.saturating_add(dt_ms);
        mem::take(&mut self.pending)
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.pending.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.retain(|h| *h != handle);
    }
}
