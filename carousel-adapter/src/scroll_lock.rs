use alloc::sync::Arc;
use core::sync::atomic::{AtomicUsize, Ordering};

/// A reference-counted page scroll lock shared by every open modal.
///
/// The page is locked while at least one [`ScrollLockGuard`] is alive. Clones share the same
/// counter, so a modal manager can hand one to each overlay and tests can [`ScrollLock::reset`]
/// it deterministically.
#[derive(Clone, Debug, Default)]
pub struct ScrollLock {
    depth: Arc<AtomicUsize>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&self) -> ScrollLockGuard {
        self.depth.fetch_add(1, Ordering::AcqRel);
        atrace!(depth = self.depth(), "ScrollLock::acquire");
        ScrollLockGuard {
            depth: Arc::clone(&self.depth),
        }
    }

    pub fn depth(&self) -> usize {
        self.depth.load(Ordering::Acquire)
    }

    pub fn is_locked(&self) -> bool {
        self.depth() > 0
    }

    /// Forces the counter back to zero. Guards dropped afterwards do not underflow it.
    pub fn reset(&self) {
        self.depth.store(0, Ordering::Release);
    }
}

/// Holds the page scroll lock until dropped.
#[derive(Debug)]
pub struct ScrollLockGuard {
    depth: Arc<AtomicUsize>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        let _ = self
            .depth
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |d| d.checked_sub(1));
    }
}
