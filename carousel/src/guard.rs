/// A strict one-shot click interceptor.
///
/// Armed when a drag ends; swallows exactly one click, then disarms itself. If no click
/// arrives, it disarms on the first [`ClickGuard::expire`] at or after its deadline, so a
/// later legitimate click is never eaten.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickGuard {
    deadline_ms: Option<u64>,
}

impl ClickGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&mut self, now_ms: u64, window_ms: u64) {
        self.deadline_ms = Some(now_ms.saturating_add(window_ms));
    }

    pub fn is_armed(&self) -> bool {
        self.deadline_ms.is_some()
    }

    /// Consumes the guard. Returns `true` when this click must be suppressed.
    pub fn take(&mut self, now_ms: u64) -> bool {
        self.expire(now_ms);
        self.deadline_ms.take().is_some()
    }

    /// Disarms the guard once `now_ms` has passed its deadline.
    pub fn expire(&mut self, now_ms: u64) {
        if let Some(deadline) = self.deadline_ms {
            if now_ms > deadline {
                self.deadline_ms = None;
            }
        }
    }

    pub fn clear(&mut self) {
        self.deadline_ms = None;
    }
}
