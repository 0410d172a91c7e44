/// One-shot deadline measured against a [`Clock`](crate::Clock) reading
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timer {
    deadline_ms: u64,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire `gap_ms` after `now_ms`
    pub fn schedule(&mut self, now_ms: u64, gap_ms: u32) {
        self.deadline_ms = now_ms.saturating_add(u64::from(gap_ms));
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms >= self.deadline_ms
    }

    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        self.deadline_ms.saturating_sub(now_ms)
    }
}
