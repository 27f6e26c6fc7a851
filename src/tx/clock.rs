use crate::utils::now_timestamp_ms;

/// Time source for timer-driven UI state. Injectable so tests can advance
/// time deterministically instead of sleeping through real delays.
pub trait Clock {
    fn now_ms(&self) -> i64;
}

#[derive(Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        now_timestamp_ms()
    }
}

#[cfg(test)]
pub(crate) struct ManualClock {
    now: std::cell::Cell<i64>,
}

#[cfg(test)]
impl ManualClock {
    pub(crate) fn new(start_ms: i64) -> Self {
        Self {
            now: std::cell::Cell::new(start_ms),
        }
    }

    pub(crate) fn advance(&self, ms: i64) {
        self.now.set(self.now.get() + ms);
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        self.now.get()
    }
}
