use crate::config::{CONFIRM_DELAY_MS, DF};
use crate::tx::Clock;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TxStatus {
    Pending,
    Confirmed,
}

/// Simulated submit-and-confirm flow for a single user action.
///
/// Stand-in for a real transaction submission and confirmation poller:
/// `trigger` marks the action Pending and arms a fixed deadline, `poll` flips
/// it to Confirmed once the deadline passes. There is no failure path and no
/// cancellation. Each action (withdraw, deploy) owns its own tracker.
#[derive(Default)]
pub struct TxTracker {
    status: Option<TxStatus>,
    deadline_ms: i64,
}

impl TxTracker {
    /// Start (or restart) the confirmation countdown. A re-trigger while
    /// Pending restarts the timer; the single Confirmed transition is timed
    /// from the most recent trigger.
    pub fn trigger(&mut self, clock: &dyn Clock) {
        self.status = Some(TxStatus::Pending);
        self.deadline_ms = clock.now_ms() + CONFIRM_DELAY_MS;
        if DF.log_tx_events {
            log::info!("tx triggered, confirming at t={}", self.deadline_ms);
        }
    }

    /// Advance the state machine. Called once per frame by the owning screen.
    pub fn poll(&mut self, clock: &dyn Clock) {
        if self.status == Some(TxStatus::Pending) && clock.now_ms() >= self.deadline_ms {
            self.status = Some(TxStatus::Confirmed);
            if DF.log_tx_events {
                log::info!("tx confirmed");
            }
        }
    }

    pub fn status(&self) -> Option<TxStatus> {
        self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status == Some(TxStatus::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tx::ManualClock;

    #[test]
    fn trigger_is_pending_immediately_and_confirms_after_delay() {
        let clock = ManualClock::new(1_000);
        let mut tx = TxTracker::default();
        assert_eq!(tx.status(), None);

        tx.trigger(&clock);
        assert_eq!(tx.status(), Some(TxStatus::Pending));

        clock.advance(CONFIRM_DELAY_MS - 1);
        tx.poll(&clock);
        assert_eq!(tx.status(), Some(TxStatus::Pending));

        clock.advance(1);
        tx.poll(&clock);
        assert_eq!(tx.status(), Some(TxStatus::Confirmed));
    }

    #[test]
    fn retrigger_restarts_the_countdown() {
        let clock = ManualClock::new(0);
        let mut tx = TxTracker::default();

        tx.trigger(&clock);
        clock.advance(CONFIRM_DELAY_MS / 2);
        tx.poll(&clock);
        tx.trigger(&clock);

        // The original deadline passing is not enough any more.
        clock.advance(CONFIRM_DELAY_MS / 2);
        tx.poll(&clock);
        assert_eq!(tx.status(), Some(TxStatus::Pending));

        clock.advance(CONFIRM_DELAY_MS / 2);
        tx.poll(&clock);
        assert_eq!(tx.status(), Some(TxStatus::Confirmed));
    }

    #[test]
    fn poll_without_trigger_is_a_noop() {
        let clock = ManualClock::new(0);
        let mut tx = TxTracker::default();
        tx.poll(&clock);
        assert_eq!(tx.status(), None);
    }
}
