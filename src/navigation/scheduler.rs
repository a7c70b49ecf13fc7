//! Settle-timer collaborators.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::navigation::state::SettleTicket;

/// Schedules the return to idle after a transition.
///
/// Implementations must eventually hand `ticket` back to
/// [`Navigator::settle`](super::Navigator::settle), once.
pub trait SettleScheduler: Send {
    fn schedule(&mut self, delay: Duration, ticket: SettleTicket);
}

/// Deterministic scheduler driven by a virtual clock.
///
/// Clones share the same clock and queue, so a test can keep one handle
/// while the navigator owns another.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Arc<Mutex<ManualClock>>,
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    pending: Vec<(Duration, SettleTicket)>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of settle callbacks not yet due.
    pub fn pending(&self) -> usize {
        self.inner.lock().pending.len()
    }

    /// Move the clock forward and return the tickets that fell due, in
    /// deadline order.
    pub fn advance(&self, by: Duration) -> Vec<SettleTicket> {
        let mut clock = self.inner.lock();
        clock.now += by;
        let now = clock.now;
        let (mut due, rest): (Vec<_>, Vec<_>) = clock
            .pending
            .drain(..)
            .partition(|(deadline, _)| *deadline <= now);
        clock.pending = rest;
        due.sort_by_key(|(deadline, ticket)| (*deadline, *ticket));
        due.into_iter().map(|(_, ticket)| ticket).collect()
    }
}

impl SettleScheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration, ticket: SettleTicket) {
        let mut clock = self.inner.lock();
        let deadline = clock.now + delay;
        clock.pending.push((deadline, ticket));
    }
}
