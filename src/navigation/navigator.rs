//! The navigation controller: sole writer of [`NavigationState`].

use std::time::Duration;

use thiserror::Error;

use crate::deck::Deck;
use crate::mvi::Reducer;
use crate::navigation::intent::{NavCommand, NavigationIntent};
use crate::navigation::reducer::NavigationReducer;
use crate::navigation::scheduler::SettleScheduler;
use crate::navigation::state::{NavigationSnapshot, NavigationState, SettleTicket};

/// Default settle period of a transition.
pub const DEFAULT_SETTLE: Duration = Duration::from_millis(600);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    /// `JumpTo` outside the deck. Input adapters must never produce this.
    #[error("Jump target {target} out of range for deck of {total} slides")]
    TargetOutOfRange { target: usize, total: usize },
}

/// Result of a [`Navigator::request_move`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved { from: usize, to: usize },
    /// Boundary or same-index request; nothing happened.
    Unchanged,
    /// A transition was in flight; the request was discarded.
    Dropped,
}

impl MoveOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Payload delivered to observers after each successful transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideChange {
    pub index: usize,
    pub total: usize,
}

pub trait NavigationObserver: Send {
    fn on_slide_changed(&mut self, change: SlideChange);
}

impl<F> NavigationObserver for F
where
    F: FnMut(SlideChange) + Send,
{
    fn on_slide_changed(&mut self, change: SlideChange) {
        self(change)
    }
}

/// Owns the navigation state and applies commands to it.
///
/// Every successful move enters the transitioning phase, schedules exactly
/// one settle callback and notifies observers once. Moves arriving before
/// the callback is handed back through [`settle`](Self::settle) are dropped.
pub struct Navigator {
    state: NavigationState,
    scheduler: Box<dyn SettleScheduler>,
    settle_after: Duration,
    observers: Vec<Box<dyn NavigationObserver>>,
}

impl Navigator {
    pub fn new(
        deck: &Deck,
        scheduler: impl SettleScheduler + 'static,
        settle_after: Duration,
    ) -> Self {
        Self {
            state: NavigationState::new(deck.len()),
            scheduler: Box::new(scheduler),
            settle_after,
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: impl NavigationObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn snapshot(&self) -> NavigationSnapshot {
        self.state.snapshot()
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn request_move(&mut self, command: NavCommand) -> Result<MoveOutcome, NavigationError> {
        if self.state.is_transitioning() {
            tracing::trace!(?command, "Transition in flight, dropping move");
            return Ok(MoveOutcome::Dropped);
        }

        if let NavCommand::JumpTo(target) = command {
            let total = self.state.total();
            if target >= total {
                tracing::error!(jump = target, total, "Jump target out of range");
                return Err(NavigationError::TargetOutOfRange { target, total });
            }
        }

        let from = self.state.current();
        self.dispatch(NavigationIntent::Move(command));

        let Some(ticket) = self.state.pending_ticket() else {
            return Ok(MoveOutcome::Unchanged);
        };

        let to = self.state.current();
        tracing::debug!(from, to, ticket = ticket.0, "Slide transition");
        self.scheduler.schedule(self.settle_after, ticket);

        let change = SlideChange {
            index: to,
            total: self.state.total(),
        };
        for observer in &mut self.observers {
            observer.on_slide_changed(change);
        }

        Ok(MoveOutcome::Moved { from, to })
    }

    /// Hand back a settle callback. Returns true if it released the lock.
    pub fn settle(&mut self, ticket: SettleTicket) -> bool {
        let was_locked = self.state.is_transitioning();
        self.dispatch(NavigationIntent::Settle(ticket));
        let released = was_locked && !self.state.is_transitioning();
        if !released {
            tracing::trace!(ticket = ticket.0, "Ignoring stale settle");
        }
        released
    }

    fn dispatch(&mut self, intent: NavigationIntent) {
        self.state = NavigationReducer::reduce(std::mem::take(&mut self.state), intent);
    }
}
