//! Navigation state: current slide plus the transition lock.

use crate::mvi::ReducerState;
use crate::navigation::intent::NavCommand;

/// Identifies one transition so its settle callback can only release the
/// lock it was scheduled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SettleTicket(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPhase {
    #[default]
    Idle,
    /// A transition's settle period is running; every move is dropped.
    Transitioning { ticket: SettleTicket },
}

/// `current` is always in `[0, total)` and `total >= 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    current: usize,
    total: usize,
    phase: TransitionPhase,
    /// Number of transitions started so far; source of ticket numbers.
    transitions: u64,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ReducerState for NavigationState {}

impl NavigationState {
    /// Start at slide 0, idle. A zero `total` is raised to 1.
    pub fn new(total: usize) -> Self {
        Self {
            current: 0,
            total: total.max(1),
            phase: TransitionPhase::Idle,
            transitions: 0,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, TransitionPhase::Transitioning { .. })
    }

    /// Ticket of the transition in flight, if any.
    pub fn pending_ticket(&self) -> Option<SettleTicket> {
        match self.phase {
            TransitionPhase::Transitioning { ticket } => Some(ticket),
            TransitionPhase::Idle => None,
        }
    }

    /// Index `command` would move to from here, or `None` when it is a
    /// no-op (boundary, same index, or out of range).
    pub fn target_of(&self, command: NavCommand) -> Option<usize> {
        match command {
            NavCommand::Next => (self.current + 1 < self.total).then_some(self.current + 1),
            NavCommand::Previous => self.current.checked_sub(1),
            NavCommand::JumpTo(index) => {
                (index < self.total && index != self.current).then_some(index)
            }
        }
    }

    pub fn snapshot(&self) -> NavigationSnapshot {
        NavigationSnapshot {
            index: self.current,
            total: self.total,
            transition_lock: self.is_transitioning(),
        }
    }

    pub(crate) fn begin_transition(self, target: usize) -> Self {
        let transitions = self.transitions + 1;
        Self {
            current: target,
            phase: TransitionPhase::Transitioning {
                ticket: SettleTicket(transitions),
            },
            transitions,
            ..self
        }
    }

    pub(crate) fn settled(self) -> Self {
        Self {
            phase: TransitionPhase::Idle,
            ..self
        }
    }
}

/// Read-only view handed to the shell and to tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationSnapshot {
    pub index: usize,
    pub total: usize,
    pub transition_lock: bool,
}
