use crate::mvi::Intent;
use crate::navigation::state::SettleTicket;

/// The three commands the input boundary accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Previous,
    JumpTo(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationIntent {
    /// Viewer asked to move. Dropped while a transition is in flight.
    Move(NavCommand),
    /// Settle timer for the given transition fired.
    Settle(SettleTicket),
}

impl Intent for NavigationIntent {}
