//! Navigation state machine.
//!
//! ```text
//!            Move (target valid)
//!   Idle ──────────────────────────→ Transitioning { ticket }
//!    ↑                                   │   Move → dropped
//!    └────────── Settle(ticket) ─────────┘
//! ```

mod intent;
mod navigator;
mod reducer;
mod scheduler;
mod state;

pub use intent::{NavCommand, NavigationIntent};
pub use navigator::{
    MoveOutcome, NavigationError, NavigationObserver, Navigator, SlideChange, DEFAULT_SETTLE,
};
pub use reducer::NavigationReducer;
pub use scheduler::{ManualScheduler, SettleScheduler};
pub use state::{NavigationSnapshot, NavigationState, SettleTicket, TransitionPhase};
