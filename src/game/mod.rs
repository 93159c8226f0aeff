//! The matching engine.
//!
//! A [`Session`] owns the deck and pending [`Turn`] for one playthrough.
//! Callers feed it selections, resolutions and clock ticks and render the
//! returned [`SelectOutcome`]s and [`Resolution`]s.

mod outcome;
mod session;
mod turn;

pub use outcome::{RejectReason, Resolution, SelectOutcome};
pub use session::{Session, SessionPhase};
pub use turn::{Turn, TurnPhase};
