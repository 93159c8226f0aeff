//! Results reported to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::cards::Symbol;

/// Why a selection was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// The session has not started or is already completed.
    Inactive,
    /// No card at that index.
    OutOfRange,
    /// The card is already face up.
    AlreadyRevealed,
    /// The card is already paired.
    AlreadyMatched,
    /// Two cards are waiting for resolution.
    TurnFull,
}

/// Result of selecting a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// First card of a pair is face up.
    AwaitingSecond { index: usize },
    /// Second card is face up; call `resolve_pending_turn` after the
    /// display delay.
    PendingResolution { first: usize, second: usize },
    /// Nothing changed.
    Rejected(RejectReason),
}

impl SelectOutcome {
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, SelectOutcome::Rejected(_))
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, SelectOutcome::PendingResolution { .. })
    }
}

/// Result of resolving a pending pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// Both cards are now matched.
    Match { first: usize, second: usize, symbol: Symbol },
    /// The last pair was found; the session is completed.
    MatchAndComplete { first: usize, second: usize, symbol: Symbol },
    /// Both cards went back face down.
    Mismatch { first: usize, second: usize },
}

impl Resolution {
    /// True for both match variants.
    #[must_use]
    pub fn is_match(&self) -> bool {
        !matches!(self, Resolution::Mismatch { .. })
    }

    /// True when this resolution completed the session.
    #[must_use]
    pub fn completes(&self) -> bool {
        matches!(self, Resolution::MatchAndComplete { .. })
    }

    /// The two indices that were resolved.
    #[must_use]
    pub fn indices(&self) -> (usize, usize) {
        match *self {
            Resolution::Match { first, second, .. }
            | Resolution::MatchAndComplete { first, second, .. }
            | Resolution::Mismatch { first, second } => (first, second),
        }
    }
}
