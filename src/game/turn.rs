//! The pending turn: cards face up but not yet resolved.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Where the current turn stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// No card face up.
    Empty,
    /// One card face up, waiting for its partner.
    OneRevealed,
    /// Two cards face up; only resolution can clear them.
    TwoPendingResolution,
}

/// Indices of the cards revealed this turn. Never more than two.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    revealed: SmallVec<[usize; 2]>,
}

impl Turn {
    /// Maximum cards in a turn.
    pub const CAPACITY: usize = 2;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        match self.revealed.len() {
            0 => TurnPhase::Empty,
            1 => TurnPhase::OneRevealed,
            _ => TurnPhase::TwoPendingResolution,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.revealed.len() >= Self::CAPACITY
    }

    /// Revealed indices in selection order.
    #[must_use]
    pub fn revealed(&self) -> &[usize] {
        &self.revealed
    }

    /// The two pending indices once the turn is full.
    #[must_use]
    pub fn pending_pair(&self) -> Option<(usize, usize)> {
        match self.revealed.as_slice() {
            [first, second] => Some((*first, *second)),
            _ => None,
        }
    }

    /// Add a card. Returns false when the turn is already full.
    pub(crate) fn push(&mut self, index: usize) -> bool {
        if self.is_full() {
            return false;
        }
        self.revealed.push(index);
        true
    }

    pub(crate) fn clear(&mut self) {
        self.revealed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_cycle() {
        let mut turn = Turn::new();
        assert_eq!(turn.phase(), TurnPhase::Empty);
        assert_eq!(turn.pending_pair(), None);

        assert!(turn.push(4));
        assert_eq!(turn.phase(), TurnPhase::OneRevealed);
        assert_eq!(turn.pending_pair(), None);

        assert!(turn.push(9));
        assert_eq!(turn.phase(), TurnPhase::TwoPendingResolution);
        assert_eq!(turn.pending_pair(), Some((4, 9)));

        turn.clear();
        assert!(turn.is_empty());
    }

    #[test]
    fn test_turn_never_exceeds_two() {
        let mut turn = Turn::new();
        turn.push(0);
        turn.push(1);

        assert!(!turn.push(2));
        assert_eq!(turn.len(), 2);
        assert_eq!(turn.revealed(), &[0, 1]);
    }
}
