//! Cards on the board.
//!
//! A `Card` is pure data: its grid index, the symbol printed on it, and
//! whether it is face down, face up, or already paired. Only the session
//! moves cards between states.

use serde::{Deserialize, Serialize};

/// Symbol printed on a card. Each symbol appears on exactly two cards.
///
/// Symbols display as capital letters: `Symbol(0)` is `A`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Symbol(pub u8);

impl Symbol {
    /// Number of distinct symbols available.
    pub const MAX_DISTINCT: usize = 26;

    /// Create a new symbol.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw symbol value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Letter shown for this symbol.
    #[must_use]
    pub fn letter(self) -> char {
        char::from(b'A' + self.0 % Self::MAX_DISTINCT as u8)
    }

    /// Parse a capital letter back into a symbol.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        letter
            .is_ascii_uppercase()
            .then(|| Self(letter as u8 - b'A'))
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Visibility of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardState {
    /// Face down.
    #[default]
    Hidden,
    /// Face up, waiting for its turn to resolve.
    Revealed,
    /// Paired. Terminal.
    Matched,
}

/// A card at a fixed position in the grid.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    index: usize,
    symbol: Symbol,
    state: CardState,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub fn new(index: usize, symbol: Symbol) -> Self {
        Self {
            index,
            symbol,
            state: CardState::Hidden,
        }
    }

    /// Position in the deck.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Symbol printed on the card.
    #[must_use]
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Current visibility.
    #[must_use]
    pub fn state(&self) -> CardState {
        self.state
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.state == CardState::Hidden
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.state == CardState::Revealed
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.state == CardState::Matched
    }

    /// Turn a hidden card face up. Returns false if it was not hidden.
    pub(crate) fn reveal(&mut self) -> bool {
        if self.state != CardState::Hidden {
            return false;
        }
        self.state = CardState::Revealed;
        true
    }

    /// Turn a revealed card back face down. Matched cards stay matched.
    pub(crate) fn hide(&mut self) {
        if self.state == CardState::Revealed {
            self.state = CardState::Hidden;
        }
    }

    /// Pair a revealed card.
    pub(crate) fn mark_matched(&mut self) {
        if self.state == CardState::Revealed {
            self.state = CardState::Matched;
        }
    }
}
