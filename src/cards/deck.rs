//! The deck: an ordered row of cards holding every symbol exactly twice.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{Card, Symbol};
use crate::core::error::{GameError, GameResult};
use crate::core::rng::GameRng;

/// Ordered sequence of cards laid out on the grid.
///
/// Invariant: every symbol present occurs exactly twice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Symbols for an unshuffled deck: `A A B B C C ...`.
    ///
    /// Fails unless `pairs` is between 1 and [`Symbol::MAX_DISTINCT`].
    pub fn ordered_symbols(pairs: usize) -> GameResult<Vec<Symbol>> {
        let distinct = Self::check_pairs(pairs)?;
        Ok((0..distinct)
            .flat_map(|id| [Symbol::new(id), Symbol::new(id)])
            .collect())
    }

    fn check_pairs(pairs: usize) -> GameResult<u8> {
        if pairs == 0 || pairs > Symbol::MAX_DISTINCT {
            return Err(GameError::InvalidDeck(format!(
                "pairs must be between 1 and {}, got {pairs}",
                Symbol::MAX_DISTINCT
            )));
        }
        u8::try_from(pairs).map_err(|_| GameError::InvalidDeck(format!("too many pairs: {pairs}")))
    }

    /// Deal a fresh deck of `pairs` pairs shuffled with Fisher-Yates.
    pub fn shuffled(pairs: usize, rng: &mut GameRng) -> GameResult<Self> {
        let mut symbols = Self::ordered_symbols(pairs)?;
        rng.shuffle(&mut symbols);
        Ok(Self::from_symbols_unchecked(symbols))
    }

    /// Lay out cards in the given symbol order.
    ///
    /// Fails unless every symbol appears exactly twice.
    ///
    /// ```
    /// use memory_pairs::cards::{Deck, Symbol};
    ///
    /// let deck = Deck::from_symbols(Deck::ordered_symbols(2).unwrap()).unwrap();
    /// assert_eq!(deck.len(), 4);
    /// assert_eq!(deck.positions_of(Symbol::new(1)).as_slice(), &[2, 3]);
    ///
    /// assert!(Deck::from_symbols(vec![Symbol::new(0)]).is_err());
    /// ```
    pub fn from_symbols(symbols: Vec<Symbol>) -> GameResult<Self> {
        let deck = Self::from_symbols_unchecked(symbols);
        deck.validate()?;
        Ok(deck)
    }

    /// Parse a deck from capital letters, e.g. `"AABB"`.
    pub fn from_letters(letters: &str) -> GameResult<Self> {
        let symbols = letters
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| {
                Symbol::from_letter(c)
                    .ok_or_else(|| GameError::InvalidDeck(format!("not a symbol letter: {c:?}")))
            })
            .collect::<GameResult<Vec<_>>>()?;
        Self::from_symbols(symbols)
    }

    fn from_symbols_unchecked(symbols: Vec<Symbol>) -> Self {
        let cards = symbols
            .into_iter()
            .enumerate()
            .map(|(index, symbol)| Card::new(index, symbol))
            .collect();
        Self { cards }
    }

    /// Check the pair invariant and that card indices match positions.
    pub fn validate(&self) -> GameResult<()> {
        if self.cards.is_empty() {
            return Err(GameError::InvalidDeck("deck is empty".into()));
        }

        for (position, card) in self.cards.iter().enumerate() {
            if card.index() != position {
                return Err(GameError::InvalidDeck(format!(
                    "card at position {position} claims index {}",
                    card.index()
                )));
            }
        }

        if let Some(card) = self
            .cards
            .iter()
            .find(|card| usize::from(card.symbol().raw()) >= Symbol::MAX_DISTINCT)
        {
            return Err(GameError::InvalidDeck(format!(
                "symbol id {} has no letter",
                card.symbol().raw()
            )));
        }

        let counts = self.symbol_counts();
        if let Some((symbol, count)) = counts.iter().find(|(_, &count)| count != 2) {
            return Err(GameError::InvalidDeck(format!(
                "symbol {symbol} appears {count} time(s), expected 2"
            )));
        }

        Ok(())
    }

    /// How many times each symbol occurs.
    #[must_use]
    pub fn symbol_counts(&self) -> FxHashMap<Symbol, usize> {
        let mut counts = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(card.symbol()).or_insert(0) += 1;
        }
        counts
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Card at an index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.cards.get_mut(index)
    }

    /// Iterate over cards in grid order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Symbols in grid order.
    #[must_use]
    pub fn symbols(&self) -> Vec<Symbol> {
        self.cards.iter().map(Card::symbol).collect()
    }

    /// Indices of the cards carrying `symbol`.
    #[must_use]
    pub fn positions_of(&self, symbol: Symbol) -> SmallVec<[usize; 2]> {
        self.cards
            .iter()
            .filter(|card| card.symbol() == symbol)
            .map(Card::index)
            .collect()
    }

    /// Row and column of `index` on a grid `columns` wide.
    #[must_use]
    pub fn grid_position(&self, index: usize, columns: usize) -> Option<(usize, usize)> {
        if index >= self.cards.len() || columns == 0 {
            return None;
        }
        Some((index / columns, index % columns))
    }

    /// True once every card is matched.
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_symbols() {
        let symbols = Deck::ordered_symbols(3).unwrap();
        let letters: String = symbols.iter().map(|s| s.letter()).collect();
        assert_eq!(letters, "AABBCC");
    }

    #[test]
    fn test_shuffled_deck_keeps_pairs() {
        let mut rng = GameRng::new(42);
        let deck = Deck::shuffled(8, &mut rng).unwrap();

        assert_eq!(deck.len(), 16);
        assert_eq!(deck.pair_count(), 8);
        assert!(deck.validate().is_ok());

        let counts = deck.symbol_counts();
        assert_eq!(counts.len(), 8);
        assert!(counts.values().all(|&c| c == 2));
        assert!(deck.iter().all(Card::is_hidden));
    }

    #[test]
    fn test_shuffle_changes_order() {
        let mut rng = GameRng::new(42);
        let deck = Deck::shuffled(8, &mut rng).unwrap();

        // Same multiset, different order (very likely)
        assert_ne!(deck.symbols(), Deck::ordered_symbols(8).unwrap());
        let mut sorted = deck.symbols();
        sorted.sort();
        assert_eq!(sorted, Deck::ordered_symbols(8).unwrap());
    }

    #[test]
    fn test_reshuffle_differs() {
        let mut rng = GameRng::new(7);
        let first = Deck::shuffled(8, &mut rng).unwrap();
        let second = Deck::shuffled(8, &mut rng).unwrap();
        assert_ne!(first.symbols(), second.symbols());
    }

    #[test]
    fn test_from_letters() {
        let deck = Deck::from_letters("ABBA").unwrap();
        assert_eq!(deck.positions_of(Symbol::new(0)).as_slice(), &[0, 3]);
        assert_eq!(deck.get(1).map(Card::symbol), Some(Symbol::new(1)));

        assert!(Deck::from_letters("AAB").is_err());
        assert!(Deck::from_letters("AAA").is_err());
        assert!(Deck::from_letters("aa").is_err());
        assert!(Deck::from_letters("").is_err());
    }

    #[test]
    fn test_pair_count_bounds() {
        let mut rng = GameRng::new(1);
        assert!(matches!(Deck::shuffled(0, &mut rng), Err(GameError::InvalidDeck(_))));
        assert!(matches!(Deck::shuffled(27, &mut rng), Err(GameError::InvalidDeck(_))));
        // Would wrap to 44 as a u8.
        assert!(matches!(Deck::shuffled(300, &mut rng), Err(GameError::InvalidDeck(_))));
        assert!(Deck::ordered_symbols(0).is_err());

        let full = Deck::shuffled(Symbol::MAX_DISTINCT, &mut rng).unwrap();
        let letters: std::collections::BTreeSet<char> =
            full.iter().map(|c| c.symbol().letter()).collect();
        assert_eq!(letters.len(), Symbol::MAX_DISTINCT);
    }

    #[test]
    fn test_rejects_symbols_without_letters() {
        let beyond = Symbol::new(Symbol::MAX_DISTINCT as u8);
        assert!(Deck::from_symbols(vec![beyond, beyond]).is_err());
    }

    #[test]
    fn test_grid_position() {
        let deck = Deck::shuffled(8, &mut GameRng::new(3)).unwrap();
        assert_eq!(deck.grid_position(0, 4), Some((0, 0)));
        assert_eq!(deck.grid_position(5, 4), Some((1, 1)));
        assert_eq!(deck.grid_position(15, 4), Some((3, 3)));
        assert_eq!(deck.grid_position(16, 4), None);
        assert_eq!(deck.grid_position(0, 0), None);
    }
}
