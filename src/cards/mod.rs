//! Card system: symbols, cards, and the deck.
//!
//! ## Key Types
//!
//! - `Symbol`: What is printed on a card; each appears twice
//! - `CardState`: Hidden, revealed, or matched
//! - `Card`: A card at a fixed grid index
//! - `Deck`: The shuffled row of cards for one playthrough

pub mod card;
pub mod deck;

pub use card::{Card, CardState, Symbol};
pub use deck::Deck;
