//! # memory-pairs
//!
//! Engine for a memory-matching card game: flip two cards, keep them if
//! they match, find every pair as fast as possible, then post the time and
//! move count to a leaderboard.
//!
//! ## Design Principles
//!
//! 1. **Pure data**: Cards and sessions are plain values. Rendering binds to
//!    the outcomes the engine returns; the engine owns no UI objects.
//!
//! 2. **No hidden clocks**: The one-second tick and the pause before a pair
//!    resolves are explicit calls, so every rule is testable without real
//!    time passing.
//!
//! 3. **Collaborators behind traits**: Attempt counters and the scoring
//!    service are reached through `AttemptStore` and `Leaderboard`.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, player identity, errors
//! - `cards`: Symbols, cards, deck dealing
//! - `game`: Session state machine and turn resolution
//! - `scoring`: Score records, attempt counters, leaderboard port
//! - `driver`: Single-session owner that schedules ticks and resolutions
//!
//! ## Example
//!
//! ```
//! use memory_pairs::{GameConfig, GameDriver, InMemoryAttemptStore, Player};
//!
//! let mut driver = GameDriver::new(GameConfig::default().with_seed(1), InMemoryAttemptStore::new()).unwrap();
//! let session = driver.new_game(Player::new("ada", "ada@example.org").unwrap()).unwrap();
//! assert_eq!(session.deck().len(), 16);
//! assert_eq!(session.player().attempt(), 1);
//! ```

pub mod cards;
pub mod core;
pub mod driver;
pub mod game;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameError, GameResult, GameRng, GameRngState, LeaderboardError, LeaderboardResult,
    Player,
};

pub use crate::cards::{Card, CardState, Deck, Symbol};

pub use crate::game::{
    RejectReason, Resolution, SelectOutcome, Session, SessionPhase, Turn, TurnPhase,
};

pub use crate::scoring::{
    AttemptStore, InMemoryAttemptStore, InMemoryLeaderboard, Leaderboard, LeaderboardEntry,
    RankedEntry, ScoreRecord, Standings,
};

#[cfg(feature = "http")]
pub use crate::scoring::HttpLeaderboard;

pub use crate::driver::{GameDriver, GameEvent};
