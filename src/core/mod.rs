//! Core engine types: RNG, configuration, player identity, errors.
//!
//! Everything here is independent of the matching rules so that decks,
//! sessions and scoring can share it.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::GameConfig;
pub use error::{GameError, GameResult, LeaderboardError, LeaderboardResult};
pub use player::{Player, MAX_NICKNAME_LEN};
pub use rng::{GameRng, GameRngState};
