//! Scoring: the record a finished session produces, attempt counters, and
//! the leaderboard port with its adapters.

pub mod attempts;
#[cfg(feature = "http")]
pub mod http;
pub mod leaderboard;
pub mod record;

pub use attempts::{AttemptStore, InMemoryAttemptStore};
#[cfg(feature = "http")]
pub use http::HttpLeaderboard;
pub use leaderboard::{InMemoryLeaderboard, Leaderboard, LeaderboardEntry, RankedEntry, Standings};
pub use record::ScoreRecord;
