//! Score record produced by a completed session.

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// Final result of a playthrough, in the shape the scoring service expects.
///
/// Serializes as `{nickname, email, attemptNumber, tries, seconds}`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub nickname: String,
    pub email: String,
    pub attempt_number: u32,
    /// Completed pairs of reveals.
    #[serde(rename = "tries")]
    pub moves: u32,
    #[serde(rename = "seconds")]
    pub elapsed_seconds: u32,
}

impl ScoreRecord {
    #[must_use]
    pub fn new(player: &Player, moves: u32, elapsed_seconds: u32) -> Self {
        Self {
            nickname: player.nickname().to_string(),
            email: player.email().to_string(),
            attempt_number: player.attempt(),
            moves,
            elapsed_seconds,
        }
    }
}
