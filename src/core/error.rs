//! Error types for the engine and its collaborators.

/// Errors raised by the game engine.
///
/// Rejected card selections are not errors: they are reported through
/// [`SelectOutcome::Rejected`](crate::game::SelectOutcome::Rejected).
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Nickname or email failed validation; no session was created.
    #[error("Invalid player: {0}")]
    InvalidPlayer(String),

    /// Configuration values are out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A deck does not hold every symbol exactly twice.
    #[error("Invalid deck: {0}")]
    InvalidDeck(String),

    /// `resolve_pending_turn` was called without two revealed cards.
    #[error("No pending pair to resolve ({revealed} card(s) revealed)")]
    NoPendingPair {
        /// Number of cards currently in the turn.
        revealed: usize,
    },

    /// A score was requested before every pair was found.
    #[error("Session is not completed")]
    NotCompleted,

    /// An operation needed a session but none has been started.
    #[error("No session has been started")]
    NoSession,

    /// Snapshot encoding or decoding failed.
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),

    /// TOML configuration could not be parsed.
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// A convenience type alias for `Result<T, GameError>`.
pub type GameResult<T> = Result<T, GameError>;

/// Errors raised by leaderboard adapters.
///
/// None of these affect game state; callers report them and move on.
#[derive(Debug, thiserror::Error)]
pub enum LeaderboardError {
    /// The request never produced a response.
    #[error("Leaderboard transport error: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("Leaderboard returned status {0}")]
    Status(u16),

    /// The response body could not be decoded.
    #[error("Leaderboard response could not be decoded: {0}")]
    Decode(String),

    /// The service refused the submitted score.
    #[error("Score rejected: {0}")]
    Rejected(String),
}

/// A convenience type alias for `Result<T, LeaderboardError>`.
pub type LeaderboardResult<T> = Result<T, LeaderboardError>;
