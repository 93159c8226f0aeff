//! Player identity.
//!
//! ## Player
//!
//! Nickname, email and the attempt number stamped on a playthrough.
//! Identity is validated on construction so an invalid entry never reaches
//! a session.

use serde::{Deserialize, Serialize};

use super::error::{GameError, GameResult};

/// Longest accepted nickname, in characters.
pub const MAX_NICKNAME_LEN: usize = 32;

/// A validated player identity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    nickname: String,
    email: String,
    attempt: u32,
}

impl Player {
    /// Validate and create a player. The attempt number starts at zero
    /// until a playthrough stamps it.
    ///
    /// ```
    /// use memory_pairs::core::Player;
    ///
    /// let player = Player::new("  ada ", "ada@example.org").unwrap();
    /// assert_eq!(player.nickname(), "ada");
    /// assert_eq!(player.attempt_key(), "ada_ada@example.org");
    ///
    /// assert!(Player::new("", "ada@example.org").is_err());
    /// assert!(Player::new("ada", "not-an-email").is_err());
    /// ```
    pub fn new(nickname: impl AsRef<str>, email: impl AsRef<str>) -> GameResult<Self> {
        let nickname = nickname.as_ref().trim();
        let email = email.as_ref().trim();

        validate_nickname(nickname)?;
        validate_email(email)?;

        Ok(Self {
            nickname: nickname.to_string(),
            email: email.to_string(),
            attempt: 0,
        })
    }

    /// Return the same identity stamped with an attempt number.
    #[must_use]
    pub fn with_attempt(mut self, attempt: u32) -> Self {
        self.attempt = attempt;
        self
    }

    /// Player nickname as shown on the leaderboard.
    #[must_use]
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// Player email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Attempt number of the current playthrough.
    #[must_use]
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    /// Key under which the attempt counter is stored: `nickname_email`.
    #[must_use]
    pub fn attempt_key(&self) -> String {
        format!("{}_{}", self.nickname, self.email)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (attempt {})", self.nickname, self.attempt)
    }
}

fn validate_nickname(nickname: &str) -> GameResult<()> {
    if nickname.is_empty() {
        return Err(GameError::InvalidPlayer("nickname is empty".into()));
    }
    if nickname.chars().count() > MAX_NICKNAME_LEN {
        return Err(GameError::InvalidPlayer(format!(
            "nickname longer than {MAX_NICKNAME_LEN} characters"
        )));
    }
    Ok(())
}

fn validate_email(email: &str) -> GameResult<()> {
    let invalid = || GameError::InvalidPlayer(format!("invalid email address: {email:?}"));

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }

    // Domain needs at least one dot with non-empty labels on both sides.
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return Err(invalid());
    }

    Ok(())
}
