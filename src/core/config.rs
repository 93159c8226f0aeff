//! Game configuration.
//!
//! Every knob has a default matching the classic 4x4 board: eight pairs,
//! one-second clock ticks, a one-second pause before a revealed pair is
//! resolved, and a top-ten leaderboard.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{GameError, GameResult};
use crate::cards::Symbol;

/// Game configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of distinct symbols; the deck holds each twice.
    pub pairs: usize,

    /// Grid width used to map card indices to rows and columns.
    pub columns: usize,

    /// Display pause between the second reveal and its resolution.
    #[serde(with = "millis")]
    pub resolve_delay: Duration,

    /// Clock resolution. One tick adds one second of elapsed time.
    #[serde(with = "millis")]
    pub tick_interval: Duration,

    /// How many leaderboard entries to show.
    pub leaderboard_size: usize,

    /// Fixed shuffle seed. `None` draws one from OS entropy per driver.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pairs: 8,
            columns: 4,
            resolve_delay: Duration::from_millis(1000),
            tick_interval: Duration::from_secs(1),
            leaderboard_size: 10,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse a TOML document. Missing keys take their default.
    ///
    /// ```
    /// use memory_pairs::core::GameConfig;
    ///
    /// let config = GameConfig::from_toml_str("pairs = 6\nseed = 9").unwrap();
    /// assert_eq!(config.pairs, 6);
    /// assert_eq!(config.columns, 4);
    /// assert_eq!(config.seed, Some(9));
    /// ```
    pub fn from_toml_str(source: &str) -> GameResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that all values are usable.
    pub fn validate(&self) -> GameResult<()> {
        if self.pairs == 0 {
            return Err(GameError::InvalidConfig("pairs must be at least 1".into()));
        }
        if self.pairs > Symbol::MAX_DISTINCT {
            return Err(GameError::InvalidConfig(format!(
                "pairs must be at most {}, got {}",
                Symbol::MAX_DISTINCT,
                self.pairs
            )));
        }
        if self.columns == 0 {
            return Err(GameError::InvalidConfig("columns must be at least 1".into()));
        }
        if self.tick_interval.is_zero() {
            return Err(GameError::InvalidConfig("tick_interval must be non-zero".into()));
        }
        Ok(())
    }

    /// Total number of cards on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.pairs * 2
    }

    /// Set the number of pairs.
    #[must_use]
    pub fn with_pairs(mut self, pairs: usize) -> Self {
        self.pairs = pairs;
        self
    }

    /// Set the grid width.
    #[must_use]
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Set the pause before a revealed pair resolves.
    #[must_use]
    pub fn with_resolve_delay(mut self, delay: Duration) -> Self {
        self.resolve_delay = delay;
        self
    }

    /// Set the clock tick interval.
    #[must_use]
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// Set the number of leaderboard rows to keep.
    #[must_use]
    pub fn with_leaderboard_size(mut self, size: usize) -> Self {
        self.leaderboard_size = size;
        self
    }

    /// Pin the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
