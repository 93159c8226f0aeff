//! Leaderboard port and ranking.
//!
//! The scoring service is an opaque collaborator behind the [`Leaderboard`]
//! trait. Failures there are reported to the player and never touch game
//! state.

use std::cmp::Ordering;
use std::sync::Mutex;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::record::ScoreRecord;
use crate::core::error::{LeaderboardError, LeaderboardResult};

/// One row as returned by the scoring service.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub nickname: String,
    pub seconds: u32,
    pub tries: u32,
}

impl LeaderboardEntry {
    #[must_use]
    pub fn new(nickname: impl Into<String>, seconds: u32, tries: u32) -> Self {
        Self {
            nickname: nickname.into(),
            seconds,
            tries,
        }
    }

    /// Ranking order: faster first, then fewer tries, then nickname.
    #[must_use]
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        self.seconds
            .cmp(&other.seconds)
            .then(self.tries.cmp(&other.tries))
            .then_with(|| self.nickname.cmp(&other.nickname))
    }
}

impl From<&ScoreRecord> for LeaderboardEntry {
    fn from(record: &ScoreRecord) -> Self {
        Self::new(record.nickname.clone(), record.elapsed_seconds, record.moves)
    }
}

/// An entry with its 1-based rank.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub rank: usize,
    pub entry: LeaderboardEntry,
}

/// The top of the leaderboard, ready to display.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    rows: Vec<RankedEntry>,
}

impl Standings {
    /// Keep the first `limit` entries in the order the service returned
    /// them, numbered from 1.
    ///
    /// ```
    /// use memory_pairs::scoring::{LeaderboardEntry, Standings};
    ///
    /// let entries = vec![
    ///     LeaderboardEntry::new("slow", 90, 12),
    ///     LeaderboardEntry::new("fast", 30, 9),
    /// ];
    /// let standings = Standings::from_entries(entries.clone(), 10);
    /// assert_eq!(standings.position_of("slow"), Some(1));
    ///
    /// let ranked = Standings::ranked(entries, 10);
    /// assert_eq!(ranked.position_of("fast"), Some(1));
    /// ```
    #[must_use]
    pub fn from_entries(entries: Vec<LeaderboardEntry>, limit: usize) -> Self {
        let rows = entries
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(i, entry)| RankedEntry { rank: i + 1, entry })
            .collect();
        Self { rows }
    }

    /// Sort by [`LeaderboardEntry::rank_cmp`] before taking the top `limit`.
    #[must_use]
    pub fn ranked(mut entries: Vec<LeaderboardEntry>, limit: usize) -> Self {
        entries.sort_by(LeaderboardEntry::rank_cmp);
        Self::from_entries(entries, limit)
    }

    /// Rows in display order.
    #[must_use]
    pub fn rows(&self) -> &[RankedEntry] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Best rank held by `nickname`, if it made the cut.
    #[must_use]
    pub fn position_of(&self, nickname: &str) -> Option<usize> {
        self.rows
            .iter()
            .find(|row| row.entry.nickname == nickname)
            .map(|row| row.rank)
    }
}

/// Remote scoring service.
#[async_trait]
pub trait Leaderboard: Send + Sync {
    /// All entries the service is willing to return.
    async fn fetch(&self) -> LeaderboardResult<Vec<LeaderboardEntry>>;

    /// Submit a finished score. No retry on failure.
    async fn submit(&self, record: &ScoreRecord) -> LeaderboardResult<()>;

    /// Fetch and number the first `limit` entries, keeping the service's
    /// order.
    async fn standings(&self, limit: usize) -> LeaderboardResult<Standings> {
        let entries = self.fetch().await?;
        debug!(count = entries.len(), limit, "Ranking leaderboard");
        Ok(Standings::from_entries(entries, limit))
    }
}

/// Leaderboard kept in process memory, for offline play and tests.
///
/// Entries are held ranked, so `fetch` answers best first like the
/// scoring service does.
#[derive(Debug, Default)]
pub struct InMemoryLeaderboard {
    entries: Mutex<Vec<LeaderboardEntry>>,
}

impl InMemoryLeaderboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the board with existing entries.
    #[must_use]
    pub fn with_entries(mut entries: Vec<LeaderboardEntry>) -> Self {
        entries.sort_by(LeaderboardEntry::rank_cmp);
        Self {
            entries: Mutex::new(entries),
        }
    }

    fn lock(&self) -> LeaderboardResult<std::sync::MutexGuard<'_, Vec<LeaderboardEntry>>> {
        self.entries
            .lock()
            .map_err(|e| LeaderboardError::Transport(e.to_string()))
    }
}

#[async_trait]
impl Leaderboard for InMemoryLeaderboard {
    async fn fetch(&self) -> LeaderboardResult<Vec<LeaderboardEntry>> {
        Ok(self.lock()?.clone())
    }

    async fn submit(&self, record: &ScoreRecord) -> LeaderboardResult<()> {
        let entry = LeaderboardEntry::from(record);
        let mut entries = self.lock()?;
        let at = entries.partition_point(|e| e.rank_cmp(&entry).is_le());
        entries.insert(at, entry);
        info!(nickname = %record.nickname, seconds = record.elapsed_seconds, "Score recorded");
        Ok(())
    }
}
