//! Attempt counters.
//!
//! Counters live in an external key-value store keyed by
//! `nickname_email`. The engine only reads the prior count before a new
//! playthrough and writes back the incremented value.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::core::Player;

/// Key-value store for per-player attempt counts.
pub trait AttemptStore {
    /// Stored count for a key, or `None` if the player never played.
    fn load(&self, key: &str) -> Option<u32>;

    /// Overwrite the count for a key.
    fn store(&mut self, key: &str, attempts: u32);

    /// Increment and persist the counter for `player`, returning the new
    /// attempt number.
    fn next_attempt(&mut self, player: &Player) -> u32 {
        let key = player.attempt_key();
        let attempt = self.load(&key).unwrap_or(0).saturating_add(1);
        self.store(&key, attempt);
        debug!(key = %key, attempt, "Attempt counter advanced");
        attempt
    }
}

/// Process-local store. Counters are lost when it is dropped.
#[derive(Clone, Debug, Default)]
pub struct InMemoryAttemptStore {
    counts: FxHashMap<String, u32>,
}

impl InMemoryAttemptStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of players with a stored counter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl AttemptStore for InMemoryAttemptStore {
    fn load(&self, key: &str) -> Option<u32> {
        self.counts.get(key).copied()
    }

    fn store(&mut self, key: &str, attempts: u32) {
        self.counts.insert(key.to_string(), attempts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_attempt_increments_per_player() {
        let mut store = InMemoryAttemptStore::new();
        let ann = Player::new("ann", "ann@example.com").unwrap();
        let ben = Player::new("ben", "ben@example.com").unwrap();

        assert_eq!(store.next_attempt(&ann), 1);
        assert_eq!(store.next_attempt(&ann), 2);
        assert_eq!(store.next_attempt(&ben), 1);

        assert_eq!(store.load("ann_ann@example.com"), Some(2));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_same_nickname_different_email_is_separate() {
        let mut store = InMemoryAttemptStore::new();
        let home = Player::new("ann", "ann@home.org").unwrap();
        let work = Player::new("ann", "ann@work.org").unwrap();

        store.next_attempt(&home);
        store.next_attempt(&home);
        assert_eq!(store.next_attempt(&work), 1);
    }

    #[test]
    fn test_resumes_from_existing_count() {
        let mut store = InMemoryAttemptStore::new();
        store.store("cy_cy@example.com", 7);

        let cy = Player::new("cy", "cy@example.com").unwrap();
        assert_eq!(store.next_attempt(&cy), 8);
    }
}
