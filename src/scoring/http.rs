//! HTTP adapter for the scoring service.
//!
//! `GET {base}/leaderboard` returns a JSON array of
//! `{nickname, seconds, tries}`; `POST {base}/scores` accepts a
//! [`ScoreRecord`] as JSON.

use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

use super::leaderboard::{Leaderboard, LeaderboardEntry};
use super::record::ScoreRecord;
use crate::core::error::{LeaderboardError, LeaderboardResult};

/// Leaderboard reached over HTTP with JSON bodies.
#[derive(Debug, Clone)]
pub struct HttpLeaderboard {
    base_url: String,
    client: reqwest::Client,
}

impl HttpLeaderboard {
    /// Create an adapter for the service rooted at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Create an adapter sharing an existing client.
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the leaderboard listing.
    pub fn leaderboard_url(&self) -> String {
        format!("{}/leaderboard", self.base_url)
    }

    /// URL scores are posted to.
    pub fn scores_url(&self) -> String {
        format!("{}/scores", self.base_url)
    }
}

fn transport(err: reqwest::Error) -> LeaderboardError {
    warn!(error = %err, "Leaderboard request failed");
    LeaderboardError::Transport(err.to_string())
}

#[async_trait]
impl Leaderboard for HttpLeaderboard {
    #[instrument(skip(self), fields(url = %self.leaderboard_url()))]
    async fn fetch(&self) -> LeaderboardResult<Vec<LeaderboardEntry>> {
        let response = self
            .client
            .get(self.leaderboard_url())
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Leaderboard fetch refused");
            return Err(LeaderboardError::Status(status.as_u16()));
        }

        let entries: Vec<LeaderboardEntry> = response
            .json()
            .await
            .map_err(|e| LeaderboardError::Decode(e.to_string()))?;
        debug!(count = entries.len(), "Leaderboard fetched");
        Ok(entries)
    }

    #[instrument(skip(self, record), fields(nickname = %record.nickname))]
    async fn submit(&self, record: &ScoreRecord) -> LeaderboardResult<()> {
        let response = self
            .client
            .post(self.scores_url())
            .json(record)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if status.is_client_error() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Score rejected");
            return Err(LeaderboardError::Rejected(body));
        }
        if !status.is_success() {
            warn!(status = status.as_u16(), "Score submission failed");
            return Err(LeaderboardError::Status(status.as_u16()));
        }

        info!(
            seconds = record.elapsed_seconds,
            tries = record.moves,
            "Score submitted"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_strip_trailing_slash() {
        let board = HttpLeaderboard::new("https://scores.example.com/api/");
        assert_eq!(board.base_url(), "https://scores.example.com/api");
        assert_eq!(board.leaderboard_url(), "https://scores.example.com/api/leaderboard");
        assert_eq!(board.scores_url(), "https://scores.example.com/api/scores");
    }
}
