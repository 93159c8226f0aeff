//! Session owner and scheduler.
//!
//! `GameDriver` is the one place that holds the active [`Session`]. It
//! stamps attempt numbers from an [`AttemptStore`], deals fresh decks, and
//! turns wall-clock time handed to [`advance`](GameDriver::advance) into
//! clock ticks and deferred resolutions. It never sleeps: the caller owns
//! the real timer and reports how much time passed.

use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use crate::core::error::{GameError, GameResult};
use crate::core::{GameConfig, GameRng, GameRngState, Player};
use crate::game::{Resolution, SelectOutcome, Session};
use crate::scoring::{AttemptStore, ScoreRecord};

/// Something that happened while time advanced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// The clock ticked.
    Tick { elapsed_seconds: u32 },
    /// The display pause ran out and the pending pair was resolved.
    Resolved(Resolution),
}

/// Owns at most one session at a time.
#[derive(Debug)]
pub struct GameDriver<S> {
    config: GameConfig,
    rng: GameRng,
    attempts: S,
    session: Option<Session>,
    /// Time accumulated toward the next tick.
    since_tick: Duration,
    /// Time left before the pending pair resolves.
    resolve_in: Option<Duration>,
}

impl<S: AttemptStore> GameDriver<S> {
    /// Create a driver. Fails if the configuration is invalid.
    pub fn new(config: GameConfig, attempts: S) -> GameResult<Self> {
        config.validate()?;
        let rng = GameRng::from_seed_or_entropy(config.seed);
        Ok(Self {
            config,
            rng,
            attempts,
            session: None,
            since_tick: Duration::ZERO,
            resolve_in: None,
        })
    }

    /// Start a playthrough for `player`, discarding any current session.
    ///
    /// The attempt counter is read, incremented and written back before the
    /// deck is dealt.
    #[instrument(skip(self, player), fields(player = %player.nickname()))]
    pub fn new_game(&mut self, player: Player) -> GameResult<&Session> {
        self.stop_clock();
        if self.session.take().is_some() {
            debug!("Discarding previous session");
        }

        let attempt = self.attempts.next_attempt(&player);
        let player = player.with_attempt(attempt);
        info!(attempt, "New game");

        let session = Session::new_game(player, &self.config, &mut self.rng)?;
        Ok(self.session.insert(session))
    }

    /// Start a new playthrough for the current player.
    pub fn try_again(&mut self) -> GameResult<&Session> {
        let player = self.session()?.player().clone();
        self.new_game(player)
    }

    /// Drop the current session and stop its clock.
    pub fn abandon(&mut self) -> Option<Session> {
        self.stop_clock();
        let session = self.session.take();
        if session.is_some() {
            info!("Session abandoned");
        }
        session
    }

    fn stop_clock(&mut self) {
        self.since_tick = Duration::ZERO;
        self.resolve_in = None;
    }

    /// Select a card. A second reveal schedules resolution after the
    /// configured display delay.
    pub fn select_card(&mut self, index: usize) -> GameResult<SelectOutcome> {
        let delay = self.config.resolve_delay;
        let outcome = self.session_mut()?.select_card(index);
        if outcome.is_pending() {
            self.resolve_in = Some(delay);
            debug!(?delay, "Resolution scheduled");
        }
        Ok(outcome)
    }

    /// Resolve the pending pair now instead of waiting for the delay.
    pub fn resolve_now(&mut self) -> GameResult<Resolution> {
        let resolution = self.session_mut()?.resolve_pending_turn()?;
        self.resolve_in = None;
        Ok(resolution)
    }

    /// Let `elapsed` wall-clock time pass.
    ///
    /// Events come back in time order. When a tick and a resolution fall
    /// on the same instant the tick comes first.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<GameEvent> {
        let mut events = Vec::new();
        let interval = self.config.tick_interval;
        let mut left = elapsed;

        loop {
            let running = self.session.as_ref().is_some_and(Session::is_active);
            if !running && self.resolve_in.is_none() {
                break;
            }

            let until_tick = interval.saturating_sub(self.since_tick);
            let step = self.resolve_in.map_or(until_tick, |r| r.min(until_tick));
            if step > left {
                self.since_tick += left;
                self.resolve_in = self.resolve_in.map(|r| r - left);
                break;
            }

            left -= step;
            self.since_tick += step;
            self.resolve_in = self.resolve_in.map(|r| r - step);

            if self.since_tick >= interval {
                self.since_tick = Duration::ZERO;
                if let Some(session) = self.session.as_mut().filter(|s| s.is_active()) {
                    let elapsed_seconds = session.tick();
                    events.push(GameEvent::Tick { elapsed_seconds });
                }
            }

            if self.resolve_in == Some(Duration::ZERO) {
                self.resolve_in = None;
                if let Some(session) = self.session.as_mut() {
                    match session.resolve_pending_turn() {
                        Ok(resolution) => events.push(GameEvent::Resolved(resolution)),
                        Err(err) => warn!(error = %err, "Scheduled resolution failed"),
                    }
                }
            }
        }

        events
    }

    /// Score of the completed session.
    pub fn finalize_score(&self) -> GameResult<ScoreRecord> {
        self.session()?.finalize_score()
    }

    /// The current session.
    pub fn session(&self) -> GameResult<&Session> {
        self.session.as_ref().ok_or(GameError::NoSession)
    }

    fn session_mut(&mut self) -> GameResult<&mut Session> {
        self.session.as_mut().ok_or(GameError::NoSession)
    }

    /// True while a resolution is scheduled.
    #[must_use]
    pub fn resolution_scheduled(&self) -> bool {
        self.resolve_in.is_some()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn attempts(&self) -> &S {
        &self.attempts
    }

    /// RNG position, for reproducing the next deal.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}
