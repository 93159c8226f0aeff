//! One playthrough: deck, pending turn, counters, and the session phase.
//!
//! ## State machine
//!
//! ```text
//! NotStarted ──start──▶ Active ──last match──▶ Completed
//!
//! Active turn cycle:
//!   Empty ──select──▶ OneRevealed ──select──▶ TwoPendingResolution
//!     ▲                                            │
//!     └──────────── resolve_pending_turn ──────────┘
//! ```
//!
//! Nothing leaves `Completed`; a new playthrough needs a new `Session`.
//! The session never sleeps or schedules: the display pause before
//! resolution and the one-second clock are driven from outside (see
//! [`GameDriver`](crate::driver::GameDriver)).

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::outcome::{RejectReason, Resolution, SelectOutcome};
use super::turn::{Turn, TurnPhase};
use crate::cards::{Card, CardState, Deck};
use crate::core::error::{GameError, GameResult};
use crate::core::{GameConfig, GameRng, Player};
use crate::scoring::ScoreRecord;

/// Lifecycle phase of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Dealt but the clock has not started.
    NotStarted,
    /// Accepting selections and ticks.
    Active,
    /// Every pair found. Frozen.
    Completed,
}

/// A single playthrough.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    player: Player,
    deck: Deck,
    columns: usize,
    turn: Turn,
    moves: u32,
    elapsed_seconds: u32,
    matched_pairs: usize,
    phase: SessionPhase,
}

impl Session {
    /// Deal a freshly shuffled deck for `player`. The session is not yet
    /// active; call [`start`](Self::start).
    ///
    /// Fails if `config` does not validate.
    pub fn new(player: Player, config: &GameConfig, rng: &mut GameRng) -> GameResult<Self> {
        config.validate()?;
        let deck = Deck::shuffled(config.pairs, rng)?;
        Ok(Self::with_deck(player, deck).with_columns(config.columns))
    }

    /// Deal and start in one step.
    pub fn new_game(player: Player, config: &GameConfig, rng: &mut GameRng) -> GameResult<Self> {
        let mut session = Self::new(player, config, rng)?;
        session.start();
        Ok(session)
    }

    /// Build a session around a prepared deck, laid out on the default
    /// grid width.
    #[must_use]
    pub fn with_deck(player: Player, deck: Deck) -> Self {
        Self {
            player,
            deck,
            columns: GameConfig::default().columns,
            turn: Turn::new(),
            moves: 0,
            elapsed_seconds: 0,
            matched_pairs: 0,
            phase: SessionPhase::NotStarted,
        }
    }

    /// Lay the deck out `columns` wide. Zero is ignored.
    #[must_use]
    pub fn with_columns(mut self, columns: usize) -> Self {
        if columns > 0 {
            self.columns = columns;
        }
        self
    }

    /// Start the clock. Returns false unless the session was `NotStarted`.
    pub fn start(&mut self) -> bool {
        if self.phase != SessionPhase::NotStarted {
            return false;
        }
        self.phase = SessionPhase::Active;
        info!(
            player = %self.player.nickname(),
            attempt = self.player.attempt(),
            cards = self.deck.len(),
            "Session started"
        );
        true
    }

    /// Select the card at `index`.
    ///
    /// Invalid selections are ignored and reported as
    /// [`SelectOutcome::Rejected`]; they never change state.
    pub fn select_card(&mut self, index: usize) -> SelectOutcome {
        if let Err(reason) = self.check_selectable(index) {
            debug!(index, ?reason, "Selection rejected");
            return SelectOutcome::Rejected(reason);
        }

        if let Some(card) = self.deck.get_mut(index) {
            card.reveal();
        }
        self.turn.push(index);

        match self.turn.pending_pair() {
            Some((first, second)) => {
                self.moves += 1;
                debug!(first, second, moves = self.moves, "Pair revealed");
                SelectOutcome::PendingResolution { first, second }
            }
            None => {
                debug!(index, "First card revealed");
                SelectOutcome::AwaitingSecond { index }
            }
        }
    }

    fn check_selectable(&self, index: usize) -> Result<(), RejectReason> {
        if self.phase != SessionPhase::Active {
            return Err(RejectReason::Inactive);
        }
        if self.turn.is_full() {
            return Err(RejectReason::TurnFull);
        }
        match self.deck.get(index).map(Card::state) {
            None => Err(RejectReason::OutOfRange),
            Some(CardState::Revealed) => Err(RejectReason::AlreadyRevealed),
            Some(CardState::Matched) => Err(RejectReason::AlreadyMatched),
            Some(CardState::Hidden) => Ok(()),
        }
    }

    /// Compare the two pending cards and settle the turn.
    ///
    /// Fails with [`GameError::NoPendingPair`] and leaves state untouched
    /// when fewer than two cards are face up.
    pub fn resolve_pending_turn(&mut self) -> GameResult<Resolution> {
        let (first, second) = self.turn.pending_pair().ok_or(GameError::NoPendingPair {
            revealed: self.turn.len(),
        })?;

        let first_symbol = self.symbol_at(first)?;
        let second_symbol = self.symbol_at(second)?;
        self.turn.clear();

        if first_symbol != second_symbol {
            for index in [first, second] {
                if let Some(card) = self.deck.get_mut(index) {
                    card.hide();
                }
            }
            debug!(first, second, "Mismatch");
            return Ok(Resolution::Mismatch { first, second });
        }

        for index in [first, second] {
            if let Some(card) = self.deck.get_mut(index) {
                card.mark_matched();
            }
        }
        self.matched_pairs += 1;
        debug!(first, second, symbol = %first_symbol, matched = self.matched_pairs, "Match");

        if self.matched_pairs == self.deck.pair_count() {
            self.phase = SessionPhase::Completed;
            info!(
                player = %self.player.nickname(),
                moves = self.moves,
                seconds = self.elapsed_seconds,
                "Session completed"
            );
            return Ok(Resolution::MatchAndComplete {
                first,
                second,
                symbol: first_symbol,
            });
        }

        Ok(Resolution::Match {
            first,
            second,
            symbol: first_symbol,
        })
    }

    fn symbol_at(&self, index: usize) -> GameResult<crate::cards::Symbol> {
        self.deck
            .get(index)
            .map(Card::symbol)
            .ok_or_else(|| GameError::InvalidDeck(format!("pending index {index} out of range")))
    }

    /// Advance the clock by one second. Does nothing unless active.
    pub fn tick(&mut self) -> u32 {
        if self.phase == SessionPhase::Active {
            self.elapsed_seconds += 1;
            trace!(elapsed = self.elapsed_seconds, "Tick");
        }
        self.elapsed_seconds
    }

    /// Score to submit to the leaderboard. Only available once completed.
    pub fn finalize_score(&self) -> GameResult<ScoreRecord> {
        if self.phase != SessionPhase::Completed {
            return Err(GameError::NotCompleted);
        }
        Ok(ScoreRecord::new(&self.player, self.moves, self.elapsed_seconds))
    }

    /// Encode the session for later [`restore`](Self::restore).
    pub fn snapshot(&self) -> GameResult<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot, re-checking every invariant.
    pub fn restore(bytes: &[u8]) -> GameResult<Self> {
        let session: Self = bincode::deserialize(bytes)?;
        session.validate()?;
        Ok(session)
    }

    fn validate(&self) -> GameResult<()> {
        Player::new(self.player.nickname(), self.player.email())?;
        self.deck.validate()?;

        let corrupt = |what: &str| GameError::InvalidDeck(format!("corrupt snapshot: {what}"));

        if self.columns == 0 {
            return Err(corrupt("grid has no columns"));
        }

        if self.turn.len() > Turn::CAPACITY {
            return Err(corrupt("turn holds more than two cards"));
        }
        let revealed = self.deck.iter().filter(|c| c.is_revealed()).count();
        let all_pending_revealed = self
            .turn
            .revealed()
            .iter()
            .all(|&i| self.deck.get(i).is_some_and(Card::is_revealed));
        if revealed != self.turn.len() || !all_pending_revealed {
            return Err(corrupt("revealed cards disagree with the turn"));
        }

        let matched = self.deck.iter().filter(|c| c.is_matched()).count();
        if matched != self.matched_pairs * 2 {
            return Err(corrupt("matched pair count disagrees with the deck"));
        }
        let complete = self.matched_pairs == self.deck.pair_count();
        if complete != (self.phase == SessionPhase::Completed) {
            return Err(corrupt("phase disagrees with matched pairs"));
        }
        Ok(())
    }

    // === Accessors ===

    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Grid width.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Row and column of the card at `index`.
    #[must_use]
    pub fn grid_position(&self, index: usize) -> Option<(usize, usize)> {
        self.deck.grid_position(index, self.columns)
    }

    /// Card at an index.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.deck.get(index)
    }

    #[must_use]
    pub fn turn(&self) -> &Turn {
        &self.turn
    }

    #[must_use]
    pub fn turn_phase(&self) -> TurnPhase {
        self.turn.phase()
    }

    /// Completed pairs of reveals.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase == SessionPhase::Active
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.phase == SessionPhase::Completed
    }
}
