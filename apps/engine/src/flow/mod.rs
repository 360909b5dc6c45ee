//! Round/match orchestration: the state machine tying deck, board, scoring,
//! opening resolution, and the computer opponent together.
//!
//! `GameFlow` is the only mutator of game state. Every operation
//! re-validates independently of any earlier query and either applies fully
//! or returns an error having touched nothing.

mod ai_coordinator;
mod player_actions;
mod round_lifecycle;
mod snapshot;

#[cfg(test)]
mod test_support;

pub use ai_coordinator::ComputerTicket;
pub use snapshot::MatchSnapshot;

use serde::Serialize;

use crate::ai::{create_ai, AiConfig, AiPlayer};
use crate::config::MatchConfig;
use crate::domain::scoring::RoundPoints;
use crate::domain::seed_derivation::derive_strategy_seed;
use crate::domain::state::{MatchState, NarrationLog, RoundState, Seat};
use crate::domain::tiles::Tile;

/// Orchestrator states. Exactly one seat may act in each.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Phase {
    /// Human to act; at least one legal move exists (or the board is empty
    /// and the opening tile is theirs).
    AwaitingMove,
    /// Human has no legal move and the boneyard is non-empty; only a draw
    /// is accepted.
    AwaitingDraw,
    /// A played tile was legal on both ends; an explicit side choice is
    /// required before anything else.
    AwaitingSideChoice { hand_index: usize, tile: Tile },
    /// The computer holds the move; resolved through the ticket protocol.
    ComputerTurn,
    /// Round settled; awaiting advance (or match-over acknowledgement).
    RoundReview,
    /// Terminal.
    MatchOver,
}

/// The round/match state machine.
pub struct GameFlow {
    config: MatchConfig,
    strategy: Box<dyn AiPlayer>,
    match_state: MatchState,
    round: RoundState,
    phase: Phase,
    narration: NarrationLog,
    last_round_points: Option<RoundPoints>,
    /// Bumped on every transition; stale computer tickets check against it.
    epoch: u64,
    match_seed: u64,
}

impl GameFlow {
    /// Start a match: seed the strategy, deal round one, resolve the opener.
    pub fn new(config: MatchConfig) -> Self {
        let match_seed = config.seed.unwrap_or_else(rand::random);
        let strategy = create_ai(
            config.difficulty,
            &AiConfig::with_seed(derive_strategy_seed(match_seed)),
        );

        let mut flow = Self {
            strategy,
            match_state: MatchState::new(config.target_score),
            round: RoundState::empty(),
            phase: Phase::RoundReview,
            narration: NarrationLog::default(),
            last_round_points: None,
            epoch: 0,
            match_seed,
            config,
        };
        flow.deal_round();
        flow
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The seat that currently holds the move, if any.
    pub fn current_seat(&self) -> Option<Seat> {
        match self.phase {
            Phase::AwaitingMove | Phase::AwaitingDraw | Phase::AwaitingSideChoice { .. } => {
                Some(Seat::Human)
            }
            Phase::ComputerTurn => Some(Seat::Computer),
            Phase::RoundReview | Phase::MatchOver => None,
        }
    }

    /// The match winner, once decided.
    pub fn winner(&self) -> Option<Seat> {
        self.match_state.winner
    }
}
