//! Presentation-facing snapshot of the whole match.
//!
//! Emitted after every transition; immutable, serializable, and free of any
//! engine internals. The presentation renders it and calls back into
//! `GameFlow` operations, never the other way around.

use serde::Serialize;

use super::{GameFlow, Phase};
use crate::domain::scoring::RoundPoints;
use crate::domain::state::Seat;
use crate::domain::tiles::Tile;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchSnapshot {
    pub player_hand: Vec<Tile>,
    pub computer_hand: Vec<Tile>,
    pub board: Vec<Tile>,
    pub boneyard_len: usize,
    pub phase: Phase,
    pub current_seat: Option<Seat>,
    /// The designated first tile of a fresh round, while the constraint is
    /// active.
    pub opening_tile: Option<Tile>,
    pub player_score: u32,
    pub computer_score: u32,
    pub target_score: u32,
    pub round_no: u32,
    /// Points awarded by the most recent settlement, for the review screen.
    pub last_round_points: Option<RoundPoints>,
    pub winner: Option<Seat>,
    pub is_match_over: bool,
    /// Rolling most-recent-3 narration lines, oldest first.
    pub narration: Vec<String>,
}

impl GameFlow {
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            player_hand: self.round.hand(Seat::Human).to_vec(),
            computer_hand: self.round.hand(Seat::Computer).to_vec(),
            board: self.round.board.tiles().to_vec(),
            boneyard_len: self.round.boneyard.len(),
            phase: self.phase,
            current_seat: self.current_seat(),
            opening_tile: self.round.opening.as_ref().map(|o| o.tile),
            player_score: self.match_state.score(Seat::Human),
            computer_score: self.match_state.score(Seat::Computer),
            target_score: self.match_state.target_score,
            round_no: self.match_state.round_no,
            last_round_points: self.last_round_points,
            winner: self.match_state.winner,
            is_match_over: self.phase == Phase::MatchOver,
            narration: self.narration.entries().to_vec(),
        }
    }
}
