//! Human-seat actions: playing a tile, choosing a side, drawing.
//!
//! Each action re-validates against current state; presentation queries can
//! go stale between query and action.

use tracing::debug;

use super::{GameFlow, Phase};
use crate::domain::board::{possible_placements, End};
use crate::domain::scoring::RoundOutcome;
use crate::domain::state::Seat;
use crate::errors::domain::{DomainError, ValidationKind};

impl GameFlow {
    /// Play the hand tile at `hand_index`.
    ///
    /// While the board is empty only the designated opening tile is
    /// accepted. A tile legal on exactly one end is applied immediately; a
    /// tile legal on both ends parks the flow in
    /// [`Phase::AwaitingSideChoice`] until [`GameFlow::choose_side`].
    pub fn play_tile(&mut self, hand_index: usize) -> Result<(), DomainError> {
        match self.phase {
            Phase::AwaitingMove => {}
            Phase::AwaitingDraw => {
                return Err(DomainError::validation(
                    ValidationKind::PhaseMismatch,
                    "no legal move; draw from the boneyard first",
                ));
            }
            Phase::AwaitingSideChoice { .. } => {
                return Err(DomainError::validation(
                    ValidationKind::PhaseMismatch,
                    "a side choice is pending",
                ));
            }
            Phase::ComputerTurn => {
                return Err(DomainError::validation(
                    ValidationKind::OutOfTurn,
                    "the computer holds the move",
                ));
            }
            Phase::RoundReview | Phase::MatchOver => {
                return Err(DomainError::validation(
                    ValidationKind::PhaseMismatch,
                    "the round is not in play",
                ));
            }
        }

        let tile = *self
            .round
            .hand(Seat::Human)
            .get(hand_index)
            .ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::TileNotInHand,
                    format!("no hand tile at index {hand_index}"),
                )
            })?;

        if self.round.board.is_empty() {
            if let Some(opening) = &self.round.opening {
                if opening.seat != Seat::Human {
                    return Err(DomainError::validation(
                        ValidationKind::OutOfTurn,
                        "the opening lead is not yours",
                    ));
                }
                if !tile.same_tile(opening.tile) {
                    return Err(DomainError::validation(
                        ValidationKind::NotOpeningTile,
                        format!("the round must open with {}", opening.tile),
                    ));
                }
            }
        }

        let placements = possible_placements(tile, &self.round.board);
        match placements.as_slice() {
            [] => Err(DomainError::validation(
                ValidationKind::TileNotPlayable,
                format!("{tile} fits neither open end"),
            )),
            [only] => self.apply_human_placement(hand_index, *only),
            _ => {
                self.phase = Phase::AwaitingSideChoice { hand_index, tile };
                self.epoch += 1;
                Ok(())
            }
        }
    }

    /// Resolve a pending both-ends-legal placement.
    pub fn choose_side(&mut self, end: End) -> Result<(), DomainError> {
        let Phase::AwaitingSideChoice { hand_index, tile } = self.phase else {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "no side choice is pending",
            ));
        };

        if self.round.hand(Seat::Human).get(hand_index).copied() != Some(tile) {
            return Err(DomainError::validation_other(
                "invariant: pending tile no longer at its recorded index",
            ));
        }
        if !possible_placements(tile, &self.round.board).contains(&end) {
            return Err(DomainError::validation(
                ValidationKind::TileNotPlayable,
                format!("{tile} cannot attach on the {} side", end.as_str()),
            ));
        }

        self.apply_human_placement(hand_index, end)
    }

    /// Draw one tile from the boneyard. Only legal when no move exists; the
    /// turn does not pass, the human acts again.
    pub fn draw(&mut self) -> Result<(), DomainError> {
        match self.phase {
            Phase::AwaitingDraw => {}
            Phase::AwaitingMove | Phase::AwaitingSideChoice { .. } => {
                return Err(DomainError::validation(
                    ValidationKind::DrawWhileMovesExist,
                    "a legal move exists; drawing is not allowed",
                ));
            }
            Phase::ComputerTurn => {
                return Err(DomainError::validation(
                    ValidationKind::OutOfTurn,
                    "the computer holds the move",
                ));
            }
            Phase::RoundReview | Phase::MatchOver => {
                return Err(DomainError::validation(
                    ValidationKind::PhaseMismatch,
                    "the round is not in play",
                ));
            }
        }

        let tile = self.round.boneyard.pop().ok_or_else(|| {
            DomainError::validation(ValidationKind::BoneyardEmpty, "the boneyard is empty")
        })?;
        debug!(tile = %tile, "human drew");
        self.round.hand_mut(Seat::Human).push(tile);
        self.narration.push("You draw a fresh domino.");

        self.enter_human_turn();
        self.epoch += 1;
        Ok(())
    }

    /// Attach the tile and hand the move over (or end the round).
    fn apply_human_placement(&mut self, hand_index: usize, end: End) -> Result<(), DomainError> {
        let tile = *self
            .round
            .hand(Seat::Human)
            .get(hand_index)
            .ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::TileNotInHand,
                    format!("no hand tile at index {hand_index}"),
                )
            })?;

        self.round.board.place(tile, end)?;
        self.round.hand_mut(Seat::Human).remove(hand_index);
        self.round.opening = None;

        debug!(tile = %tile, end = ?end, "human placed");
        self.narration.push("You play your move.");

        if self.round.hand(Seat::Human).is_empty() {
            self.conclude_round(RoundOutcome::HumanOut);
        } else {
            self.phase = Phase::ComputerTurn;
        }
        self.epoch += 1;
        Ok(())
    }
}
