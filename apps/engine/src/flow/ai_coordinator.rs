//! Computer-turn coordination: the ticket protocol and the
//! draw-until-playable loop.
//!
//! The computer's "thinking" delay is a presentation concern. Entering
//! [`Phase::ComputerTurn`](super::Phase::ComputerTurn) mints a ticket bound
//! to the flow's current epoch; the presentation waits out its animation and
//! redeems the ticket. Every transition bumps the epoch, so a ticket that
//! outlives its turn (a round that ended, a review overlay that opened) is
//! rejected without effect.

use tracing::debug;

use super::{GameFlow, Phase};
use crate::ai::{AiError, TableView};
use crate::domain::board::{possible_placements, valid_moves, End};
use crate::domain::scoring::RoundOutcome;
use crate::domain::state::Seat;
use crate::errors::domain::{DomainError, ValidationKind};

/// Opaque handle for one pending computer turn.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ComputerTicket {
    epoch: u64,
}

impl GameFlow {
    /// Mint a ticket for the pending computer turn.
    pub fn computer_ticket(&self) -> Result<ComputerTicket, DomainError> {
        if self.phase != Phase::ComputerTurn {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "no computer turn is pending",
            ));
        }
        Ok(ComputerTicket { epoch: self.epoch })
    }

    /// Redeem a ticket: compute and apply the computer's move.
    ///
    /// Draws from the boneyard until a move exists or the boneyard is spent;
    /// an exhausted boneyard passes the turn to the human when they can
    /// play, and blocks the round when they cannot.
    pub fn complete_computer_turn(&mut self, ticket: ComputerTicket) -> Result<(), DomainError> {
        if self.phase != Phase::ComputerTurn {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "no computer turn is pending",
            ));
        }
        if ticket.epoch != self.epoch {
            return Err(DomainError::validation(
                ValidationKind::StaleTicket,
                "the computer turn was superseded",
            ));
        }

        if self.round.board.is_empty() {
            return self.play_computer_opening();
        }

        let name = self.config.opponent.name.clone();
        let mut drew = false;
        loop {
            let decision = {
                let view = TableView {
                    hand: self.round.hand(Seat::Computer),
                    board: &self.round.board,
                };
                self.strategy.choose_move(&view)
            };

            match decision {
                Ok(placement) => {
                    // Independent re-validation; strategies are not trusted.
                    let index = self
                        .round
                        .hand(Seat::Computer)
                        .iter()
                        .position(|t| t.same_tile(placement.tile))
                        .ok_or_else(|| {
                            DomainError::strategy("chose a tile outside the computer hand")
                        })?;
                    if !possible_placements(placement.tile, &self.round.board)
                        .contains(&placement.end)
                    {
                        return Err(DomainError::strategy("chose an illegal placement"));
                    }

                    self.round.board.place(placement.tile, placement.end)?;
                    self.round.hand_mut(Seat::Computer).remove(index);
                    debug!(tile = %placement.tile, end = ?placement.end, drew, "computer placed");

                    if self.round.hand(Seat::Computer).is_empty() {
                        self.narration.push(format!("{name} empties their hand!"));
                        self.conclude_round(RoundOutcome::ComputerOut);
                    } else {
                        if drew {
                            self.narration.push(format!("{name} drew, then played."));
                        } else {
                            self.narration.push(format!("{name} played a move."));
                        }
                        self.enter_human_turn();
                    }
                    self.epoch += 1;
                    return Ok(());
                }
                Err(AiError::NoLegalMove) => {
                    if let Some(tile) = self.round.boneyard.pop() {
                        debug!(tile = %tile, "computer drew");
                        self.round.hand_mut(Seat::Computer).push(tile);
                        drew = true;
                        continue;
                    }

                    // Boneyard spent with no legal move.
                    if valid_moves(self.round.hand(Seat::Human), &self.round.board).is_empty() {
                        self.conclude_round(RoundOutcome::Blocked);
                    } else {
                        if drew {
                            self.narration
                                .push(format!("{name} drew without finding a move."));
                        } else {
                            self.narration.push(format!("{name} cannot play."));
                        }
                        self.phase = Phase::AwaitingMove;
                    }
                    self.epoch += 1;
                    return Ok(());
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// The computer's forced opening lead on an empty board.
    fn play_computer_opening(&mut self) -> Result<(), DomainError> {
        let opening = self
            .round
            .opening
            .clone()
            .ok_or_else(|| DomainError::validation_other("invariant: empty board without opening"))?;
        if opening.seat != Seat::Computer {
            return Err(DomainError::validation(
                ValidationKind::OutOfTurn,
                "the opening lead is not the computer's",
            ));
        }

        let index = self
            .round
            .hand(Seat::Computer)
            .iter()
            .position(|t| t.same_tile(opening.tile))
            .ok_or_else(|| {
                DomainError::validation_other("invariant: opener must hold the opening tile")
            })?;

        let tile = self.round.hand(Seat::Computer)[index];
        self.round.board.place(tile, End::Left)?;
        self.round.hand_mut(Seat::Computer).remove(index);
        self.round.opening = None;

        debug!(tile = %tile, "computer opened");
        self.narration
            .push(format!("{} opens the round.", self.config.opponent.name));

        self.enter_human_turn();
        self.epoch += 1;
        Ok(())
    }
}
