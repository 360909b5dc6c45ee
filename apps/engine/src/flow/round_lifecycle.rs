//! Round lifecycle: dealing, settlement, and advancing between rounds.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use super::{GameFlow, Phase};
use crate::domain::board::{valid_moves, Board};
use crate::domain::dealing::{deal, full_deck, shuffled};
use crate::domain::opening::resolve_opening;
use crate::domain::scoring::{match_winner, settle_round, RoundOutcome};
use crate::domain::seed_derivation::derive_dealing_seed;
use crate::domain::state::{RoundState, Seat};
use crate::errors::domain::{DomainError, ValidationKind};

impl GameFlow {
    /// Deal fresh 7-tile hands from a freshly shuffled full deck and resolve
    /// who opens. Hands and boneyard never carry over between rounds.
    pub(super) fn deal_round(&mut self) {
        self.match_state.round_no += 1;
        let round_no = self.match_state.round_no;

        let dealing_seed = derive_dealing_seed(self.match_seed, round_no);
        let mut rng = ChaCha8Rng::seed_from_u64(dealing_seed);
        let dealt = deal(shuffled(&full_deck(), &mut rng));

        let opening = resolve_opening(&dealt.human, &dealt.computer, &self.config.opponent.name)
            .expect("flow: a fresh 28-tile deal yields non-empty hands");

        debug!(
            round_no,
            opener = ?opening.seat,
            tile = %opening.tile,
            "round dealt"
        );

        if round_no == 1 {
            self.narration.push(opening.narration.clone());
        } else {
            self.narration.push(format!("New round: {}", opening.narration));
        }

        self.phase = match opening.seat {
            Seat::Human => Phase::AwaitingMove,
            Seat::Computer => Phase::ComputerTurn,
        };
        self.round = RoundState {
            hands: [dealt.human, dealt.computer],
            board: Board::new(),
            boneyard: dealt.boneyard,
            opening: Some(opening),
        };
        self.last_round_points = None;
        self.epoch += 1;
    }

    /// Settle the round, fold points into the match, and enter review.
    pub(super) fn conclude_round(&mut self, outcome: RoundOutcome) {
        let points = settle_round(
            outcome,
            self.round.hand(Seat::Human),
            self.round.hand(Seat::Computer),
        );
        self.match_state.scores[Seat::Human.index()] += points.human;
        self.match_state.scores[Seat::Computer.index()] += points.computer;
        self.match_state.winner =
            match_winner(self.match_state.scores, self.match_state.target_score);
        self.last_round_points = Some(points);

        if outcome == RoundOutcome::Blocked {
            self.narration.push("The game is blocked!");
        }
        self.narration.push("End of the round.");

        info!(
            ?outcome,
            human = self.match_state.scores[Seat::Human.index()],
            computer = self.match_state.scores[Seat::Computer.index()],
            winner = ?self.match_state.winner,
            "round settled"
        );

        self.phase = Phase::RoundReview;
        self.epoch += 1;
    }

    /// Hand the move to the human, or past them when they are stuck.
    ///
    /// On an empty board the opener always holds a playable tile. Otherwise:
    /// a legal move means the human acts; no move with tiles left in the
    /// boneyard forces a draw; no move and a spent boneyard passes the turn
    /// back if the computer can still play, and blocks the round if not.
    pub(super) fn enter_human_turn(&mut self) {
        if self.round.board.is_empty() {
            self.phase = Phase::AwaitingMove;
            return;
        }

        if !valid_moves(self.round.hand(Seat::Human), &self.round.board).is_empty() {
            self.phase = Phase::AwaitingMove;
        } else if !self.round.boneyard.is_empty() {
            self.phase = Phase::AwaitingDraw;
        } else if !valid_moves(self.round.hand(Seat::Computer), &self.round.board).is_empty() {
            self.narration.push("You cannot play; the turn passes.");
            self.phase = Phase::ComputerTurn;
        } else {
            self.conclude_round(RoundOutcome::Blocked);
        }
    }

    /// Leave review and deal the next round. Rejected while the match is
    /// decided or outside review.
    pub fn advance_round(&mut self) -> Result<(), DomainError> {
        if self.phase != Phase::RoundReview {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "no round review to advance from",
            ));
        }
        if self.match_state.winner.is_some() {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "the match is decided; acknowledge it instead",
            ));
        }
        self.deal_round();
        Ok(())
    }

    /// Accept the decided match and reach the terminal state.
    pub fn acknowledge_match_over(&mut self) -> Result<(), DomainError> {
        if self.phase != Phase::RoundReview {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "no round review to acknowledge",
            ));
        }
        if self.match_state.winner.is_none() {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "the match is not decided yet",
            ));
        }

        info!(winner = ?self.match_state.winner, "match over");
        self.phase = Phase::MatchOver;
        self.epoch += 1;
        Ok(())
    }
}
