//! Tactician - the hard tier: end control through doubles and exposure.
//!
//! Two-stage heuristic, fully deterministic:
//!
//! 1. If any legal move plays a double, shed the highest-pip-sum double.
//!    Doubles only ever match one value and get harder to place as the
//!    chain narrows, and playing one denies the opponent a flexible end.
//! 2. Otherwise prefer the move whose newly exposed pip value is one this
//!    hand still holds many of, with a weak bias toward heavier tiles:
//!    `score = 20 * (copies of the exposed value left in hand) + pip sum`.

use super::trait_def::{AiError, AiPlayer, TableView};
use crate::domain::board::{End, Placement};
use crate::domain::tiles::Tile;

#[derive(Clone)]
pub struct Tactician {
    _seed: Option<u64>, // reserved, currently unused for strict determinism
}

impl Tactician {
    pub const NAME: &'static str = "Tactician";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(seed: Option<u64>) -> Self {
        Self { _seed: seed }
    }

    /// The pip value left exposed on the board after playing `placement`.
    fn exposed_value(placement: Placement, open_ends: Option<(u8, u8)>) -> u8 {
        let tile = placement.tile;
        match open_ends {
            None => tile.first,
            Some((left, right)) => {
                let open = match placement.end {
                    End::Left => left,
                    End::Right => right,
                };
                if tile.first == open {
                    tile.second
                } else {
                    tile.first
                }
            }
        }
    }

    /// Copies of `value` across the hand once one instance of the played
    /// tile is removed. A double of `value` counts twice.
    fn copies_after_removal(hand: &[Tile], played: Tile, value: u8) -> u32 {
        let mut skipped = false;
        let mut copies = 0u32;
        for &tile in hand {
            if !skipped && tile == played {
                skipped = true;
                continue;
            }
            copies += (tile.first == value) as u32 + (tile.second == value) as u32;
        }
        copies
    }
}

impl AiPlayer for Tactician {
    fn choose_move(&self, view: &TableView<'_>) -> Result<Placement, AiError> {
        let moves = view.legal_moves();
        if moves.is_empty() {
            return Err(AiError::NoLegalMove);
        }

        // Stage 1: heaviest playable double, if any.
        let mut best_double: Option<Placement> = None;
        for &candidate in moves.iter().filter(|m| m.tile.is_double()) {
            match best_double {
                None => best_double = Some(candidate),
                Some(current) if candidate.tile.pip_sum() > current.tile.pip_sum() => {
                    best_double = Some(candidate)
                }
                _ => {}
            }
        }
        if let Some(double) = best_double {
            return Ok(double);
        }

        // Stage 2: keep exposed values we can still serve.
        let open_ends = view.board.open_ends();
        let mut best: Option<(i32, Placement)> = None;
        for candidate in moves {
            let exposed = Self::exposed_value(candidate, open_ends);
            let copies = Self::copies_after_removal(view.hand, candidate.tile, exposed);
            let score = copies as i32 * 20 + candidate.tile.pip_sum() as i32;
            match best {
                None => best = Some((score, candidate)),
                Some((current, _)) if score > current => best = Some((score, candidate)),
                _ => {}
            }
        }

        best.map(|(_, placement)| placement)
            .ok_or(AiError::NoLegalMove)
    }
}
