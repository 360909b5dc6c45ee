//! Greedy - the medium tier: shed the heaviest playable tile.
//!
//! Deterministic (no RNG). Picks the legal move with the highest pip sum;
//! ties go to the move encountered first.

use super::trait_def::{AiError, AiPlayer, TableView};
use crate::domain::board::Placement;

#[derive(Clone)]
pub struct Greedy {
    _seed: Option<u64>, // reserved, currently unused for strict determinism
}

impl Greedy {
    pub const NAME: &'static str = "Greedy";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(seed: Option<u64>) -> Self {
        Self { _seed: seed }
    }
}

impl AiPlayer for Greedy {
    fn choose_move(&self, view: &TableView<'_>) -> Result<Placement, AiError> {
        let moves = view.legal_moves();

        let mut best: Option<Placement> = None;
        for candidate in moves {
            match best {
                None => best = Some(candidate),
                Some(current) if candidate.tile.pip_sum() > current.tile.pip_sum() => {
                    best = Some(candidate)
                }
                _ => {}
            }
        }

        best.ok_or(AiError::NoLegalMove)
    }
}
