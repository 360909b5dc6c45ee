//! Random player - the easy tier, making uniform random legal moves.
//!
//! Also the reference implementation of the [`AiPlayer`](super::AiPlayer)
//! trait: thread-safe interior mutability over the RNG, deterministic
//! behavior via optional seeding, and no panics.

use std::sync::Mutex;

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use super::trait_def::{AiError, AiPlayer, TableView};
use crate::domain::board::Placement;

/// AI that picks uniformly at random among the legal moves.
pub struct RandomPlayer {
    /// Wrapped in `Mutex` since trait methods take `&self` but the RNG needs
    /// mutable access.
    rng: Mutex<ChaCha8Rng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "RandomPlayer";
    pub const VERSION: &'static str = "1.0.0";

    /// Create a new `RandomPlayer`.
    ///
    /// * `seed` - `Some(seed)` for reproducible behavior (tests, replays);
    ///   `None` draws from system entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl AiPlayer for RandomPlayer {
    fn choose_move(&self, view: &TableView<'_>) -> Result<Placement, AiError> {
        let moves = view.legal_moves();
        if moves.is_empty() {
            return Err(AiError::NoLegalMove);
        }

        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;

        moves
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| AiError::Internal("failed to choose a random move".into()))
    }
}
