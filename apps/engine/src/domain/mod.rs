//! Domain layer: pure game rules types and helpers.

pub mod board;
pub mod dealing;
pub mod opening;
pub mod scoring;
pub mod seed_derivation;
pub mod state;
pub mod tiles;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_board;
#[cfg(test)]
mod tests_opening;
#[cfg(test)]
mod tests_props_board;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use board::{can_play, possible_placements, valid_moves, Board, End, Placement};
pub use dealing::{deal, full_deck, shuffled, DealtHands, DECK_SIZE, HAND_SIZE};
pub use opening::{resolve_opening, OpeningLead};
pub use scoring::{match_winner, pip_total, settle_round, RoundOutcome, RoundPoints};
pub use seed_derivation::{derive_dealing_seed, derive_strategy_seed};
pub use state::{MatchState, NarrationLog, RoundState, Seat};
pub use tiles::Tile;
