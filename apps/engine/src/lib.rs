#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Two-player blocking-dominoes rules core.
//!
//! The crate is a pure engine: it owns the deck, board chain, scoring,
//! opening resolution, the difficulty-tiered computer opponent, and the
//! round/match state machine. Rendering, animation, and the chat companion
//! are external consumers of [`flow::MatchSnapshot`] and the `GameFlow`
//! operations; they contain no rules of their own.

pub mod ai;
pub mod config;
pub mod domain;
pub mod errors;
pub mod flow;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use ai::{create_ai, AiConfig, AiError, AiPlayer};
pub use config::{Difficulty, MatchConfig, OpponentProfile, TARGET_SCORE_OPTIONS};
pub use domain::{
    can_play, full_deck, pip_total, possible_placements, valid_moves, Board, End, Placement, Seat,
    Tile,
};
pub use errors::DomainError;
pub use flow::{ComputerTicket, GameFlow, MatchSnapshot, Phase};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
