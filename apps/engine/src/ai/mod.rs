//! Computer opponent strategies, one per difficulty tier.
//!
//! This module provides:
//! - the [`AiPlayer`] trait and the [`TableView`] snapshot it decides over
//! - RandomPlayer (easy), Greedy (medium), Tactician (hard)
//! - a static registry of strategy factories

mod greedy;
mod random;
mod registry;
mod tactician;
mod trait_def;

pub mod config;

pub use config::AiConfig;
pub use greedy::Greedy;
pub use random::RandomPlayer;
pub use registry::{by_name, registered_ais, AiFactory};
pub use tactician::Tactician;
pub use trait_def::{AiError, AiPlayer, TableView};

use crate::config::Difficulty;

/// Create the strategy for a difficulty tier.
pub fn create_ai(difficulty: Difficulty, config: &AiConfig) -> Box<dyn AiPlayer> {
    match difficulty {
        Difficulty::Easy => Box::new(RandomPlayer::new(config.seed())),
        Difficulty::Medium => Box::new(Greedy::new(config.seed())),
        Difficulty::Hard => Box::new(Tactician::new(config.seed())),
    }
}
