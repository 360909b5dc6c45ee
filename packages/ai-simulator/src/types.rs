//! Shared types for the simulator.

use clap::ValueEnum;
use engine::Difficulty;

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Jsonl,
    Json,
}

/// CLI-facing difficulty tier.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Tier {
    Easy,
    Medium,
    Hard,
}

impl Tier {
    pub fn difficulty(self) -> Difficulty {
        match self {
            Tier::Easy => Difficulty::Easy,
            Tier::Medium => Difficulty::Medium,
            Tier::Hard => Difficulty::Hard,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tier::Easy => "easy",
            Tier::Medium => "medium",
            Tier::Hard => "hard",
        }
    }
}
