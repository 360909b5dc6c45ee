//! Match configuration: difficulty tier, score target, opponent identity.
//!
//! An explicit record handed to the orchestrator at match start; the rules
//! core keeps no process-wide mutable state.

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

/// Computer opponent difficulty tier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// The score targets a match may be played to.
pub const TARGET_SCORE_OPTIONS: [u32; 3] = [25, 50, 100];

/// Opponent identity consumed by narration. Cosmetic only; the chat/persona
/// layer lives entirely outside the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentProfile {
    pub name: String,
}

impl OpponentProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Default opponent per tier.
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        let name = match difficulty {
            Difficulty::Easy => "Yosu",
            Difficulty::Medium => "Bomba",
            Difficulty::Hard => "Claat",
        };
        Self::new(name)
    }
}

/// Everything the orchestrator needs to start a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub difficulty: Difficulty,
    pub target_score: u32,
    pub opponent: OpponentProfile,
    /// Base seed for every random decision in the match; `None` draws one
    /// from entropy at match start.
    pub seed: Option<u64>,
}

impl MatchConfig {
    /// Build a config, validating the target against the fixed option set.
    pub fn new(difficulty: Difficulty, target_score: u32) -> Result<Self, DomainError> {
        if !TARGET_SCORE_OPTIONS.contains(&target_score) {
            return Err(DomainError::validation(
                ValidationKind::InvalidTargetScore,
                format!("target score must be one of {TARGET_SCORE_OPTIONS:?}, got {target_score}"),
            ));
        }
        Ok(Self {
            difficulty,
            target_score,
            opponent: OpponentProfile::for_difficulty(difficulty),
            seed: None,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_opponent(mut self, opponent: OpponentProfile) -> Self {
        self.opponent = opponent;
        self
    }
}
