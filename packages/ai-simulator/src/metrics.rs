//! Metrics collection and output for simulation results.

use engine::domain::state::Seat;
use serde::Serialize;

use crate::simulator::MatchResult;

/// Complete match metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct MatchMetrics {
    pub match_id: u32,
    pub seed: u64,
    pub timestamp: String,
    pub config: MatchSetup,
    pub result: MatchResultMetrics,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchSetup {
    pub human_ai: String,
    pub computer_ai: String,
    pub target_score: u32,
    pub total_matches: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchResultMetrics {
    pub player_score: u32,
    pub computer_score: u32,
    pub winner: String,
    pub rounds_played: u32,
    pub moves_played: u32,
    pub draws: u32,
    pub duration_ms: f64,
}

/// Flat per-match row for the CSV summary.
#[derive(Debug, Clone, Serialize)]
pub struct CsvSummaryRow {
    pub match_id: u32,
    pub seed: u64,
    pub winner: String,
    pub player_score: u32,
    pub computer_score: u32,
    pub rounds_played: u32,
    pub human_ai: String,
    pub computer_ai: String,
}

impl From<&MatchMetrics> for CsvSummaryRow {
    fn from(metrics: &MatchMetrics) -> Self {
        Self {
            match_id: metrics.match_id,
            seed: metrics.seed,
            winner: metrics.result.winner.clone(),
            player_score: metrics.result.player_score,
            computer_score: metrics.result.computer_score,
            rounds_played: metrics.result.rounds_played,
            human_ai: metrics.config.human_ai.clone(),
            computer_ai: metrics.config.computer_ai.clone(),
        }
    }
}

pub fn seat_label(seat: Seat) -> &'static str {
    match seat {
        Seat::Human => "human",
        Seat::Computer => "computer",
    }
}

/// Build metrics from a match result.
#[allow(clippy::too_many_arguments)]
pub fn build_match_metrics(
    match_id: u32,
    seed: u64,
    timestamp: String,
    human_ai: &str,
    computer_ai: &str,
    target_score: u32,
    total_matches: u32,
    result: &MatchResult,
    duration_ms: f64,
) -> MatchMetrics {
    MatchMetrics {
        match_id,
        seed,
        timestamp,
        config: MatchSetup {
            human_ai: human_ai.to_string(),
            computer_ai: computer_ai.to_string(),
            target_score,
            total_matches,
        },
        result: MatchResultMetrics {
            player_score: result.final_scores[0],
            computer_score: result.final_scores[1],
            winner: seat_label(result.winner).to_string(),
            rounds_played: result.rounds_played,
            moves_played: result.moves_played,
            draws: result.draws,
            duration_ms,
        },
    }
}
