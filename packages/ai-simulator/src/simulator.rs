//! In-memory match runner for AI evaluation.
//!
//! Drives complete matches through the public `GameFlow` API with a
//! strategy in each seat: the engine's own opponent fills the computer
//! seat, and a second strategy plays the human seat mechanically (including
//! side choices and forced draws). No delays, no UI.

use engine::ai::{AiError, AiPlayer, TableView};
use engine::domain::state::Seat;
use engine::{Board, DomainError, GameFlow, MatchConfig, Phase};

/// Hard cap on state-machine steps per match; a well-formed match finishes
/// in far fewer.
const MAX_STEPS: u32 = 1_000_000;

/// Result of simulating a complete match.
#[derive(Debug, Clone)]
pub struct MatchResult {
    /// Final scores: human seat, computer seat.
    pub final_scores: [u32; 2],
    pub winner: Seat,
    pub rounds_played: u32,
    /// Tiles placed by either seat.
    pub moves_played: u32,
    /// Boneyard draws by either seat (human side only; computer draws happen
    /// inside its turn).
    pub draws: u32,
}

/// In-memory match simulator.
pub struct Simulator {
    config: MatchConfig,
    /// Strategy driving the human seat.
    driver: Box<dyn AiPlayer>,
}

impl Simulator {
    pub fn new(config: MatchConfig, driver: Box<dyn AiPlayer>) -> Self {
        Self { config, driver }
    }

    /// Run one match to completion.
    pub fn run(&self) -> Result<MatchResult, SimulatorError> {
        let mut flow = GameFlow::new(self.config.clone());
        let mut moves_played = 0u32;
        let mut draws = 0u32;

        for _ in 0..MAX_STEPS {
            match flow.phase() {
                Phase::AwaitingMove => {
                    self.drive_human_move(&mut flow)?;
                    moves_played += 1;
                }
                Phase::AwaitingDraw => {
                    flow.draw()?;
                    draws += 1;
                }
                Phase::AwaitingSideChoice { .. } => {
                    // Normally resolved inside drive_human_move; left is
                    // always legal for a pending both-ends tile.
                    flow.choose_side(engine::End::Left)?;
                }
                Phase::ComputerTurn => {
                    let ticket = flow.computer_ticket()?;
                    flow.complete_computer_turn(ticket)?;
                    moves_played += 1;
                }
                Phase::RoundReview => {
                    if flow.winner().is_some() {
                        flow.acknowledge_match_over()?;
                    } else {
                        flow.advance_round()?;
                    }
                }
                Phase::MatchOver => {
                    let snapshot = flow.snapshot();
                    let winner = snapshot
                        .winner
                        .ok_or_else(|| SimulatorError::InvalidState("match over without winner".into()))?;
                    return Ok(MatchResult {
                        final_scores: [snapshot.player_score, snapshot.computer_score],
                        winner,
                        rounds_played: snapshot.round_no,
                        moves_played,
                        draws,
                    });
                }
            }
        }

        Err(SimulatorError::InvalidState(format!(
            "match did not finish within {MAX_STEPS} steps"
        )))
    }

    /// One human-seat move: honor the opening designation, otherwise ask the
    /// driver strategy, then apply via the same operations a UI would call.
    fn drive_human_move(&self, flow: &mut GameFlow) -> Result<(), SimulatorError> {
        let snapshot = flow.snapshot();

        if snapshot.board.is_empty() {
            if let Some(opening_tile) = snapshot.opening_tile {
                let index = snapshot
                    .player_hand
                    .iter()
                    .position(|t| t.same_tile(opening_tile))
                    .ok_or_else(|| {
                        SimulatorError::InvalidState("opening tile missing from hand".into())
                    })?;
                flow.play_tile(index)?;
                return Ok(());
            }
        }

        let board = Board::from_tiles(snapshot.board.clone())?;
        let view = TableView {
            hand: &snapshot.player_hand,
            board: &board,
        };
        let placement = self
            .driver
            .choose_move(&view)
            .map_err(|e| SimulatorError::AiError(Seat::Human, e))?;

        let index = snapshot
            .player_hand
            .iter()
            .position(|t| *t == placement.tile)
            .ok_or_else(|| SimulatorError::InvalidState("driver chose a foreign tile".into()))?;

        flow.play_tile(index)?;
        if matches!(flow.phase(), Phase::AwaitingSideChoice { .. }) {
            flow.choose_side(placement.end)?;
        }
        Ok(())
    }
}

/// Errors that can occur during simulation.
#[derive(Debug)]
pub enum SimulatorError {
    /// A seat's strategy returned an error
    AiError(Seat, AiError),
    /// Engine rejected an action the simulator believed legal
    Domain(DomainError),
    /// Invalid simulator state
    InvalidState(String),
}

impl From<DomainError> for SimulatorError {
    fn from(err: DomainError) -> Self {
        SimulatorError::Domain(err)
    }
}

impl std::fmt::Display for SimulatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulatorError::AiError(seat, err) => write!(f, "AI error ({seat:?}): {err}"),
            SimulatorError::Domain(err) => write!(f, "Domain error: {err}"),
            SimulatorError::InvalidState(msg) => write!(f, "Invalid state: {msg}"),
        }
    }
}

impl std::error::Error for SimulatorError {}
