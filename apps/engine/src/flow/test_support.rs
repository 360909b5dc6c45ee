//! Test-only construction of `GameFlow` in arbitrary mid-round positions.

use super::{GameFlow, Phase};
use crate::ai::{create_ai, AiConfig};
use crate::config::{Difficulty, MatchConfig};
use crate::domain::board::Board;
use crate::domain::opening::OpeningLead;
use crate::domain::state::{MatchState, NarrationLog, RoundState, Seat};
use crate::domain::tiles::Tile;

pub(super) struct MakeFlowArgs {
    pub difficulty: Difficulty,
    pub target_score: u32,
    pub scores: [u32; 2],
    pub human_hand: Vec<Tile>,
    pub computer_hand: Vec<Tile>,
    pub board: Vec<Tile>,
    pub boneyard: Vec<Tile>,
    pub opening: Option<OpeningLead>,
    pub phase: Phase,
}

impl Default for MakeFlowArgs {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            target_score: 100,
            scores: [0, 0],
            human_hand: Vec::new(),
            computer_hand: Vec::new(),
            board: Vec::new(),
            boneyard: Vec::new(),
            opening: None,
            phase: Phase::AwaitingMove,
        }
    }
}

/// Build a flow with exactly the given position; no dealing happens.
pub(super) fn make_flow(args: MakeFlowArgs) -> GameFlow {
    let config = MatchConfig::new(args.difficulty, args.target_score)
        .expect("test target score must come from the fixed options")
        .with_seed(42);
    let strategy = create_ai(args.difficulty, &AiConfig::with_seed(7));

    GameFlow {
        strategy,
        match_state: MatchState {
            scores: args.scores,
            target_score: args.target_score,
            round_no: 1,
            winner: None,
        },
        round: RoundState {
            hands: [args.human_hand, args.computer_hand],
            board: Board::from_tiles(args.board).expect("test board must be a valid chain"),
            boneyard: args.boneyard,
            opening: args.opening,
        },
        phase: args.phase,
        narration: NarrationLog::default(),
        last_round_points: None,
        epoch: 1,
        match_seed: 42,
        config,
    }
}

/// An opening designation for tests.
pub(super) fn opening(seat: Seat, tile: Tile) -> OpeningLead {
    OpeningLead {
        seat,
        tile,
        narration: String::from("test opening"),
    }
}
