//! Round settlement and match termination math.

use serde::{Deserialize, Serialize};

use crate::domain::state::{Seat, SEATS};
use crate::domain::tiles::Tile;

/// Sum of both pips over every tile in a hand.
pub fn pip_total(hand: &[Tile]) -> u32 {
    hand.iter().map(|t| t.pip_sum() as u32).sum()
}

/// How a round ended.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RoundOutcome {
    /// The human emptied their hand.
    HumanOut,
    /// The computer emptied its hand.
    ComputerOut,
    /// Neither player can move and the boneyard is spent.
    Blocked,
}

/// Points awarded by one round's settlement.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundPoints {
    pub human: u32,
    pub computer: u32,
}

/// Settle a round: the emptied-hand winner takes the opponent's residual pip
/// total; a blocked round awards the lower-total hand the higher total, and
/// nothing on an exact tie.
pub fn settle_round(
    outcome: RoundOutcome,
    human_hand: &[Tile],
    computer_hand: &[Tile],
) -> RoundPoints {
    let human_residual = pip_total(human_hand);
    let computer_residual = pip_total(computer_hand);

    match outcome {
        RoundOutcome::HumanOut => RoundPoints {
            human: computer_residual,
            computer: 0,
        },
        RoundOutcome::ComputerOut => RoundPoints {
            human: 0,
            computer: human_residual,
        },
        RoundOutcome::Blocked => {
            if human_residual < computer_residual {
                RoundPoints {
                    human: computer_residual,
                    computer: 0,
                }
            } else if computer_residual < human_residual {
                RoundPoints {
                    human: 0,
                    computer: human_residual,
                }
            } else {
                RoundPoints::default()
            }
        }
    }
}

/// Strict winner at or above the target. An exact tie at or above the target
/// yields `None`: the match continues with another round.
pub fn match_winner(scores: [u32; SEATS], target_score: u32) -> Option<Seat> {
    let human = scores[Seat::Human.index()];
    let computer = scores[Seat::Computer.index()];
    if human < target_score && computer < target_score {
        return None;
    }
    if human > computer {
        Some(Seat::Human)
    } else if computer > human {
        Some(Seat::Computer)
    } else {
        None
    }
}
