//! Starting-player resolution for a fresh round.
//!
//! Precedence, scanning double values from six down to zero: a double in the
//! human hand wins the level, then a double in the computer hand. With no
//! doubles anywhere, the single highest tile opens (pip sum, then the larger
//! single pip; a dead-even comparison goes to the computer).

use crate::domain::state::Seat;
use crate::domain::tiles::Tile;

/// The round's designated first move: who opens, with which tile, and the
/// narration line explaining why. The narration has no rule weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpeningLead {
    pub seat: Seat,
    pub tile: Tile,
    pub narration: String,
}

/// Resolve who opens a round and with which tile.
///
/// Returns `None` only when a hand is empty and no double decides earlier;
/// unreachable when dealing from a full deck.
pub fn resolve_opening(
    human_hand: &[Tile],
    computer_hand: &[Tile],
    opponent_name: &str,
) -> Option<OpeningLead> {
    for value in (0..=Tile::MAX_PIP).rev() {
        if let Some(&tile) = human_hand
            .iter()
            .find(|t| t.is_double() && t.first == value)
        {
            let narration = if value == Tile::MAX_PIP {
                "You hold the double six, you open!".to_string()
            } else {
                format!("No higher double out there, you open with the double {value}!")
            };
            return Some(OpeningLead {
                seat: Seat::Human,
                tile,
                narration,
            });
        }

        if let Some(&tile) = computer_hand
            .iter()
            .find(|t| t.is_double() && t.first == value)
        {
            let narration = if value == Tile::MAX_PIP {
                format!("{opponent_name} holds the double six and opens.")
            } else {
                format!("No higher double out there, {opponent_name} opens with the double {value}.")
            };
            return Some(OpeningLead {
                seat: Seat::Computer,
                tile,
                narration,
            });
        }
    }

    let human_best = best_tile(human_hand)?;
    let computer_best = best_tile(computer_hand)?;

    if rank(human_best) > rank(computer_best) {
        Some(OpeningLead {
            seat: Seat::Human,
            tile: human_best,
            narration: format!("No doubles! You open with your biggest domino ({human_best})."),
        })
    } else {
        Some(OpeningLead {
            seat: Seat::Computer,
            tile: computer_best,
            narration: format!(
                "No doubles! {opponent_name} opens with their biggest domino ({computer_best})."
            ),
        })
    }
}

/// Ranking key for the no-doubles fallback. Within one hand the key is
/// unique: equal sum and equal high pip force equal low pip.
#[inline]
fn rank(tile: Tile) -> (u8, u8) {
    (tile.pip_sum(), tile.high_pip())
}

fn best_tile(hand: &[Tile]) -> Option<Tile> {
    hand.iter().copied().max_by_key(|t| rank(*t))
}
