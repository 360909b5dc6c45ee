//! Board chain and placement legality.
//!
//! The board is a single open chain of oriented tiles. Invariant: for every
//! adjacent pair, `left.second == right.first`. The two free ends are
//! `tiles[0].first` and `tiles[last].second`.

use serde::{Deserialize, Serialize};

use crate::domain::tiles::Tile;
use crate::errors::domain::{DomainError, ValidationKind};

/// A chain end. `Left` prepends, `Right` appends.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum End {
    Left,
    Right,
}

impl End {
    pub fn as_str(self) -> &'static str {
        match self {
            End::Left => "left",
            End::Right => "right",
        }
    }
}

/// One legal move: a hand tile and the chain end it attaches to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub tile: Tile,
    pub end: End,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    tiles: Vec<Tile>,
}

impl Board {
    pub fn new() -> Self {
        Self { tiles: Vec::new() }
    }

    /// Rebuild a board from an already-oriented tile sequence, validating the
    /// chain invariant.
    pub fn from_tiles(tiles: Vec<Tile>) -> Result<Self, DomainError> {
        for pair in tiles.windows(2) {
            if pair[0].second != pair[1].first {
                return Err(DomainError::validation_other(format!(
                    "broken chain: {} does not meet {}",
                    pair[0], pair[1]
                )));
            }
        }
        Ok(Self { tiles })
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Open pip values at the two chain ends, `(left, right)`. `None` when
    /// the board is empty.
    pub fn open_ends(&self) -> Option<(u8, u8)> {
        let first = self.tiles.first()?;
        let last = self.tiles.last()?;
        Some((first.first, last.second))
    }

    pub fn open_value(&self, end: End) -> Option<u8> {
        let (left, right) = self.open_ends()?;
        Some(match end {
            End::Left => left,
            End::Right => right,
        })
    }

    /// Attach a tile, flipping it if needed so the touching pips agree.
    ///
    /// Rejects illegal placements without mutating. On an empty board the
    /// tile is placed as-is.
    pub fn place(&mut self, tile: Tile, end: End) -> Result<(), DomainError> {
        if self.tiles.is_empty() {
            self.tiles.push(tile);
            return Ok(());
        }

        match end {
            End::Left => {
                let open = self.tiles[0].first;
                if !tile.has(open) {
                    return Err(DomainError::validation(
                        ValidationKind::TileNotPlayable,
                        format!("{tile} cannot attach on the left open value {open}"),
                    ));
                }
                let oriented = if tile.second == open { tile } else { tile.flipped() };
                self.tiles.insert(0, oriented);
            }
            End::Right => {
                let open = self.tiles[self.tiles.len() - 1].second;
                if !tile.has(open) {
                    return Err(DomainError::validation(
                        ValidationKind::TileNotPlayable,
                        format!("{tile} cannot attach on the right open value {open}"),
                    ));
                }
                let oriented = if tile.first == open { tile } else { tile.flipped() };
                self.tiles.push(oriented);
            }
        }
        Ok(())
    }
}

/// The chain ends a tile may legally attach to: at most one entry per end.
/// An empty board accepts any tile, by convention on the left end only.
pub fn possible_placements(tile: Tile, board: &Board) -> Vec<End> {
    let Some((left, right)) = board.open_ends() else {
        return vec![End::Left];
    };

    let mut ends = Vec::with_capacity(2);
    if tile.has(left) {
        ends.push(End::Left);
    }
    if tile.has(right) {
        ends.push(End::Right);
    }
    ends
}

/// First valid end for a tile, for single-result callers.
pub fn can_play(tile: Tile, board: &Board) -> Option<End> {
    possible_placements(tile, board).first().copied()
}

/// Every legal (tile, end) pair from the hand, in hand-encounter order with
/// left before right. A tile legal on both ends contributes two entries.
pub fn valid_moves(hand: &[Tile], board: &Board) -> Vec<Placement> {
    let mut moves = Vec::new();
    for &tile in hand {
        for end in possible_placements(tile, board) {
            moves.push(Placement { tile, end });
        }
    }
    moves
}
