//! Core tile type: a domino, an oriented pair of pip values in 0..=6.
//!
//! Identity is the unordered pair; orientation only starts to matter once a
//! tile is attached to the board chain, where it may be flipped so the
//! touching pips agree.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub first: u8,
    pub second: u8,
}

impl Tile {
    pub const MAX_PIP: u8 = 6;

    pub fn new(first: u8, second: u8) -> Self {
        debug_assert!(
            first <= Self::MAX_PIP && second <= Self::MAX_PIP,
            "pip out of range: {first}-{second}"
        );
        Self { first, second }
    }

    #[inline]
    pub fn is_double(self) -> bool {
        self.first == self.second
    }

    #[inline]
    pub fn pip_sum(self) -> u8 {
        self.first + self.second
    }

    #[inline]
    pub fn high_pip(self) -> u8 {
        self.first.max(self.second)
    }

    #[inline]
    pub fn has(self, value: u8) -> bool {
        self.first == value || self.second == value
    }

    /// The pip left exposed when `value` is matched against an open end.
    #[inline]
    pub fn other_value(self, value: u8) -> Option<u8> {
        if self.first == value {
            Some(self.second)
        } else if self.second == value {
            Some(self.first)
        } else {
            None
        }
    }

    #[inline]
    pub fn flipped(self) -> Tile {
        Tile {
            first: self.second,
            second: self.first,
        }
    }

    /// Unordered identity: the same physical domino regardless of orientation.
    #[inline]
    pub fn same_tile(self, other: Tile) -> bool {
        self == other || self == other.flipped()
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.second)
    }
}
