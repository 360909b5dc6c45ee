// Proptest generators for domain types.
// These generators produce unique tiles and valid board chains for
// property-based testing.

use proptest::prelude::*;
use rand::Rng;

use crate::domain::board::{possible_placements, Board};
use crate::domain::dealing::full_deck;
use crate::domain::tiles::Tile;

/// Generate a random normalized tile (first <= second).
pub fn tile() -> impl Strategy<Value = Tile> {
    (0u8..=Tile::MAX_PIP, 0u8..=Tile::MAX_PIP)
        .prop_map(|(a, b)| Tile::new(a.min(b), a.max(b)))
}

/// Generate a vector of N unique tiles by shuffling the full deck.
pub fn unique_tiles(count: usize) -> impl Strategy<Value = Vec<Tile>> {
    Just(()).prop_perturb(move |_, mut rng| {
        let mut deck = full_deck();
        for i in 0..count.min(deck.len()) {
            let j = rng.random_range(i..deck.len());
            deck.swap(i, j);
        }
        deck.truncate(count);
        deck
    })
}

/// Generate a hand of 1 to max_count unique tiles.
pub fn hand(max_count: usize) -> impl Strategy<Value = Vec<Tile>> {
    (1..=max_count).prop_flat_map(unique_tiles)
}

/// Generate a valid board chain of up to `max_len` tiles by repeatedly
/// attaching legally placeable tiles from a shuffled deck. May produce an
/// empty board.
pub fn chain_board(max_len: usize) -> impl Strategy<Value = Board> {
    Just(()).prop_perturb(move |_, mut rng| {
        let mut remaining = full_deck();
        for i in 0..remaining.len() {
            let j = rng.random_range(i..remaining.len());
            remaining.swap(i, j);
        }

        let target = rng.random_range(0..=max_len);
        let mut board = Board::new();
        while board.len() < target {
            let mut placed = false;
            for i in 0..remaining.len() {
                let candidate = remaining[i];
                let ends = possible_placements(candidate, &board);
                if ends.is_empty() {
                    continue;
                }
                let end = ends[rng.random_range(0..ends.len())];
                remaining.remove(i);
                board
                    .place(candidate, end)
                    .expect("generator placements are pre-validated");
                placed = true;
                break;
            }
            if !placed {
                break;
            }
        }
        board
    })
}
