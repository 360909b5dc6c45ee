//! Deck construction and deterministic dealing.

use rand::Rng;

use crate::domain::tiles::Tile;

pub const DECK_SIZE: usize = 28;
pub const HAND_SIZE: usize = 7;

/// Generate the full 28-tile deck: every pair (i, j) with 0 <= i <= j <= 6,
/// each exactly once.
pub fn full_deck() -> Vec<Tile> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for i in 0..=Tile::MAX_PIP {
        for j in i..=Tile::MAX_PIP {
            deck.push(Tile::new(i, j));
        }
    }
    deck
}

/// Fisher-Yates shuffle over a copy; the input deck is left untouched.
pub fn shuffled<R: Rng + ?Sized>(deck: &[Tile], rng: &mut R) -> Vec<Tile> {
    let mut out = deck.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.random_range(0..=i);
        out.swap(i, j);
    }
    out
}

/// Hands and boneyard produced by dealing a shuffled deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealtHands {
    pub human: Vec<Tile>,
    pub computer: Vec<Tile>,
    pub boneyard: Vec<Tile>,
}

/// Deal a round: the first seven tiles go to the human, the next seven to
/// the computer, the remainder becomes the boneyard.
///
/// A deck shorter than two full hands degrades to empty hands (everything
/// stays in the boneyard) rather than dealing partial ones. Not reachable
/// when dealing from [`full_deck`].
pub fn deal(deck: Vec<Tile>) -> DealtHands {
    if deck.len() < 2 * HAND_SIZE {
        return DealtHands {
            human: Vec::new(),
            computer: Vec::new(),
            boneyard: deck,
        };
    }

    let mut rest = deck;
    let boneyard = rest.split_off(2 * HAND_SIZE);
    let computer = rest.split_off(HAND_SIZE);
    DealtHands {
        human: rest,
        computer,
        boneyard,
    }
}
