/// Property-based tests for placement legality and the chain invariant.
use proptest::prelude::*;

use crate::domain::board::{possible_placements, valid_moves, End};
use crate::domain::dealing::{full_deck, shuffled};
use crate::domain::scoring::pip_total;
use crate::domain::tiles::Tile;
use crate::domain::{test_gens, test_prelude};

fn chain_holds(tiles: &[Tile]) -> bool {
    tiles.windows(2).all(|pair| pair[0].second == pair[1].first)
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: Placement soundness
    /// A non-empty board offers the left end iff the tile shares a pip with
    /// the left open value, the right end likewise; an empty board offers
    /// exactly the left end.
    #[test]
    fn prop_placement_soundness(board in test_gens::chain_board(20), tile in test_gens::tile()) {
        let ends = possible_placements(tile, &board);

        match board.open_ends() {
            None => prop_assert_eq!(ends, vec![End::Left]),
            Some((left, right)) => {
                prop_assert_eq!(ends.contains(&End::Left), tile.has(left));
                prop_assert_eq!(ends.contains(&End::Right), tile.has(right));
                prop_assert!(ends.len() <= 2);
            }
        }
    }

    /// Property: Chain invariant preserved
    /// Applying any legal placement leaves every adjacent pair touching.
    #[test]
    fn prop_chain_invariant_preserved(board in test_gens::chain_board(20), tile in test_gens::tile()) {
        for end in possible_placements(tile, &board) {
            let mut next = board.clone();
            next.place(tile, end).expect("legal placements apply");
            prop_assert!(chain_holds(next.tiles()));
            prop_assert_eq!(next.len(), board.len() + 1);
        }
    }

    /// Property: valid_moves is exactly the per-tile placement expansion,
    /// every entry legal, a both-ends tile contributing two entries.
    #[test]
    fn prop_valid_moves_matches_placements(
        board in test_gens::chain_board(12),
        hand in test_gens::hand(7),
    ) {
        let moves = valid_moves(&hand, &board);

        let expected: usize = hand
            .iter()
            .map(|&t| possible_placements(t, &board).len())
            .sum();
        prop_assert_eq!(moves.len(), expected);

        for m in &moves {
            prop_assert!(possible_placements(m.tile, &board).contains(&m.end));
            prop_assert!(hand.contains(&m.tile));
        }
    }

    /// Property: Shuffle is a permutation
    /// Same multiset of tiles, length unchanged, for any seed.
    #[test]
    fn prop_shuffle_is_a_permutation(seed in any::<u64>()) {
        use rand::SeedableRng;
        let deck = full_deck();
        let out = shuffled(&deck, &mut rand_chacha::ChaCha8Rng::seed_from_u64(seed));

        prop_assert_eq!(out.len(), deck.len());
        let mut a = deck;
        let mut b = out;
        a.sort();
        b.sort();
        prop_assert_eq!(a, b);
    }

    /// Property: Score additivity over hand concatenation.
    #[test]
    fn prop_score_additivity(a in test_gens::hand(10), b in test_gens::hand(10)) {
        let mut joined = a.clone();
        joined.extend(&b);
        prop_assert_eq!(pip_total(&joined), pip_total(&a) + pip_total(&b));
    }
}
