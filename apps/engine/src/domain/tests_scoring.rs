use crate::domain::scoring::{match_winner, pip_total, settle_round, RoundOutcome};
use crate::domain::state::Seat;
use crate::domain::tiles::Tile;

fn tile(first: u8, second: u8) -> Tile {
    Tile::new(first, second)
}

#[test]
fn pip_total_sums_both_pips() {
    assert_eq!(pip_total(&[]), 0);
    assert_eq!(pip_total(&[tile(0, 0)]), 0);
    assert_eq!(pip_total(&[tile(6, 6), tile(2, 3)]), 17);
}

#[test]
fn pip_total_is_additive_over_concatenation() {
    let a = vec![tile(1, 2), tile(3, 3)];
    let b = vec![tile(0, 6), tile(4, 5)];
    let mut joined = a.clone();
    joined.extend(&b);
    assert_eq!(pip_total(&joined), pip_total(&a) + pip_total(&b));
}

#[test]
fn emptied_hand_takes_the_opponent_residual() {
    let computer = vec![tile(5, 4), tile(2, 1)]; // 12
    let points = settle_round(RoundOutcome::HumanOut, &[], &computer);
    assert_eq!((points.human, points.computer), (12, 0));

    let human = vec![tile(6, 3)]; // 9
    let points = settle_round(RoundOutcome::ComputerOut, &human, &[]);
    assert_eq!((points.human, points.computer), (0, 9));
}

#[test]
fn blocked_round_rewards_the_lighter_hand() {
    let human = vec![tile(1, 2)]; // 3
    let computer = vec![tile(6, 6)]; // 12
    let points = settle_round(RoundOutcome::Blocked, &human, &computer);
    assert_eq!((points.human, points.computer), (12, 0));

    let points = settle_round(RoundOutcome::Blocked, &computer, &human);
    assert_eq!((points.human, points.computer), (0, 12));
}

#[test]
fn blocked_tie_awards_no_points() {
    let human = vec![tile(6, 5), tile(4, 0)]; // 15
    let computer = vec![tile(6, 4), tile(5, 0)]; // 15
    let points = settle_round(RoundOutcome::Blocked, &human, &computer);
    assert_eq!((points.human, points.computer), (0, 0));
}

#[test]
fn match_ends_only_at_or_above_target() {
    assert_eq!(match_winner([99, 0], 100), None);
    assert_eq!(match_winner([105, 80], 100), Some(Seat::Human));
    assert_eq!(match_winner([80, 100], 100), Some(Seat::Computer));
}

#[test]
fn winner_needs_the_strictly_higher_score() {
    assert_eq!(match_winner([110, 104], 100), Some(Seat::Human));
    assert_eq!(match_winner([104, 110], 100), Some(Seat::Computer));
}

#[test]
fn an_exact_tie_at_target_keeps_the_match_alive() {
    assert_eq!(match_winner([100, 100], 100), None);
    assert_eq!(match_winner([120, 120], 100), None);
}
