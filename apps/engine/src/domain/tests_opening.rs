use crate::domain::opening::resolve_opening;
use crate::domain::state::Seat;
use crate::domain::tiles::Tile;

fn tile(first: u8, second: u8) -> Tile {
    Tile::new(first, second)
}

#[test]
fn higher_double_opens_regardless_of_seat() {
    let lead = resolve_opening(&[tile(6, 6)], &[tile(5, 5)], "Claat").unwrap();
    assert_eq!(lead.seat, Seat::Human);
    assert_eq!(lead.tile, tile(6, 6));

    let lead = resolve_opening(&[tile(3, 3)], &[tile(5, 5)], "Claat").unwrap();
    assert_eq!(lead.seat, Seat::Computer);
    assert_eq!(lead.tile, tile(5, 5));
}

#[test]
fn human_wins_a_double_tie_at_the_same_level() {
    // Scanning is human-first at each value, so an equal-height double can
    // only exist across hands when values differ; the human is checked
    // before the computer at every level.
    let lead = resolve_opening(
        &[tile(4, 4), tile(0, 1)],
        &[tile(4, 5), tile(2, 3)],
        "Bomba",
    )
    .unwrap();
    assert_eq!(lead.seat, Seat::Human);
    assert_eq!(lead.tile, tile(4, 4));
}

#[test]
fn no_doubles_falls_back_to_the_highest_tile() {
    let lead = resolve_opening(&[tile(4, 6), tile(0, 1)], &[tile(3, 5), tile(1, 2)], "Yosu")
        .unwrap();
    assert_eq!(lead.seat, Seat::Human);
    assert_eq!(lead.tile, tile(4, 6));
}

#[test]
fn equal_sums_break_on_the_larger_single_pip() {
    // 2-6 and 3-5 both sum to 8; the 6 wins.
    let lead = resolve_opening(&[tile(2, 6)], &[tile(3, 5)], "Yosu").unwrap();
    assert_eq!(lead.seat, Seat::Human);

    let lead = resolve_opening(&[tile(3, 5)], &[tile(2, 6)], "Yosu").unwrap();
    assert_eq!(lead.seat, Seat::Computer);
}

#[test]
fn a_dead_even_fallback_goes_to_the_computer() {
    // Identical best tiles cannot occur from one deck, but the comparison
    // must still resolve deterministically: not strictly greater, so the
    // computer opens.
    let lead = resolve_opening(&[tile(2, 6)], &[tile(2, 6)], "Yosu").unwrap();
    assert_eq!(lead.seat, Seat::Computer);
}

#[test]
fn narration_names_the_reason() {
    let lead = resolve_opening(&[tile(6, 6)], &[tile(5, 5)], "Claat").unwrap();
    assert!(lead.narration.contains("double six"));

    let lead = resolve_opening(&[tile(3, 3)], &[tile(1, 2)], "Claat").unwrap();
    assert!(lead.narration.contains("double 3"));

    let lead = resolve_opening(&[tile(4, 6)], &[tile(3, 5)], "Claat").unwrap();
    assert!(lead.narration.contains("4-6"));
}

#[test]
fn empty_hands_cannot_be_resolved() {
    assert!(resolve_opening(&[], &[], "Yosu").is_none());
}
