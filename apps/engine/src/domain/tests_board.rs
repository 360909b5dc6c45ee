use crate::domain::board::{can_play, possible_placements, valid_moves, Board, End, Placement};
use crate::domain::tiles::Tile;

fn tile(first: u8, second: u8) -> Tile {
    Tile::new(first, second)
}

fn board(tiles: Vec<Tile>) -> Board {
    Board::from_tiles(tiles).expect("test chains are valid")
}

#[test]
fn empty_board_accepts_any_tile_on_the_left_only() {
    let empty = Board::new();
    assert_eq!(possible_placements(tile(4, 6), &empty), vec![End::Left]);
    assert_eq!(possible_placements(tile(0, 0), &empty), vec![End::Left]);
}

#[test]
fn placements_require_a_shared_pip_with_the_open_end() {
    // Chain 4-2 2-2 2-5: open ends are 4 (left) and 5 (right).
    let b = board(vec![tile(4, 2), tile(2, 2), tile(2, 5)]);

    assert_eq!(possible_placements(tile(4, 4), &b), vec![End::Left]);
    assert_eq!(possible_placements(tile(5, 6), &b), vec![End::Right]);
    assert_eq!(
        possible_placements(tile(4, 5), &b),
        vec![End::Left, End::Right]
    );
    assert!(possible_placements(tile(1, 3), &b).is_empty());
}

#[test]
fn can_play_returns_the_first_valid_side() {
    let b = board(vec![tile(4, 2), tile(2, 5)]);
    assert_eq!(can_play(tile(4, 5), &b), Some(End::Left));
    assert_eq!(can_play(tile(5, 6), &b), Some(End::Right));
    assert_eq!(can_play(tile(1, 3), &b), None);
}

#[test]
fn valid_moves_lists_both_sides_for_a_double_fit() {
    let b = board(vec![tile(3, 3)]);
    let hand = vec![tile(3, 6), tile(1, 2)];
    let moves = valid_moves(&hand, &b);
    assert_eq!(
        moves,
        vec![
            Placement {
                tile: tile(3, 6),
                end: End::Left
            },
            Placement {
                tile: tile(3, 6),
                end: End::Right
            },
        ]
    );
}

#[test]
fn placing_left_flips_the_tile_when_needed() {
    let mut b = board(vec![tile(2, 3)]);
    // 2-6 shares the left open 2 but its second pip is 6, so it flips.
    b.place(tile(2, 6), End::Left).unwrap();
    assert_eq!(b.tiles(), [tile(6, 2), tile(2, 3)]);
}

#[test]
fn placing_right_flips_the_tile_when_needed() {
    let mut b = board(vec![tile(2, 3)]);
    b.place(tile(5, 3), End::Right).unwrap();
    assert_eq!(b.tiles(), [tile(2, 3), tile(3, 5)]);
}

#[test]
fn placing_an_aligned_tile_keeps_its_orientation() {
    let mut b = board(vec![tile(2, 3)]);
    b.place(tile(3, 5), End::Right).unwrap();
    assert_eq!(b.tiles(), [tile(2, 3), tile(3, 5)]);

    b.place(tile(6, 2), End::Left).unwrap();
    assert_eq!(b.tiles(), [tile(6, 2), tile(2, 3), tile(3, 5)]);
}

#[test]
fn illegal_placement_is_rejected_without_mutation() {
    let mut b = board(vec![tile(2, 3)]);
    let before = b.clone();
    assert!(b.place(tile(5, 6), End::Left).is_err());
    assert!(b.place(tile(5, 6), End::Right).is_err());
    assert_eq!(b, before);
}

#[test]
fn from_tiles_rejects_a_broken_chain() {
    assert!(Board::from_tiles(vec![tile(2, 3), tile(4, 5)]).is_err());
    assert!(Board::from_tiles(vec![tile(2, 3), tile(3, 5)]).is_ok());
}
