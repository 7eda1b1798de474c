//! Tests for the heuristic move selector.

use noughtbot_engine::{Board, Player, Square, select_move};
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Builds a board from rows of `"X"`, `"O"`, and `""` cells.
fn board_from(cells: [[&str; 3]; 3]) -> Board {
    let mut board = Board::new();
    for (row, row_cells) in cells.iter().enumerate() {
        for (col, cell) in row_cells.iter().enumerate() {
            let square = match *cell {
                "X" => Square::Occupied(Player::X),
                "O" => Square::Occupied(Player::O),
                _ => Square::Empty,
            };
            board.set(row, col, square).unwrap();
        }
    }
    board
}

fn rng() -> SmallRng {
    SmallRng::seed_from_u64(42)
}

#[test]
fn test_takes_win_over_block() {
    // O can win at (0, 2) even though X also threatens (1, 2).
    let board = board_from([["O", "O", ""], ["X", "X", ""], ["", "", ""]]);
    let cell = select_move(&board, Player::O, Player::X, &mut rng());
    assert_eq!(cell, Some((0, 2)));
}

#[test]
fn test_blocks_human_threat() {
    let board = board_from([["X", "X", ""], ["", "", ""], ["", "", ""]]);
    let cell = select_move(&board, Player::O, Player::X, &mut rng());
    assert_eq!(cell, Some((0, 2)));
}

#[test]
fn test_blocks_first_threat_in_row_major_order() {
    // X forks: both (1, 0) and (2, 2) complete a line. The selector
    // only ever blocks the first threat it scans.
    let board = board_from([["X", "O", "O"], ["", "X", ""], ["X", "", ""]]);
    let cell = select_move(&board, Player::O, Player::X, &mut rng());
    assert_eq!(cell, Some((1, 0)));
}

#[test]
fn test_takes_center_without_threats() {
    let board = board_from([["X", "", ""], ["", "", ""], ["", "", ""]]);
    let cell = select_move(&board, Player::O, Player::X, &mut rng());
    assert_eq!(cell, Some((1, 1)));
}

#[test]
fn test_takes_a_corner_when_center_taken() {
    let corners = [(0, 0), (0, 2), (2, 0), (2, 2)];
    let board = board_from([["", "", ""], ["", "X", ""], ["", "", ""]]);
    for seed in 0..16 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let cell = select_move(&board, Player::O, Player::X, &mut rng).unwrap();
        assert!(corners.contains(&cell), "{cell:?} is not a corner");
    }
}

#[test]
fn test_takes_a_side_when_center_and_corners_taken() {
    // Center and corners occupied with no winner and no open threats;
    // only the sides (1, 0) and (1, 2) are left to choose from.
    let board = board_from([["X", "O", "X"], ["", "X", ""], ["O", "X", "O"]]);
    for seed in 0..16 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let cell = select_move(&board, Player::O, Player::X, &mut rng).unwrap();
        assert!(cell == (1, 0) || cell == (1, 2), "{cell:?} is not an open side");
    }
}

#[test]
fn test_full_board_returns_none() {
    let board = board_from([["X", "O", "X"], ["O", "X", "X"], ["O", "X", "O"]]);
    assert_eq!(select_move(&board, Player::O, Player::X, &mut rng()), None);
}

#[test]
fn test_same_seed_same_choice() {
    let board = board_from([["", "", ""], ["", "X", ""], ["", "", ""]]);
    let first = select_move(&board, Player::O, Player::X, &mut SmallRng::seed_from_u64(7));
    let second = select_move(&board, Player::O, Player::X, &mut SmallRng::seed_from_u64(7));
    assert_eq!(first, second);
}
