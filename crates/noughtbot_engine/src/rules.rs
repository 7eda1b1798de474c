//! Move validation and terminal-state detection.

use crate::types::{Board, Player, Square};
use derive_more::{Display, Error};
use tracing::instrument;

/// Error returned when a move cannot be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The coordinates fall outside the 3x3 grid.
    #[display("Cell ({}, {}) is out of range", _0, _1)]
    InvalidCell(usize, usize),
    /// The target square already holds a mark.
    #[display("Cell ({}, {}) is already taken", _0, _1)]
    CellOccupied(usize, usize),
    /// A move was submitted while it is the other player's turn.
    #[display("It's not {}'s turn", _0)]
    NotPlayersTurn(#[error(not(source))] Player),
    /// The game already has a winner or ended in a draw.
    #[display("Game is already over")]
    GameAlreadyOver,
}

/// All eight winning lines, in scan order: rows top-to-bottom,
/// columns left-to-right, main diagonal, anti-diagonal.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Places `player`'s mark at the given coordinates.
///
/// Fails without touching the board if the coordinates are out of
/// range or the square is occupied. Turn ownership is not checked
/// here; that is the session's job.
#[instrument(skip(board))]
pub fn apply_move(
    board: &mut Board,
    row: usize,
    col: usize,
    player: Player,
) -> Result<(), MoveError> {
    if !Board::in_bounds(row, col) {
        return Err(MoveError::InvalidCell(row, col));
    }
    if !board.is_empty(row, col) {
        return Err(MoveError::CellOccupied(row, col));
    }
    board
        .set(row, col, Square::Occupied(player))
        .map_err(|_| MoveError::InvalidCell(row, col))
}

fn line_owner(board: &Board, [a, b, c]: [(usize, usize); 3]) -> Option<Player> {
    match (
        board.get(a.0, a.1),
        board.get(b.0, b.1),
        board.get(c.0, c.1),
    ) {
        (
            Some(Square::Occupied(first)),
            Some(Square::Occupied(second)),
            Some(Square::Occupied(third)),
        ) if first == second && second == third => Some(first),
        _ => None,
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first fully-occupied line in scan order,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|&line| line_owner(board, line))
}

/// Checks for a draw: no winner and no empty squares left.
#[instrument(skip(board))]
pub fn is_draw(board: &Board, winner: Option<Player>) -> bool {
    winner.is_none() && board.is_full()
}

/// Hypothetical placement test: would `player` complete a line by
/// taking the given empty square?
#[instrument(skip(board))]
pub fn wins_at(board: &Board, row: usize, col: usize, player: Player) -> bool {
    if !board.is_empty(row, col) {
        return false;
    }
    let mut probe = board.clone();
    if probe.set(row, col, Square::Occupied(player)).is_err() {
        return false;
    }
    check_winner(&probe) == Some(player)
}
