//! Heuristic move selection for the computer opponent.

use crate::rules;
use crate::types::{Board, Player};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

const CORNERS: [(usize, usize); 4] = [(0, 0), (0, 2), (2, 0), (2, 2)];
const SIDES: [(usize, usize); 4] = [(0, 1), (1, 0), (1, 2), (2, 1)];

/// Picks the computer's next square.
///
/// Fixed-priority heuristic over the empty squares, enumerated in
/// row-major order:
///
/// 1. take an immediate win
/// 2. block the human's immediate win (first threat found only; a
///    double-threat fork is not resolved, which is how a human can
///    still beat this opponent)
/// 3. take the center
/// 4. take a random open corner
/// 5. take a random open side
/// 6. take any random empty square (safety net, not reachable once
///    step 5 covers the remaining squares)
///
/// Returns `None` only when the board is full.
#[instrument(skip(board, rng))]
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    computer: Player,
    human: Player,
    rng: &mut R,
) -> Option<(usize, usize)> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return None;
    }

    if let Some(&cell) = empty
        .iter()
        .find(|&&(row, col)| rules::wins_at(board, row, col, computer))
    {
        debug!(?cell, "taking winning square");
        return Some(cell);
    }

    if let Some(&cell) = empty
        .iter()
        .find(|&&(row, col)| rules::wins_at(board, row, col, human))
    {
        debug!(?cell, "blocking opponent");
        return Some(cell);
    }

    if board.is_empty(1, 1) {
        debug!("taking center");
        return Some((1, 1));
    }

    let corners: Vec<_> = CORNERS
        .iter()
        .copied()
        .filter(|&(row, col)| board.is_empty(row, col))
        .collect();
    if let Some(&cell) = corners.choose(rng) {
        debug!(?cell, "taking corner");
        return Some(cell);
    }

    let sides: Vec<_> = SIDES
        .iter()
        .copied()
        .filter(|&(row, col)| board.is_empty(row, col))
        .collect();
    if let Some(&cell) = sides.choose(rng) {
        debug!(?cell, "taking side");
        return Some(cell);
    }

    empty.choose(rng).copied()
}
