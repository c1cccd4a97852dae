//! Greedy baseline: repeatedly place a knight on the first empty cell (row-major order)
//! that no placed knight attacks. Deterministic, no backtracking.

use crate::board::{Board, SIZE};
use crate::fitness::is_attacked;

/// Returns the first free, unattacked cell in row-major order.
fn first_safe_cell(board: &Board) -> Option<(usize, usize)> {
    (0..SIZE)
        .flat_map(|row| (0..SIZE).map(move |col| (row, col)))
        .find(|&(row, col)| !board.is_occupied(row, col) && !is_attacked(board.grid(), row, col))
}

pub fn greedy_placement() -> Board {
    let mut board = Board::empty();
    while let Some((row, col)) = first_safe_cell(&board) {
        board.set(row, col, true);
    }
    board
}
