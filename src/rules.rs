//! Win evaluation rules.
//!
//! Pure functions over board state, separated from board storage.
//! A win can only be completed by the most recent move, so the scan
//! covers the four lines passing through that move's cell: its row,
//! its column, and both diagonals.

use crate::types::{Board, Cell, Diagonal, Seat};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Returns the seat owning all three cells of a line, if any.
fn line_owner(line: &[Cell; Board::SIZE]) -> Option<Seat> {
    match line[0].seat() {
        Some(seat) if line.iter().all(|cell| cell.seat() == Some(seat)) => Some(seat),
        _ => None,
    }
}

/// Checks whether the move just played at `(row, col)` completed a
/// winning line.
///
/// Scans the move's row, its column, and both diagonals. The diagonals
/// are checked even when the cell lies on neither; a diagonal not
/// through the move cannot have been completed by it, so the extra
/// checks never misfire.
#[instrument(skip(board))]
pub fn winning_seat(board: &Board, row: usize, col: usize) -> Option<Seat> {
    let through = [board.row(row), board.column(col)]
        .into_iter()
        .chain(Diagonal::iter().map(|d| board.diagonal(d)));

    for line in through {
        if let Some(seat) = line_owner(&line) {
            return Some(seat);
        }
    }

    None
}
