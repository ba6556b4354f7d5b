//! Core domain types: seats, cells, and the board.

use serde::{Deserialize, Serialize};

/// One of the two occupancy identities in a game.
///
/// Seat one always carries occupancy code 1 and seat two code 2;
/// the binding is fixed by construction and never changes for the
/// lifetime of an engine.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Seat {
    /// First seat (occupancy code 1, player index 0).
    One,
    /// Second seat (occupancy code 2, player index 1).
    Two,
}

impl Seat {
    /// Returns the occupancy code stored in cells taken by this seat.
    pub fn code(self) -> u8 {
        match self {
            Seat::One => 1,
            Seat::Two => 2,
        }
    }

    /// Returns the index of this seat in the engine's player array.
    pub fn index(self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
        }
    }

    /// Converts an occupancy code back into a seat.
    ///
    /// Code 0 (empty) and anything above 2 have no seat.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Seat::One),
            2 => Some(Seat::Two),
            _ => None,
        }
    }

    /// Returns the other seat.
    pub fn opponent(self) -> Self {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }
}

/// A single board position: empty or taken by a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Cell {
    /// No mark placed here yet.
    #[default]
    Empty,
    /// Taken by the given seat.
    Taken(Seat),
}

impl Cell {
    /// Returns the occupancy code: 0 for empty, 1 or 2 for a taken cell.
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Taken(seat) => seat.code(),
        }
    }

    /// Returns the occupying seat, if any.
    pub fn seat(self) -> Option<Seat> {
        match self {
            Cell::Empty => None,
            Cell::Taken(seat) => Some(seat),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Occupies the cell for the given seat.
    ///
    /// No occupancy constraint is enforced at this layer; the engine
    /// rejects moves on taken cells before calling this.
    pub fn fill(&mut self, seat: Seat) {
        *self = Cell::Taken(seat);
    }

    /// Returns the cell to empty.
    pub fn clear(&mut self) {
        *self = Cell::Empty;
    }
}

/// One of the two board diagonals.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Diagonal {
    /// Main diagonal: (0,0), (1,1), (2,2).
    Main,
    /// Anti-diagonal: (0,2), (1,1), (2,0).
    Anti,
}

/// 3x3 tic-tac-toe board, row-major.
///
/// Always holds exactly nine cells. Owned exclusively by the engine
/// and reset between rounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    grid: [[Cell; Board::SIZE]; Board::SIZE],
}

impl Board {
    /// Side length of the board.
    pub const SIZE: usize = 3;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            grid: [[Cell::Empty; Board::SIZE]; Board::SIZE],
        }
    }

    /// Gets the cell at the given coordinates.
    ///
    /// Callers index with already-validated coordinates; the engine
    /// performs bounds checking before reaching the board.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.grid[row][col]
    }

    /// Occupies the cell at the given coordinates for the seat.
    pub fn fill(&mut self, row: usize, col: usize, seat: Seat) {
        self.grid[row][col].fill(seat);
    }

    /// Returns row `i`.
    pub fn row(&self, i: usize) -> [Cell; Board::SIZE] {
        self.grid[i]
    }

    /// Returns column `j`, gathered top to bottom.
    pub fn column(&self, j: usize) -> [Cell; Board::SIZE] {
        [self.grid[0][j], self.grid[1][j], self.grid[2][j]]
    }

    /// Returns the requested diagonal.
    pub fn diagonal(&self, which: Diagonal) -> [Cell; Board::SIZE] {
        match which {
            Diagonal::Main => [self.grid[0][0], self.grid[1][1], self.grid[2][2]],
            Diagonal::Anti => [self.grid[0][2], self.grid[1][1], self.grid[2][0]],
        }
    }

    /// Clears every cell.
    pub fn reset(&mut self) {
        for row in self.grid.iter_mut() {
            for cell in row.iter_mut() {
                cell.clear();
            }
        }
    }

    /// Checks if every cell is taken.
    ///
    /// Scans row by row, stopping at the first row that still has an
    /// empty cell.
    pub fn is_full(&self) -> bool {
        for row in &self.grid {
            if row.iter().any(|cell| cell.is_empty()) {
                return false;
            }
        }
        true
    }

    /// Returns the occupancy codes as a render-ready grid.
    ///
    /// This is the shape the UI layer consumes: 0 for empty, 1 and 2
    /// for the two seats.
    pub fn codes(&self) -> [[u8; Board::SIZE]; Board::SIZE] {
        self.grid.map(|row| row.map(Cell::code))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    /// Debug rendering of the occupancy codes; not a stable interface.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.grid {
            let line = row
                .iter()
                .map(|cell| cell.code().to_string())
                .collect::<Vec<_>>()
                .join(" | ");
            writeln!(f, "{line}")?;
            writeln!(f, "{}", "-".repeat(10))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_codes_round_trip() {
        assert_eq!(Seat::One.code(), 1);
        assert_eq!(Seat::Two.code(), 2);
        assert_eq!(Seat::from_code(1), Some(Seat::One));
        assert_eq!(Seat::from_code(2), Some(Seat::Two));
        assert_eq!(Seat::from_code(0), None);
        assert_eq!(Seat::from_code(3), None);
    }

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Seat::One.opponent(), Seat::Two);
        assert_eq!(Seat::Two.opponent(), Seat::One);
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for i in 0..Board::SIZE {
            for j in 0..Board::SIZE {
                assert!(board.get(i, j).is_empty());
            }
        }
        assert!(!board.is_full());
    }

    #[test]
    fn test_column_gathers_down() {
        let mut board = Board::new();
        board.fill(0, 1, Seat::One);
        board.fill(1, 1, Seat::Two);
        board.fill(2, 1, Seat::One);

        let col = board.column(1);
        assert_eq!(col[0].seat(), Some(Seat::One));
        assert_eq!(col[1].seat(), Some(Seat::Two));
        assert_eq!(col[2].seat(), Some(Seat::One));
    }

    #[test]
    fn test_diagonals() {
        let mut board = Board::new();
        board.fill(0, 0, Seat::One);
        board.fill(1, 1, Seat::Two);
        board.fill(2, 0, Seat::One);

        let main = board.diagonal(Diagonal::Main);
        assert_eq!(main[0].seat(), Some(Seat::One));
        assert_eq!(main[1].seat(), Some(Seat::Two));
        assert!(main[2].is_empty());

        let anti = board.diagonal(Diagonal::Anti);
        assert!(anti[0].is_empty());
        assert_eq!(anti[1].seat(), Some(Seat::Two));
        assert_eq!(anti[2].seat(), Some(Seat::One));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut board = Board::new();
        board.fill(0, 0, Seat::One);
        board.fill(2, 2, Seat::Two);
        board.reset();

        assert!(!board.is_full());
        assert_eq!(board.codes(), [[0; 3]; 3]);
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new();
        for i in 0..Board::SIZE {
            for j in 0..Board::SIZE {
                board.fill(i, j, if (i + j) % 2 == 0 { Seat::One } else { Seat::Two });
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_codes_grid() {
        let mut board = Board::new();
        board.fill(0, 0, Seat::One);
        board.fill(1, 1, Seat::Two);

        let codes = board.codes();
        assert_eq!(codes[0][0], 1);
        assert_eq!(codes[1][1], 2);
        assert_eq!(codes[2][2], 0);
    }
}
