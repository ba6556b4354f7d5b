//! Game engine: move application, turn alternation, and round outcome.

use crate::player::Player;
use crate::rules;
use crate::types::{Board, Seat};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Outcome of a round after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The round continues; the turn passes to the other seat.
    Ongoing,
    /// The seat completed a line and wins the round.
    Win(Seat),
    /// The board filled with no winning line.
    Draw,
}

impl Outcome {
    /// Returns the winning seat, if there is one.
    pub fn winner(&self) -> Option<Seat> {
        match self {
            Outcome::Win(seat) => Some(*seat),
            _ => None,
        }
    }

    /// Returns true once the round has ended, by win or draw.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "round in progress"),
            Outcome::Win(seat) => write!(f, "seat {:?} wins", seat),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// Errors rejected by [`Engine::play_round`].
///
/// All failures are local and recoverable; the engine state is
/// untouched when a move is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Coordinates fall outside the 3x3 grid.
    #[display("move ({row}, {col}) is out of bounds")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// The cell is already taken.
    #[display("cell ({row}, {col}) is already occupied")]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// The round has already ended in a win or draw.
    #[display("round is already over")]
    RoundOver,
}

impl std::error::Error for MoveError {}

/// The game engine: one board, two players, an active seat.
///
/// Player index 0 is bound to seat one (occupancy code 1) and player
/// index 1 to seat two (code 2), for the lifetime of the engine. The
/// starting seat is rolled uniformly at random; use [`Engine::seeded`]
/// to make the roll deterministic.
#[derive(Debug, Clone)]
pub struct Engine {
    board: Board,
    players: [Player; 2],
    active: Seat,
    outcome: Outcome,
    rng: SmallRng,
}

impl Engine {
    /// Creates an engine with an entropy-seeded starting roll.
    pub fn new(player1: Player, player2: Player) -> Self {
        Self::with_rng(player1, player2, SmallRng::from_entropy())
    }

    /// Creates an engine whose starting roll is driven by `seed`.
    pub fn seeded(player1: Player, player2: Player, seed: u64) -> Self {
        Self::with_rng(player1, player2, SmallRng::seed_from_u64(seed))
    }

    #[instrument(skip_all, fields(p1 = %player1.name(), p2 = %player2.name()))]
    fn with_rng(player1: Player, player2: Player, mut rng: SmallRng) -> Self {
        let active = Self::roll_seat(&mut rng);
        info!(starting_seat = ?active, "Engine created");
        Self {
            board: Board::new(),
            players: [player1, player2],
            active,
            outcome: Outcome::Ongoing,
            rng,
        }
    }

    fn roll_seat(rng: &mut SmallRng) -> Seat {
        if rng.gen_range(0..2) == 0 {
            Seat::One
        } else {
            Seat::Two
        }
    }

    /// Plays the active seat's move at `(row, col)`.
    ///
    /// On a non-terminal move, the turn passes to the other seat and
    /// `Ok(Outcome::Ongoing)` is returned. On a win or draw the active
    /// seat stays put and the round enters its terminal state; further
    /// moves are rejected until [`Engine::reset`].
    ///
    /// # Errors
    ///
    /// - [`MoveError::RoundOver`] once the round has ended.
    /// - [`MoveError::OutOfBounds`] for coordinates outside 0..=2.
    /// - [`MoveError::CellOccupied`] for a taken cell; marks are
    ///   never overwritten.
    #[instrument(skip(self), fields(active = ?self.active))]
    pub fn play_round(&mut self, row: usize, col: usize) -> Result<Outcome, MoveError> {
        if self.outcome.is_terminal() {
            warn!("Move attempted after round ended");
            return Err(MoveError::RoundOver);
        }
        if row >= Board::SIZE || col >= Board::SIZE {
            warn!(row, col, "Move out of bounds");
            return Err(MoveError::OutOfBounds { row, col });
        }
        if !self.board.get(row, col).is_empty() {
            warn!(row, col, "Cell already occupied");
            return Err(MoveError::CellOccupied { row, col });
        }

        self.board.fill(row, col, self.active);

        // Win scan over all four lines first, then one unconditional
        // fullness check. Interleaving the two is order-dependent.
        let outcome = if let Some(seat) = rules::winning_seat(&self.board, row, col) {
            Outcome::Win(seat)
        } else if self.board.is_full() {
            Outcome::Draw
        } else {
            Outcome::Ongoing
        };

        self.outcome = outcome;
        match outcome {
            Outcome::Ongoing => {
                self.active = self.active.opponent();
                debug!(next = ?self.active, "Turn passes");
            }
            Outcome::Win(seat) => {
                info!(winner = %self.players[seat.index()].name(), "Round won");
            }
            Outcome::Draw => {
                info!("Round drawn");
            }
        }

        debug_assert!(self.marks_balanced(), "seat mark counts diverged");
        Ok(outcome)
    }

    /// Maps an occupancy code to the owning player's mark.
    ///
    /// Code 0 (and any code without a seat) maps to the empty string,
    /// which is what the UI paints for an empty cell.
    pub fn mark_for(&self, code: u8) -> &str {
        Seat::from_code(code)
            .map(|seat| self.players[seat.index()].mark().as_str())
            .unwrap_or("")
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the seat whose turn it is.
    pub fn active_seat(&self) -> Seat {
        self.active
    }

    /// Returns the player whose turn it is.
    pub fn active_player(&self) -> &Player {
        &self.players[self.active.index()]
    }

    /// Returns the player bound to the given seat.
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// Returns both players, in seat order.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Returns the current round outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Re-rolls the starting seat at random.
    #[instrument(skip(self))]
    pub fn reroll_start(&mut self) {
        self.active = Self::roll_seat(&mut self.rng);
        debug!(starting_seat = ?self.active, "Starting seat re-rolled");
    }

    /// Clears the board for a new round.
    ///
    /// Scores are not owned here; see [`crate::Series`].
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.outcome = Outcome::Ongoing;
        debug!("Board reset");
    }

    /// Seat mark counts never differ by more than one under strict
    /// alternation.
    fn marks_balanced(&self) -> bool {
        let codes = self.board.codes();
        let count = |code: u8| {
            codes
                .iter()
                .flatten()
                .filter(|&&c| c == code)
                .count() as i64
        };
        (count(1) - count(2)).abs() <= 1
    }
}

impl Default for Engine {
    /// Headless defaults: "p1"/"p2" with X and O.
    fn default() -> Self {
        Self::new(Player::new("p1", "X"), Player::new("p2", "O"))
    }
}
