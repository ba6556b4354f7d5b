//! Two-player tic-tac-toe: a small synchronous game engine with round
//! scoring.
//!
//! # Architecture
//!
//! - **Types**: [`Seat`], [`Cell`], and [`Board`] — occupancy state and
//!   line accessors over a fixed 3x3 grid.
//! - **Rules**: pure win evaluation over the lines through the last move.
//! - **Engine**: applies moves, validates them, alternates turns, and
//!   reports the round [`Outcome`].
//! - **Series**: win counts across rounds between the same two players.
//!
//! The engine is the whole core; rendering, menus, and input belong to
//! a front-end that consumes the in-process API below.
//!
//! # Example
//!
//! ```
//! use tictactoe::{Engine, Outcome, Player};
//!
//! # fn main() -> Result<(), tictactoe::MoveError> {
//! let mut engine = Engine::seeded(
//!     Player::new("ada", "X"),
//!     Player::new("grace", "O"),
//!     42,
//! );
//!
//! let first = engine.active_seat();
//! assert_eq!(engine.play_round(1, 1)?, Outcome::Ongoing);
//! assert_eq!(engine.active_seat(), first.opponent());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod player;
mod rules;
mod series;
mod types;

pub use engine::{Engine, MoveError, Outcome};
pub use player::Player;
pub use rules::winning_seat;
pub use series::Series;
pub use types::{Board, Cell, Diagonal, Seat};
