//! Score tracking across rounds.
//!
//! Scores and round flow live in an explicit struct the front-end
//! owns and passes into its event handling, never in captured
//! mutable state.

use crate::engine::{Engine, MoveError, Outcome};
use crate::player::Player;
use crate::types::Seat;
use tracing::{info, instrument};

/// A sequence of rounds between the same two players, with per-seat
/// win counts.
///
/// "Play again" keeps the series and its scores; a brand-new series is
/// a new game from the start menu.
#[derive(Debug, Clone)]
pub struct Series {
    engine: Engine,
    wins: [u32; 2],
}

impl Series {
    /// Starts a series with an entropy-seeded starting roll.
    pub fn new(player1: Player, player2: Player) -> Self {
        Self {
            engine: Engine::new(player1, player2),
            wins: [0; 2],
        }
    }

    /// Starts a series whose starting rolls are driven by `seed`.
    pub fn seeded(player1: Player, player2: Player, seed: u64) -> Self {
        Self {
            engine: Engine::seeded(player1, player2, seed),
            wins: [0; 2],
        }
    }

    /// Plays a move, crediting the winner's score on a won round.
    ///
    /// # Errors
    ///
    /// Forwards any [`MoveError`] from the engine; rejected moves
    /// leave the scores untouched.
    #[instrument(skip(self))]
    pub fn play(&mut self, row: usize, col: usize) -> Result<Outcome, MoveError> {
        let outcome = self.engine.play_round(row, col)?;
        if let Outcome::Win(seat) = outcome {
            self.wins[seat.index()] += 1;
            info!(
                winner = %self.engine.player(seat).name(),
                score = self.wins[seat.index()],
                "Score credited"
            );
        }
        Ok(outcome)
    }

    /// Starts the next round: empty board, fresh random starting seat,
    /// scores kept.
    #[instrument(skip(self))]
    pub fn next_round(&mut self) {
        self.engine.reset();
        self.engine.reroll_start();
        info!(starter = %self.engine.active_player().name(), "Next round started");
    }

    /// Returns the win count for a seat.
    pub fn score(&self, seat: Seat) -> u32 {
        self.wins[seat.index()]
    }

    /// Returns the score banner, e.g. `ada : 2 Vs 1 : grace`.
    pub fn score_line(&self) -> String {
        let [p1, p2] = self.engine.players();
        format!(
            "{} : {} Vs {} : {}",
            p1.name(),
            self.wins[0],
            self.wins[1],
            p2.name()
        )
    }

    /// Returns a status banner for the current round.
    pub fn status(&self) -> String {
        match self.engine.outcome() {
            Outcome::Ongoing => format!("{} to move.", self.engine.active_player().name()),
            Outcome::Win(seat) => format!(
                "The winner of the last round is {}",
                self.engine.player(seat).name()
            ),
            Outcome::Draw => "DRAW!".to_string(),
        }
    }

    /// Returns the underlying engine.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }
}
