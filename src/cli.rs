//! Command-line interface for the terminal front-end.

use clap::Parser;

/// Two-player tic-tac-toe in the terminal.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe with round scoring", long_about = None)]
#[command(version)]
pub struct Cli {
    /// First player's name
    #[arg(long, default_value = "p1")]
    pub p1_name: String,

    /// First player's mark
    #[arg(long, default_value = "X")]
    pub p1_mark: String,

    /// First player's display color
    #[arg(long, default_value = "blue")]
    pub p1_color: String,

    /// Second player's name
    #[arg(long, default_value = "p2")]
    pub p2_name: String,

    /// Second player's mark
    #[arg(long, default_value = "O")]
    pub p2_mark: String,

    /// Second player's display color
    #[arg(long, default_value = "red")]
    pub p2_color: String,

    /// Seed for the starting-player roll (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,
}
