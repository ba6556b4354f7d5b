//! Terminal front-end: player setup, board rendering, and round flow.
//!
//! The engine stays ignorant of presentation; this binary owns the
//! series state and drives it from stdin events, one move per line.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use crossterm::style::{Color, Stylize};
use std::io::{self, BufRead, Write};
use tictactoe::{Board, Engine, Player, Series};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let player1 = Player::new(cli.p1_name, cli.p1_mark).with_color(cli.p1_color);
    let player2 = Player::new(cli.p2_name, cli.p2_mark).with_color(cli.p2_color);
    let mut series = match cli.seed {
        Some(seed) => Series::seeded(player1, player2, seed),
        None => Series::new(player1, player2),
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("{}", series.score_line());
    render(series.engine())?;

    loop {
        print!("{} Enter `row col` (0-2), or q to quit: ", series.status());
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line.context("reading move input")?;
        let input = line.trim();
        if input.eq_ignore_ascii_case("q") {
            break;
        }

        let Some((row, col)) = parse_move(input) else {
            println!("Enter a move as `row col`, e.g. `0 2`.");
            continue;
        };

        let outcome = match series.play(row, col) {
            Ok(outcome) => outcome,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        render(series.engine())?;
        if outcome.is_terminal() {
            println!("{}", series.status());
            println!("{}", series.score_line());
            print!("Play again? [y/N]: ");
            io::stdout().flush()?;

            let Some(answer) = lines.next() else { break };
            let answer = answer.context("reading play-again input")?;
            if !answer.trim().eq_ignore_ascii_case("y") {
                break;
            }
            series.next_round();
            render(series.engine())?;
        }
    }

    println!("Final score: {}", series.score_line());
    Ok(())
}

/// Parses `row col` from a line of input.
fn parse_move(input: &str) -> Option<(usize, usize)> {
    let mut parts = input.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

/// Prints the board, coloring each mark with its player's color.
fn render(engine: &Engine) -> Result<()> {
    let mut out = io::stdout();
    for i in 0..Board::SIZE {
        let mut cells = Vec::with_capacity(Board::SIZE);
        for j in 0..Board::SIZE {
            let text = match engine.board().get(i, j).seat() {
                Some(seat) => {
                    let player = engine.player(seat);
                    let mark = player.mark().as_str();
                    format!("{}", mark.with(term_color(player.color())))
                }
                None => ".".to_string(),
            };
            cells.push(text);
        }
        writeln!(out, " {}", cells.join(" | "))?;
        if i < Board::SIZE - 1 {
            writeln!(out, "---+---+---")?;
        }
    }
    Ok(())
}

/// Maps a color name to a terminal color, falling back to the
/// terminal default for anything unrecognized.
fn term_color(name: &str) -> Color {
    match name.to_ascii_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "grey" | "gray" => Color::Grey,
        "white" => Color::White,
        _ => Color::Reset,
    }
}
