use clap::{Parser, ValueEnum};
use std::io::{self, BufRead, Write};

use crate::core::{Difficulty, GameState, GameStatus};
use crate::narration::messages;
use crate::session::GameSession;

/// Number guesser CLI options
#[derive(Parser, Debug)]
#[command(name = "number-guesser", author, version, about = "Guess the hidden number before your attempts run out", long_about = None)]
pub struct Cli {
    /// Difficulty of the first game
    #[arg(short, long, default_value_t, value_enum)]
    pub difficulty: DifficultyArg,

    /// Seed for reproducible targets
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Log engine decisions to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Difficulty as accepted on the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum DifficultyArg {
    Baby,
    #[default]
    Normal,
    Masochist,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Baby => Difficulty::Baby,
            DifficultyArg::Normal => Difficulty::Normal,
            DifficultyArg::Masochist => Difficulty::Masochist,
        }
    }
}

/// One line of player input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    Select(Difficulty),
    History,
    /// Anything else: a guess while playing, a restart otherwise.
    Input(String),
}

#[must_use]
pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "quit" | "exit" => Command::Quit,
        "history" => Command::History,
        _ => match trimmed.parse::<Difficulty>() {
            Ok(difficulty) => Command::Select(difficulty),
            Err(_) => Command::Input(trimmed.to_string()),
        },
    }
}

/// Drive a session from `reader` until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(session: &mut GameSession, mut reader: R, out: &mut W) -> io::Result<()> {
    render(session, out)?;

    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }

        match parse_command(&line) {
            Command::Quit => break,
            Command::Select(difficulty) => {
                session.select_difficulty(difficulty);
                writeln!(out, "Pain level: {}", difficulty.selector_label())?;
            }
            Command::History => {
                render_history(session.state(), out)?;
                continue;
            }
            Command::Input(raw) => {
                session.submit_or_restart(&raw);
            }
        }

        render(session, out)?;
    }

    writeln!(out, "Exiting.")?;
    Ok(())
}

/// Print the current message and what the player can do next.
pub fn render<W: Write>(session: &GameSession, out: &mut W) -> io::Result<()> {
    let state = session.state();
    writeln!(out, "[{}] {}", state.difficulty().label().to_uppercase(), state.message())?;

    match state.status() {
        GameStatus::Playing => {
            writeln!(out, "{}", messages::attempts_line(state.remaining_attempts()))?;
        }
        status => {
            if status.is_terminal() {
                render_history(state, out)?;
            }
            writeln!(
                out,
                "Press Enter: {} [{}]",
                messages::start_prompt(status),
                session.selected_difficulty().selector_label()
            )?;
        }
    }
    Ok(())
}

pub fn render_history<W: Write>(state: &GameState, out: &mut W) -> io::Result<()> {
    if state.history().is_empty() {
        return Ok(());
    }

    writeln!(
        out,
        "{} ({})",
        messages::history_heading(),
        messages::history_count(state.history().len())
    )?;
    for record in state.history() {
        writeln!(out, "  {} - {}", messages::history_entry(record), record.outcome)?;
    }
    Ok(())
}
