#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that plays the word search in a terminal.

mod input;
mod render;

use std::{
    io::{self, BufRead, Write},
    time::Instant,
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use word_search_core::{CellCoord, Difficulty, Event};
use word_search_system_session::{Session, SessionError};
use word_search_world::query;

use crate::input::Input;

/// Command-line arguments accepted by the word search binary.
#[derive(Debug, Parser)]
#[command(name = "word-search", about = "Find the hidden words before time runs out")]
struct CliArgs {
    /// Preset controlling grid size, word count, and time limit.
    #[arg(long, value_enum, default_value_t = DifficultyArg::Medium)]
    difficulty: DifficultyArg,
    /// Seed for reproducible grids; drawn from the OS when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Print where every word was placed.
    #[arg(long)]
    reveal: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(value: DifficultyArg) -> Self {
        match value {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

/// Entry point for the word search command-line interface.
fn main() -> Result<()> {
    env_logger::init();
    let args = CliArgs::parse();

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("seeding grid generation with {seed}");
    let mut session = Session::new(ChaCha8Rng::seed_from_u64(seed));
    let mut difficulty = Difficulty::from(args.difficulty);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let events = session
        .start_round(difficulty)
        .context("failed to start the first round")?;
    render::events(&mut out, &events)?;
    render::board(&mut out, session.world(), args.reveal)?;
    render::help(&mut out)?;

    let mut last_input = Instant::now();
    let mut lines = io::stdin().lock().lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read from stdin")?;

        let now = Instant::now();
        let ticks = session.advance(now.duration_since(last_input));
        last_input = now;
        render::events(&mut out, &ticks)?;

        match input::parse(&line) {
            Ok(Input::Quit) => break,
            Ok(Input::Help) => render::help(&mut out)?,
            Ok(Input::Board) => render::board(&mut out, session.world(), args.reveal)?,
            Ok(Input::NewRound(choice)) => {
                difficulty = choice.unwrap_or(difficulty);
                let events = session
                    .start_round(difficulty)
                    .context("failed to start a new round")?;
                last_input = Instant::now();
                render::events(&mut out, &events)?;
                render::board(&mut out, session.world(), args.reveal)?;
            }
            Ok(Input::Drag(_)) if !query::is_playing(session.world()) => {
                writeln!(out, "The round is over. Type `new` to play again.")?;
            }
            Ok(Input::Drag(cells)) => match drag(&mut session, &cells) {
                Ok(events) if events.is_empty() => writeln!(out, "No match.")?,
                Ok(events) => {
                    render::events(&mut out, &events)?;
                    render::board(&mut out, session.world(), args.reveal)?;
                }
                Err(error) => writeln!(out, "{:#}", anyhow::Error::from(error))?,
            },
            Err(error) => writeln!(out, "{error}")?,
        }
    }

    Ok(())
}

fn drag<R: Rng>(session: &mut Session<R>, cells: &[CellCoord]) -> Result<Vec<Event>, SessionError> {
    let Some((first, rest)) = cells.split_first() else {
        return Ok(Vec::new());
    };
    session.begin(*first)?;
    for cell in rest {
        session.extend(*cell)?;
    }
    Ok(session.end())
}
