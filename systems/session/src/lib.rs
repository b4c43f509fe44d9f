#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Round controller wiring the word search systems to the world.
//!
//! A [`Session`] owns the [`World`] together with the selection tracker and
//! the countdown. Every entry point returns the events the world broadcast so
//! presentation layers can react to found words, ticks, and round endings
//! without the session knowing how they are rendered.

use std::time::Duration;

use log::warn;
use rand::Rng;
use thiserror::Error;
use word_search_core::{
    CellCoord, Command, Difficulty, Event, Grid, GridError, RoundConfig, RoundWords, WORD_POOL,
};
use word_search_system_countdown::Countdown;
use word_search_system_matching as matching;
use word_search_system_placement::Generator;
use word_search_system_selection::{SelectionError, SelectionTracker};
use word_search_world::{self as world, query, World};

/// Generation attempts made before giving up on a round with no placed words.
pub const MAX_GENERATION_ATTEMPTS: u32 = 5;

/// Failures surfaced by the session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The grid could not be built.
    #[error("failed to build grid")]
    Grid(#[from] GridError),
    /// Every generation attempt ended without a single placed word.
    #[error("no word could be placed after {attempts} generation attempts")]
    NoWordsPlaced {
        /// Number of generation attempts made.
        attempts: u32,
    },
    /// The input layer passed a coordinate outside the grid.
    #[error("invalid selection input")]
    Selection(#[from] SelectionError),
}

/// Single owner of the round and the systems observing it.
#[derive(Debug)]
pub struct Session<R> {
    world: World,
    selection: SelectionTracker,
    countdown: Countdown,
    generator: Generator,
    rng: R,
}

impl<R: Rng> Session<R> {
    /// Creates a session drawing randomness from `rng`.
    pub fn new(rng: R) -> Self {
        Self::with_generator(Generator::default(), rng)
    }

    /// Creates a session using a custom grid generator.
    pub fn with_generator(generator: Generator, rng: R) -> Self {
        Self {
            world: World::new(),
            selection: SelectionTracker::new(0),
            countdown: Countdown::new(),
            generator,
            rng,
        }
    }

    /// Generates and starts a round for the preset.
    ///
    /// Generation is retried when no word could be placed. The current round
    /// and its countdown are only replaced once a grid is ready, so a failed
    /// restart leaves the round in progress untouched.
    pub fn start_round(&mut self, difficulty: Difficulty) -> Result<Vec<Event>, SessionError> {
        let config = difficulty.config();

        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let (grid, words) = self.generator.generate(
                config.grid_size(),
                WORD_POOL,
                config.word_count(),
                &mut self.rng,
            )?;
            if !words.is_empty() {
                return Ok(self.load_round(config, grid, words));
            }
            warn!(
                "generation attempt {attempt} for {} placed no words",
                difficulty.name()
            );
        }

        Err(SessionError::NoWordsPlaced {
            attempts: MAX_GENERATION_ATTEMPTS,
        })
    }

    /// Starts a round from an already generated grid.
    pub fn load_round(
        &mut self,
        config: RoundConfig,
        grid: Grid,
        words: RoundWords,
    ) -> Vec<Event> {
        self.countdown.stop();
        self.execute(vec![Command::StartRound {
            config,
            grid,
            words,
        }])
    }

    /// Starts a drag at `cell`.
    pub fn begin(&mut self, cell: CellCoord) -> Result<(), SessionError> {
        Ok(self.selection.begin(cell)?)
    }

    /// Offers the cell the pointer moved onto.
    pub fn extend(&mut self, cell: CellCoord) -> Result<(), SessionError> {
        Ok(self.selection.extend(cell)?)
    }

    /// Releases the drag and resolves it against the round.
    pub fn end(&mut self) -> Vec<Event> {
        let path = self.selection.end();
        if path.is_empty() || !query::is_playing(&self.world) {
            return Vec::new();
        }

        let (Some(grid), Some(words), Some(found)) = (
            query::grid(&self.world),
            query::round_words(&self.world),
            query::found_words(&self.world),
        ) else {
            return Vec::new();
        };

        let mut commands = Vec::new();
        matching::claim(matching::resolve(&path, grid, words, found), &mut commands);
        self.execute(commands)
    }

    /// Feeds elapsed time to the countdown.
    pub fn advance(&mut self, dt: Duration) -> Vec<Event> {
        let mut commands = Vec::new();
        self.countdown.handle(&[], dt, &mut commands);
        self.execute(commands)
    }

    /// Read-only access to the round state.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Read-only access to the drag in progress.
    #[must_use]
    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    /// Read-only access to the countdown.
    #[must_use]
    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    fn execute(&mut self, commands: Vec<Command>) -> Vec<Event> {
        let mut log = Vec::new();
        let mut pending = commands;

        while !pending.is_empty() {
            let mut events = Vec::new();
            for command in pending.drain(..) {
                world::apply(&mut self.world, command, &mut events);
            }
            self.selection.handle(&events);
            self.countdown.handle(&events, Duration::ZERO, &mut pending);
            log.extend(events);
        }

        log
    }
}
