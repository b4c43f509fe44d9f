#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative round state management for the word search.
//!
//! The [`World`] is the single owner of the active round. A
//! [`Command::StartRound`] discards the previous round wholesale and allocates
//! a fresh [`RoundId`]; ticks stamped with any other identifier are ignored, so
//! a countdown left over from an earlier round can never mutate the new one.

mod round;

use log::{debug, info};
use word_search_core::{Command, Event, Outcome, RoundId};

use crate::round::Round;

/// Represents the authoritative word search state.
#[derive(Debug)]
pub struct World {
    next_round: RoundId,
    round: Option<Round>,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Creates a world with no round in progress.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next_round: RoundId::new(1),
            round: None,
        }
    }

    fn allocate_round_id(&mut self) -> RoundId {
        let id = self.next_round;
        self.next_round = id.next();
        id
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::StartRound {
            config,
            grid,
            words,
        } => {
            let id = world.allocate_round_id();
            info!(
                "round {} started: {}x{} grid, {} of {} words placed, {}s",
                id.get(),
                grid.size(),
                grid.size(),
                words.len(),
                config.word_count(),
                config.time_limit_secs(),
            );
            let round = Round::new(id, config, grid, words);
            out_events.push(Event::RoundStarted {
                round: id,
                grid_size: round.grid.size(),
                total_words: round.words.len(),
                time_remaining: round.time_remaining,
            });
            world.round = Some(round);
        }
        Command::Tick { round: tick_round } => {
            let Some(round) = world.round.as_mut() else {
                debug!("ignoring tick for round {}: no round", tick_round.get());
                return;
            };
            if round.id != tick_round || !round.is_playing() {
                debug!(
                    "ignoring stale tick for round {} (current round {})",
                    tick_round.get(),
                    round.id.get()
                );
                return;
            }

            round.time_remaining = round.time_remaining.saturating_sub(1);
            out_events.push(Event::TimeAdvanced {
                round: round.id,
                time_remaining: round.time_remaining,
            });

            if round.time_remaining == 0 {
                let summary = round.finish(Outcome::Lost);
                info!(
                    "round {} timed out: found {} of {} words, score {}",
                    round.id.get(),
                    summary.found_count,
                    summary.total_count,
                    summary.final_score
                );
                out_events.push(Event::RoundEnded {
                    round: round.id,
                    summary,
                });
            }
        }
        Command::ClaimWord { word } => {
            let Some(round) = world.round.as_mut() else {
                debug!("rejecting claim for {word}: no round");
                return;
            };
            if !round.is_playing() || !round.words.contains(&word) {
                debug!("rejecting claim for {word}: not claimable in round {}", round.id.get());
                return;
            }
            if !round.found.insert(&word) {
                debug!("rejecting claim for {word}: already found");
                return;
            }

            let score = round.award_word(&word);
            out_events.push(Event::WordFound {
                word,
                score,
                found_count: round.found.len(),
                total_count: round.words.len(),
            });

            if round.all_found() {
                let summary = round.finish(Outcome::Won);
                info!(
                    "round {} won with {}s left, final score {}",
                    round.id.get(),
                    round.time_remaining,
                    summary.final_score
                );
                out_events.push(Event::RoundEnded {
                    round: round.id,
                    summary,
                });
            }
        }
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use word_search_core::{FoundWords, Grid, Outcome, RoundConfig, RoundId, RoundWords};

    use super::{round::RoundStatus, World};

    /// Identifier of the current round, if one was started.
    #[must_use]
    pub fn round_id(world: &World) -> Option<RoundId> {
        world.round.as_ref().map(|round| round.id)
    }

    /// Configuration the current round was generated with.
    #[must_use]
    pub fn config(world: &World) -> Option<RoundConfig> {
        world.round.as_ref().map(|round| round.config)
    }

    /// Letter grid of the current round.
    #[must_use]
    pub fn grid(world: &World) -> Option<&Grid> {
        world.round.as_ref().map(|round| &round.grid)
    }

    /// Words placed in the current round.
    #[must_use]
    pub fn round_words(world: &World) -> Option<&RoundWords> {
        world.round.as_ref().map(|round| &round.words)
    }

    /// Words found so far in the current round.
    #[must_use]
    pub fn found_words(world: &World) -> Option<&FoundWords> {
        world.round.as_ref().map(|round| &round.found)
    }

    /// Score of the current round, zero when no round exists.
    #[must_use]
    pub fn score(world: &World) -> u32 {
        world.round.as_ref().map_or(0, |round| round.score)
    }

    /// Seconds left on the countdown, zero when no round exists.
    #[must_use]
    pub fn time_remaining(world: &World) -> u32 {
        world.round.as_ref().map_or(0, |round| round.time_remaining)
    }

    /// Reports whether a round is in progress and accepting input.
    #[must_use]
    pub fn is_playing(world: &World) -> bool {
        world.round.as_ref().is_some_and(|round| round.is_playing())
    }

    /// Outcome of the current round once it finished.
    #[must_use]
    pub fn outcome(world: &World) -> Option<Outcome> {
        world.round.as_ref().and_then(|round| match round.status {
            RoundStatus::Playing => None,
            RoundStatus::Finished(outcome) => Some(outcome),
        })
    }

    /// Round words paired with their found flag, in placement order.
    #[must_use]
    pub fn word_list(world: &World) -> Vec<WordEntry> {
        let Some(round) = world.round.as_ref() else {
            return Vec::new();
        };
        round
            .words
            .words()
            .map(|word| WordEntry {
                word: word.to_owned(),
                found: round.found.contains(word),
            })
            .collect()
    }

    /// Round words left unfound, in placement order.
    #[must_use]
    pub fn missed_words(world: &World) -> Vec<String> {
        world
            .round
            .as_ref()
            .map_or_else(Vec::new, |round| round.missed_words())
    }

    /// Entry of the word list presented beside the grid.
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct WordEntry {
        /// Round word.
        pub word: String,
        /// Whether the word was found.
        pub found: bool,
    }
}
