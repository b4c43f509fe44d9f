//! Per-round state owned by the world.

use word_search_core::{
    FoundWords, Grid, Outcome, RoundConfig, RoundId, RoundSummary, RoundWords,
};

/// Points awarded per letter of a found word.
pub(crate) const POINTS_PER_LETTER: u32 = 10;
/// Points awarded per second left on the countdown when the round is won.
pub(crate) const POINTS_PER_SECOND_LEFT: u32 = 5;

/// Lifecycle of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RoundStatus {
    Playing,
    Finished(Outcome),
}

/// Aggregate created fresh at round start and discarded wholesale at the next.
#[derive(Clone, Debug)]
pub(crate) struct Round {
    pub(crate) id: RoundId,
    pub(crate) config: RoundConfig,
    pub(crate) grid: Grid,
    pub(crate) words: RoundWords,
    pub(crate) found: FoundWords,
    pub(crate) score: u32,
    pub(crate) time_remaining: u32,
    pub(crate) status: RoundStatus,
}

impl Round {
    pub(crate) fn new(id: RoundId, config: RoundConfig, grid: Grid, words: RoundWords) -> Self {
        Self {
            id,
            config,
            grid,
            words,
            found: FoundWords::new(),
            score: 0,
            time_remaining: config.time_limit_secs(),
            status: RoundStatus::Playing,
        }
    }

    pub(crate) fn is_playing(&self) -> bool {
        self.status == RoundStatus::Playing
    }

    pub(crate) fn all_found(&self) -> bool {
        self.found.len() == self.words.len()
    }

    /// Awards the per-letter bonus and returns the new score.
    pub(crate) fn award_word(&mut self, word: &str) -> u32 {
        let letters = u32::try_from(word.chars().count()).unwrap_or(u32::MAX);
        self.score = self
            .score
            .saturating_add(letters.saturating_mul(POINTS_PER_LETTER));
        self.score
    }

    pub(crate) fn missed_words(&self) -> Vec<String> {
        self.words
            .words()
            .filter(|word| !self.found.contains(word))
            .map(str::to_owned)
            .collect()
    }

    /// Closes the round, applying the time bonus atomically with a win.
    pub(crate) fn finish(&mut self, outcome: Outcome) -> RoundSummary {
        let time_bonus = match outcome {
            Outcome::Won => {
                let bonus = self.time_remaining.saturating_mul(POINTS_PER_SECOND_LEFT);
                self.score = self.score.saturating_add(bonus);
                Some(bonus)
            }
            Outcome::Lost => None,
        };
        self.status = RoundStatus::Finished(outcome);

        RoundSummary {
            outcome,
            final_score: self.score,
            found_count: self.found.len(),
            total_count: self.words.len(),
            time_bonus,
            missed_words: self.missed_words(),
        }
    }
}
