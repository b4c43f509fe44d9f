#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure match engine resolving finished drags into round words.

use word_search_core::{CellCoord, Command, FoundWords, Grid, MatchResult, RoundWords};

/// Resolves a finished selection path against the round.
///
/// The letters under `path` are read in order. The spelled string is checked
/// first, then its reversal; the first one naming an unfound round word
/// produces [`MatchResult::NewMatch`]. Empty paths and paths leaving the grid
/// never match.
#[must_use]
pub fn resolve(
    path: &[CellCoord],
    grid: &Grid,
    round_words: &RoundWords,
    found_words: &FoundWords,
) -> MatchResult {
    if path.is_empty() {
        return MatchResult::NoMatch;
    }
    let Some(forward) = grid.spell(path) else {
        return MatchResult::NoMatch;
    };
    let reversed: String = forward.chars().rev().collect();

    [forward, reversed]
        .into_iter()
        .find(|candidate| round_words.contains(candidate) && !found_words.contains(candidate))
        .map_or(MatchResult::NoMatch, |word| MatchResult::NewMatch { word })
}

/// Translates a match result into the command recording it, if any.
pub fn claim(result: MatchResult, out: &mut Vec<Command>) {
    if let MatchResult::NewMatch { word } = result {
        out.push(Command::ClaimWord { word });
    }
}
