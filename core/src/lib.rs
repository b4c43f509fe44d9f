#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the word search engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative round state, and pure systems. Adapters and systems submit
//! [`Command`] values describing desired mutations, the world executes those
//! commands via its `apply` entry point, and then broadcasts [`Event`] values
//! that systems and presentation layers react to. Systems consume event
//! streams, query immutable views, and respond with new commands or pure
//! results such as [`MatchResult`].

pub mod word_pool;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use word_pool::WORD_POOL;

/// Letters used to fill grid cells that no placed word occupies.
pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Commands that express all permissible round mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Replaces the current round wholesale with a freshly generated one.
    StartRound {
        /// Preset values the round was generated with.
        config: RoundConfig,
        /// Fully populated letter grid.
        grid: Grid,
        /// Words that were successfully placed into the grid.
        words: RoundWords,
    },
    /// Reports that one second of the countdown elapsed.
    Tick {
        /// Round whose countdown produced the tick.
        round: RoundId,
    },
    /// Records a word that the match engine resolved as a new match.
    ClaimWord {
        /// Word as it appears in the round word set.
        word: String,
    },
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Announces that a new round replaced the previous one.
    RoundStarted {
        /// Identifier allocated to the round.
        round: RoundId,
        /// Number of rows and columns of the square grid.
        grid_size: u32,
        /// Number of words hidden in the grid.
        total_words: usize,
        /// Seconds available to find every word.
        time_remaining: u32,
    },
    /// Confirms that the countdown advanced by one second.
    TimeAdvanced {
        /// Round whose countdown advanced.
        round: RoundId,
        /// Seconds left after the tick.
        time_remaining: u32,
    },
    /// Confirms that a round word was found.
    WordFound {
        /// Word that was found.
        word: String,
        /// Score after awarding the word bonus.
        score: u32,
        /// Number of words found so far, including this one.
        found_count: usize,
        /// Number of words hidden in the round.
        total_count: usize,
    },
    /// Announces that the round finished, either by finding every word or by timeout.
    RoundEnded {
        /// Round that finished.
        round: RoundId,
        /// Final tally presented to the player.
        summary: RoundSummary,
    },
}

/// Location of a single grid cell expressed as row and column coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    row: u32,
    column: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Moves `distance` cells along `direction`.
    ///
    /// Returns `None` when the walk would leave the non-negative quadrant.
    /// Upper bounds are checked by the grid, not here.
    #[must_use]
    pub fn offset_by(self, direction: Direction, distance: u32) -> Option<CellCoord> {
        let (d_row, d_column) = direction.delta();
        let distance = i64::from(distance);
        let row = i64::from(self.row) + i64::from(d_row) * distance;
        let column = i64::from(self.column) + i64::from(d_column) * distance;
        Some(CellCoord::new(
            u32::try_from(row).ok()?,
            u32::try_from(column).ok()?,
        ))
    }

    /// Neighbouring cell one step along `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<CellCoord> {
        self.offset_by(direction, 1)
    }
}

/// The eight straight-line directions a word may run in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Toward decreasing row indices.
    North,
    /// Toward decreasing rows and increasing columns.
    NorthEast,
    /// Toward increasing column indices.
    East,
    /// Toward increasing rows and columns.
    SouthEast,
    /// Toward increasing row indices.
    South,
    /// Toward increasing rows and decreasing columns.
    SouthWest,
    /// Toward decreasing column indices.
    West,
    /// Toward decreasing rows and columns.
    NorthWest,
}

impl Direction {
    /// Every direction, in clockwise order starting at north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Unit vector `(d_row, d_column)` of the direction.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (-1, 0),
            Self::NorthEast => (-1, 1),
            Self::East => (0, 1),
            Self::SouthEast => (1, 1),
            Self::South => (1, 0),
            Self::SouthWest => (1, -1),
            Self::West => (0, -1),
            Self::NorthWest => (-1, -1),
        }
    }

    /// Direction leading from `from` to the adjacent cell `to`.
    ///
    /// Returns `None` when the cells are identical or not neighbours.
    #[must_use]
    pub fn between(from: CellCoord, to: CellCoord) -> Option<Direction> {
        let d_row = i64::from(to.row()) - i64::from(from.row());
        let d_column = i64::from(to.column()) - i64::from(from.column());
        Self::ALL.into_iter().find(|direction| {
            let (row, column) = direction.delta();
            i64::from(row) == d_row && i64::from(column) == d_column
        })
    }

    /// Direction pointing the opposite way.
    #[must_use]
    pub const fn reversed(self) -> Direction {
        match self {
            Self::North => Self::South,
            Self::NorthEast => Self::SouthWest,
            Self::East => Self::West,
            Self::SouthEast => Self::NorthWest,
            Self::South => Self::North,
            Self::SouthWest => Self::NorthEast,
            Self::West => Self::East,
            Self::NorthWest => Self::SouthEast,
        }
    }
}

/// Reasons a grid could not be assembled from raw letters.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    /// A grid must contain at least one cell.
    #[error("grid must contain at least one row")]
    Empty,
    /// The grid or one of its rows holds the wrong number of letters.
    #[error("expected {expected} letters for a square grid, found {actual}")]
    LengthMismatch {
        /// Number of letters the grid, or a single row, must hold.
        expected: usize,
        /// Number of letters supplied.
        actual: usize,
    },
    /// A cell holds something other than an uppercase `A`-`Z` letter.
    #[error("cell ({}, {}) holds {letter:?}, expected an uppercase letter", .cell.row(), .cell.column())]
    InvalidLetter {
        /// Offending cell.
        cell: CellCoord,
        /// Character stored in the cell.
        letter: char,
    },
}

/// Square grid of uppercase letters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: u32,
    letters: Vec<char>,
}

impl Grid {
    /// Builds a grid from row-major letters.
    pub fn from_letters(size: u32, letters: Vec<char>) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::Empty);
        }
        let side = size as usize;
        let expected = side * side;
        if letters.len() != expected {
            return Err(GridError::LengthMismatch {
                expected,
                actual: letters.len(),
            });
        }
        if let Some(index) = letters.iter().position(|letter| !ALPHABET.contains(letter)) {
            return Err(GridError::InvalidLetter {
                cell: CellCoord::new((index / side) as u32, (index % side) as u32),
                letter: letters[index],
            });
        }
        Ok(Self { size, letters })
    }

    /// Builds a grid from one string per row.
    ///
    /// Every row must hold exactly as many letters as there are rows.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let size = u32::try_from(rows.len()).map_err(|_| GridError::LengthMismatch {
            expected: u32::MAX as usize,
            actual: rows.len(),
        })?;
        if let Some(width) = rows
            .iter()
            .map(|row| row.as_ref().chars().count())
            .find(|&width| width != rows.len())
        {
            return Err(GridError::LengthMismatch {
                expected: rows.len(),
                actual: width,
            });
        }
        let letters = rows
            .iter()
            .flat_map(|row| row.as_ref().chars())
            .collect::<Vec<_>>();
        Self::from_letters(size, letters)
    }

    /// Number of rows, equal to the number of columns.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Reports whether the cell lies inside the grid.
    #[must_use]
    pub const fn contains(&self, cell: CellCoord) -> bool {
        cell.row() < self.size && cell.column() < self.size
    }

    /// Letter stored at the cell, or `None` outside the grid.
    #[must_use]
    pub fn letter(&self, cell: CellCoord) -> Option<char> {
        if !self.contains(cell) {
            return None;
        }
        self.letters
            .get(cell.row() as usize * self.size as usize + cell.column() as usize)
            .copied()
    }

    /// Iterator over rows in top-to-bottom order.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.letters.chunks(self.size as usize)
    }

    /// Reads the letters under `path` in order.
    ///
    /// Returns `None` when any cell lies outside the grid.
    #[must_use]
    pub fn spell(&self, path: &[CellCoord]) -> Option<String> {
        path.iter().map(|cell| self.letter(*cell)).collect()
    }
}

/// A word committed to the grid at a start cell running along a direction.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacedWord {
    word: String,
    start: CellCoord,
    direction: Direction,
}

impl PlacedWord {
    /// Describes a placement.
    #[must_use]
    pub fn new(word: impl Into<String>, start: CellCoord, direction: Direction) -> Self {
        Self {
            word: word.into(),
            start,
            direction,
        }
    }

    /// Placed word.
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Cell holding the first letter.
    #[must_use]
    pub const fn start(&self) -> CellCoord {
        self.start
    }

    /// Direction the letters run in.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Cells occupied by the word, first letter first.
    pub fn cells(&self) -> impl Iterator<Item = CellCoord> + '_ {
        (0..self.word.chars().count() as u32)
            .map_while(move |distance| self.start.offset_by(self.direction, distance))
    }
}

/// Words actually placed in the current round, in placement order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundWords {
    placements: Vec<PlacedWord>,
}

impl RoundWords {
    /// Wraps the placements produced by the generator.
    #[must_use]
    pub fn new(placements: Vec<PlacedWord>) -> Self {
        Self { placements }
    }

    /// Number of placed words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Reports whether no word could be placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Iterator over the placements in placement order.
    pub fn iter(&self) -> impl Iterator<Item = &PlacedWord> {
        self.placements.iter()
    }

    /// Iterator over the placed words.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.placements.iter().map(PlacedWord::word)
    }

    /// Reports whether `word` was placed this round.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.placement(word).is_some()
    }

    /// Placement record for `word`, if it was placed.
    #[must_use]
    pub fn placement(&self, word: &str) -> Option<&PlacedWord> {
        self.placements.iter().find(|placed| placed.word() == word)
    }
}

/// Words confirmed found this round, in the order they were found.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FoundWords {
    order: Vec<String>,
    lookup: HashSet<String>,
}

impl FoundWords {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `word`; returns `false` when it was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        if !self.lookup.insert(word.to_owned()) {
            return false;
        }
        self.order.push(word.to_owned());
        true
    }

    /// Reports whether `word` was already found.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(word)
    }

    /// Number of words found.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Reports whether nothing was found yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Found words in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}

/// Named presets controlling grid size, word count, and time limit together.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Small grid with few words.
    Easy,
    /// Default preset.
    #[default]
    Medium,
    /// Large grid with many words.
    Hard,
}

impl Difficulty {
    /// Every preset from easiest to hardest.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Round configuration associated with the preset.
    #[must_use]
    pub const fn config(self) -> RoundConfig {
        match self {
            Self::Easy => RoundConfig::new(8, 5, 160),
            Self::Medium => RoundConfig::new(10, 6, 160),
            Self::Hard => RoundConfig::new(12, 8, 160),
        }
    }

    /// Lowercase name used by adapters.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

/// Values consumed at round start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundConfig {
    grid_size: u32,
    word_count: usize,
    time_limit_secs: u32,
}

impl RoundConfig {
    /// Creates a configuration with explicit values.
    #[must_use]
    pub const fn new(grid_size: u32, word_count: usize, time_limit_secs: u32) -> Self {
        Self {
            grid_size,
            word_count,
            time_limit_secs,
        }
    }

    /// Number of rows and columns of the grid.
    #[must_use]
    pub const fn grid_size(&self) -> u32 {
        self.grid_size
    }

    /// Number of words requested from the pool.
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.word_count
    }

    /// Seconds on the countdown at round start.
    #[must_use]
    pub const fn time_limit_secs(&self) -> u32 {
        self.time_limit_secs
    }
}

/// Identifier allocated to each round by the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoundId(u32);

impl RoundId {
    /// Creates a round identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Identifier following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Outcome of resolving a finished selection against the round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchResult {
    /// The selection spells an unfound round word, forward or reversed.
    NewMatch {
        /// Word as it appears in the round word set.
        word: String,
    },
    /// The selection does not correspond to an unfound round word.
    NoMatch,
}

/// How a round finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Every round word was found before the countdown expired.
    Won,
    /// The countdown expired first.
    Lost,
}

/// Final tally of a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// How the round finished.
    pub outcome: Outcome,
    /// Score including any time bonus.
    pub final_score: u32,
    /// Number of words found.
    pub found_count: usize,
    /// Number of words hidden in the round.
    pub total_count: usize,
    /// Bonus awarded for remaining time, present only on a win.
    pub time_bonus: Option<u32>,
    /// Round words left unfound, in placement order.
    pub missed_words: Vec<String>,
}

impl RoundSummary {
    /// Reports whether the round was won.
    #[must_use]
    pub fn won(&self) -> bool {
        self.outcome == Outcome::Won
    }
}
