#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Grid generation system that hides round words among random letters.
//!
//! Each selected word is tried at uniformly random start cells and directions
//! until it fits, up to a bounded number of attempts. Words that never fit are
//! dropped from the round rather than replaced, so dense grids may yield fewer
//! words than requested. Cells left empty afterwards receive uniformly random
//! letters.

use std::collections::HashSet;

use log::debug;
use rand::{seq::SliceRandom, Rng};
use word_search_core::{
    CellCoord, Direction, Grid, GridError, PlacedWord, RoundWords, ALPHABET,
};

/// Placement attempts granted to each word before it is dropped.
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 100;

/// Generates a grid using the default attempt budget.
///
/// See [`Generator::generate`].
pub fn generate<R, S>(
    size: u32,
    candidates: &[S],
    word_count: usize,
    rng: &mut R,
) -> Result<(Grid, RoundWords), GridError>
where
    R: Rng + ?Sized,
    S: AsRef<str>,
{
    Generator::default().generate(size, candidates, word_count, rng)
}

/// Configurable grid generator.
#[derive(Clone, Copy, Debug)]
pub struct Generator {
    max_attempts: u32,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(MAX_PLACEMENT_ATTEMPTS)
    }
}

impl Generator {
    /// Creates a generator granting `max_attempts` placement tries per word.
    #[must_use]
    pub const fn new(max_attempts: u32) -> Self {
        Self { max_attempts }
    }

    /// Builds a `size` x `size` grid hiding up to `word_count` distinct words
    /// drawn uniformly without replacement from `candidates`.
    ///
    /// Candidates containing anything other than `A`-`Z` are never selected.
    /// The returned [`RoundWords`] lists only the words that were placed.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Empty`] when `size` is zero.
    pub fn generate<R, S>(
        &self,
        size: u32,
        candidates: &[S],
        word_count: usize,
        rng: &mut R,
    ) -> Result<(Grid, RoundWords), GridError>
    where
        R: Rng + ?Sized,
        S: AsRef<str>,
    {
        if size == 0 {
            return Err(GridError::Empty);
        }

        let pool = distinct_candidates(candidates);
        let selected: Vec<&str> = pool.choose_multiple(rng, word_count).copied().collect();

        let mut buffer = LetterBuffer::new(size);
        let mut placements = Vec::with_capacity(selected.len());
        for word in selected {
            match self.place(&mut buffer, word, rng) {
                Some(placed) => placements.push(placed),
                None => debug!(
                    "dropping {word} after {} placement attempts on a {size}x{size} grid",
                    self.max_attempts
                ),
            }
        }

        let grid = buffer.fill(rng)?;
        Ok((grid, RoundWords::new(placements)))
    }

    fn place<R>(&self, buffer: &mut LetterBuffer, word: &str, rng: &mut R) -> Option<PlacedWord>
    where
        R: Rng + ?Sized,
    {
        let letters: Vec<char> = word.chars().collect();
        for _ in 0..self.max_attempts {
            let start = CellCoord::new(rng.gen_range(0..buffer.size), rng.gen_range(0..buffer.size));
            let direction = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];

            if let Some(cells) = buffer.fit(&letters, start, direction) {
                buffer.commit(&letters, &cells);
                return Some(PlacedWord::new(word, start, direction));
            }
        }
        None
    }
}

fn distinct_candidates<S: AsRef<str>>(candidates: &[S]) -> Vec<&str> {
    let mut seen = HashSet::new();
    candidates
        .iter()
        .map(AsRef::as_ref)
        .filter(|word| !word.is_empty() && word.chars().all(|letter| ALPHABET.contains(&letter)))
        .filter(|word| seen.insert(*word))
        .collect()
}

/// Grid under construction; `None` marks a cell no word claimed yet.
#[derive(Debug)]
struct LetterBuffer {
    size: u32,
    cells: Vec<Option<char>>,
}

impl LetterBuffer {
    fn new(size: u32) -> Self {
        let side = size as usize;
        Self {
            size,
            cells: vec![None; side * side],
        }
    }

    fn index(&self, cell: CellCoord) -> Option<usize> {
        if cell.row() < self.size && cell.column() < self.size {
            Some(cell.row() as usize * self.size as usize + cell.column() as usize)
        } else {
            None
        }
    }

    /// Cell indices the word would occupy, if every cell is in bounds and
    /// either empty or already holding the required letter.
    fn fit(&self, letters: &[char], start: CellCoord, direction: Direction) -> Option<Vec<usize>> {
        let mut indices = Vec::with_capacity(letters.len());
        for (distance, letter) in letters.iter().enumerate() {
            let cell = start.offset_by(direction, u32::try_from(distance).ok()?)?;
            let index = self.index(cell)?;
            match self.cells[index] {
                Some(existing) if existing != *letter => return None,
                _ => indices.push(index),
            }
        }
        Some(indices)
    }

    fn commit(&mut self, letters: &[char], indices: &[usize]) {
        for (index, letter) in indices.iter().zip(letters) {
            self.cells[*index] = Some(*letter);
        }
    }

    fn fill<R>(self, rng: &mut R) -> Result<Grid, GridError>
    where
        R: Rng + ?Sized,
    {
        let letters = self
            .cells
            .into_iter()
            .map(|cell| cell.unwrap_or_else(|| ALPHABET[rng.gen_range(0..ALPHABET.len())]))
            .collect();
        Grid::from_letters(self.size, letters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn fit_accepts_matching_overlap_and_rejects_conflicts() {
        let mut buffer = LetterBuffer::new(5);
        let gato: Vec<char> = "GATO".chars().collect();
        let cells = buffer
            .fit(&gato, CellCoord::new(0, 0), Direction::East)
            .expect("empty row fits");
        buffer.commit(&gato, &cells);

        let ovo: Vec<char> = "OVO".chars().collect();
        assert!(
            buffer.fit(&ovo, CellCoord::new(0, 3), Direction::South).is_some(),
            "shared letter O may be reused"
        );
        let uva: Vec<char> = "UVA".chars().collect();
        assert!(
            buffer.fit(&uva, CellCoord::new(0, 2), Direction::South).is_none(),
            "T cannot be overwritten with U"
        );
    }

    #[test]
    fn fit_rejects_words_running_off_the_grid() {
        let buffer = LetterBuffer::new(4);
        let word: Vec<char> = "CAVALO".chars().collect();
        for direction in Direction::ALL {
            assert!(buffer.fit(&word, CellCoord::new(0, 0), direction).is_none());
        }
        let short: Vec<char> = "PAZ".chars().collect();
        assert!(buffer.fit(&short, CellCoord::new(0, 0), Direction::North).is_none());
        assert!(buffer.fit(&short, CellCoord::new(0, 0), Direction::SouthEast).is_some());
    }

    #[test]
    fn distinct_candidates_drops_duplicates_and_non_letters() {
        let pool = distinct_candidates(&["GATO", "GATO", "GUARDA-CHUVA", "", "paz", "LEAO"]);
        assert_eq!(pool, vec!["GATO", "LEAO"]);
    }

    #[test]
    fn zero_size_is_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(
            generate(0, &["GATO"], 1, &mut rng),
            Err(GridError::Empty)
        );
    }
}
