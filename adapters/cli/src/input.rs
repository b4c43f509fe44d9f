//! Parsing of the lines typed at the prompt.

use thiserror::Error;
use word_search_core::{CellCoord, Difficulty};

/// Delimiter separating the row from the column of a typed cell.
const CELL_DELIMITER: char = ',';

/// Instruction decoded from one input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Input {
    /// Drag across the listed cells, then release.
    Drag(Vec<CellCoord>),
    /// Start a new round, optionally switching preset.
    NewRound(Option<Difficulty>),
    /// Print the board again.
    Board,
    /// Print usage.
    Help,
    /// Leave the game.
    Quit,
}

/// Errors that can occur while decoding an input line.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub(crate) enum InputError {
    /// The line was empty or contained only whitespace.
    #[error("type a list of cells such as `0,0 0,1 0,2`, or `help`")]
    Empty,
    /// A cell was not written as `row,column`.
    #[error("could not parse cell '{0}', expected row,column")]
    InvalidCell(String),
    /// `new` was followed by an unknown preset.
    #[error("unknown difficulty '{0}', expected easy, medium or hard")]
    UnknownDifficulty(String),
}

/// Decodes a line typed at the prompt.
pub(crate) fn parse(line: &str) -> Result<Input, InputError> {
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return Err(InputError::Empty);
    };

    match first.to_ascii_lowercase().as_str() {
        "quit" | "exit" | "q" => return Ok(Input::Quit),
        "help" | "?" => return Ok(Input::Help),
        "board" | "show" => return Ok(Input::Board),
        "new" => {
            return match words.next() {
                None => Ok(Input::NewRound(None)),
                Some(name) => parse_difficulty(name).map(|choice| Input::NewRound(Some(choice))),
            };
        }
        _ => {}
    }

    line.split_whitespace()
        .map(parse_cell)
        .collect::<Result<Vec<_>, _>>()
        .map(Input::Drag)
}

fn parse_cell(value: &str) -> Result<CellCoord, InputError> {
    let invalid = || InputError::InvalidCell(value.to_owned());
    let (row, column) = value.split_once(CELL_DELIMITER).ok_or_else(invalid)?;
    let row = row.trim().parse::<u32>().map_err(|_| invalid())?;
    let column = column.trim().parse::<u32>().map_err(|_| invalid())?;
    Ok(CellCoord::new(row, column))
}

fn parse_difficulty(name: &str) -> Result<Difficulty, InputError> {
    Difficulty::ALL
        .into_iter()
        .find(|difficulty| difficulty.name().eq_ignore_ascii_case(name))
        .ok_or_else(|| InputError::UnknownDifficulty(name.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cell_lists_as_drags() {
        assert_eq!(
            parse("0,0 0,1  0,2"),
            Ok(Input::Drag(vec![
                CellCoord::new(0, 0),
                CellCoord::new(0, 1),
                CellCoord::new(0, 2),
            ]))
        );
    }

    #[test]
    fn rejects_malformed_cells() {
        assert_eq!(
            parse("0,0 banana"),
            Err(InputError::InvalidCell("banana".to_owned()))
        );
        assert_eq!(parse("0,-1"), Err(InputError::InvalidCell("0,-1".to_owned())));
        assert_eq!(parse("   "), Err(InputError::Empty));
    }

    #[test]
    fn parses_control_words() {
        assert_eq!(parse("QUIT"), Ok(Input::Quit));
        assert_eq!(parse("help"), Ok(Input::Help));
        assert_eq!(parse("board"), Ok(Input::Board));
        assert_eq!(parse("new"), Ok(Input::NewRound(None)));
        assert_eq!(
            parse("new Hard"),
            Ok(Input::NewRound(Some(Difficulty::Hard)))
        );
        assert_eq!(
            parse("new expert"),
            Err(InputError::UnknownDifficulty("expert".to_owned()))
        );
    }
}
