//! Plain-text presentation of the board and of round events.

use std::{collections::HashSet, io::Write};

use anyhow::Result;
use word_search_core::{CellCoord, Event, Outcome, RoundSummary};
use word_search_world::{query, World};

/// Prints the grid, the word list, and the status line.
///
/// Cells belonging to found words are shown in lowercase.
pub(crate) fn board(out: &mut impl Write, world: &World, reveal: bool) -> Result<()> {
    let Some(grid) = query::grid(world) else {
        writeln!(out, "No round in progress. Type `new` to start one.")?;
        return Ok(());
    };

    let found_cells = found_cells(world);
    write!(out, "    ")?;
    for column in 0..grid.size() {
        write!(out, "{column:>3}")?;
    }
    writeln!(out)?;

    for (row, letters) in grid.rows().enumerate() {
        write!(out, "{row:>3} ")?;
        for (column, letter) in letters.iter().enumerate() {
            let cell = CellCoord::new(row as u32, column as u32);
            let shown = if found_cells.contains(&cell) {
                letter.to_ascii_lowercase()
            } else {
                *letter
            };
            write!(out, "{shown:>3}")?;
        }
        writeln!(out)?;
    }
    writeln!(out)?;

    for entry in query::word_list(world) {
        let mark = if entry.found { 'x' } else { ' ' };
        writeln!(out, "  [{mark}] {}", entry.word)?;
    }

    if reveal {
        if let Some(words) = query::round_words(world) {
            writeln!(out)?;
            for placed in words.iter() {
                writeln!(
                    out,
                    "  {} at ({}, {}) heading {:?}",
                    placed.word(),
                    placed.start().row(),
                    placed.start().column(),
                    placed.direction()
                )?;
            }
        }
    }

    writeln!(
        out,
        "\nScore: {}   Time left: {}s",
        query::score(world),
        query::time_remaining(world)
    )?;
    Ok(())
}

/// Reports the events that matter to the player.
///
/// Countdown ticks are summarised by the status line rather than printed one by one.
pub(crate) fn events(out: &mut impl Write, events: &[Event]) -> Result<()> {
    for event in events {
        match event {
            Event::RoundStarted {
                grid_size,
                total_words,
                time_remaining,
                ..
            } => writeln!(
                out,
                "New round: {total_words} words hidden in a {grid_size}x{grid_size} grid, \
                 {time_remaining}s on the clock."
            )?,
            Event::WordFound {
                word,
                score,
                found_count,
                total_count,
            } => writeln!(
                out,
                "Found {word}! Score: {score} ({found_count}/{total_count})"
            )?,
            Event::RoundEnded { summary, .. } => summary_text(out, summary)?,
            Event::TimeAdvanced { .. } => {}
        }
    }
    Ok(())
}

fn summary_text(out: &mut impl Write, summary: &RoundSummary) -> Result<()> {
    match summary.outcome {
        Outcome::Won => {
            writeln!(out, "Congratulations! You found every word!")?;
            if let Some(bonus) = summary.time_bonus {
                writeln!(out, "Time bonus: {bonus}")?;
            }
        }
        Outcome::Lost => {
            writeln!(out, "Time is up!")?;
            writeln!(
                out,
                "You found {} of {} words.",
                summary.found_count, summary.total_count
            )?;
            if !summary.missed_words.is_empty() {
                writeln!(out, "Missed: {}", summary.missed_words.join(", "))?;
            }
        }
    }
    writeln!(out, "Final score: {}", summary.final_score)?;
    writeln!(out, "Type `new` to play again.")?;
    Ok(())
}

/// Prints the prompt commands.
pub(crate) fn help(out: &mut impl Write) -> Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  r,c r,c ...       drag across the listed cells (row,column)")?;
    writeln!(out, "  new [difficulty]  start a new round (easy, medium, hard)")?;
    writeln!(out, "  board             show the board again")?;
    writeln!(out, "  help              show this message")?;
    writeln!(out, "  quit              leave the game")?;
    Ok(())
}

fn found_cells(world: &World) -> HashSet<CellCoord> {
    let (Some(words), Some(found)) = (query::round_words(world), query::found_words(world)) else {
        return HashSet::new();
    };
    words
        .iter()
        .filter(|placed| found.contains(placed.word()))
        .flat_map(|placed| placed.cells())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(summary: &RoundSummary) -> String {
        let mut buffer = Vec::new();
        summary_text(&mut buffer, summary).expect("writes to memory");
        String::from_utf8(buffer).expect("utf-8 output")
    }

    #[test]
    fn loss_lists_missed_words() {
        let text = rendered(&RoundSummary {
            outcome: Outcome::Lost,
            final_score: 40,
            found_count: 1,
            total_count: 3,
            time_bonus: None,
            missed_words: vec!["PAZ".to_owned(), "LEAO".to_owned()],
        });
        assert!(text.contains("You found 1 of 3 words."));
        assert!(text.contains("Missed: PAZ, LEAO"));
        assert!(text.contains("Final score: 40"));
    }

    #[test]
    fn empty_world_prompts_for_a_round() {
        let mut buffer = Vec::new();
        board(&mut buffer, &World::new(), false).expect("writes to memory");
        let text = String::from_utf8(buffer).expect("utf-8 output");
        assert!(text.contains("No round in progress"));
    }
}
