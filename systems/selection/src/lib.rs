#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Drag-selection tracker that keeps the player's path a straight line.
//!
//! The tracker moves between [`SelectionState::Idle`] and
//! [`SelectionState::Selecting`]. The second cell of a drag locks the
//! direction and is accepted only when it touches the first cell in one of
//! the eight directions; a second cell further away is ignored so the path
//! stays contiguous. Later cells are accepted only when they continue that
//! line.
//! Dragging back onto the previous cell retracts one step, and retracting to a
//! single cell unlocks the direction again. Rejected gestures are silent
//! no-ops. Cells outside the grid are contract violations and surface as
//! [`SelectionError::OutOfBounds`].

use thiserror::Error;
use word_search_core::{CellCoord, Direction, Event};

/// Reasons the tracker refuses an input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The cell does not exist on the current grid.
    #[error(
        "cell ({}, {}) lies outside the {size}x{size} grid",
        .cell.row(),
        .cell.column()
    )]
    OutOfBounds {
        /// Offending cell.
        cell: CellCoord,
        /// Side length of the current grid.
        size: u32,
    },
}

/// Phase of the drag state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionState {
    /// No drag in progress.
    Idle,
    /// A drag is collecting cells.
    Selecting,
}

/// Tracks one in-progress drag across grid coordinates.
#[derive(Clone, Debug)]
pub struct SelectionTracker {
    grid_size: u32,
    expired: bool,
    state: SelectionState,
    path: Vec<CellCoord>,
    direction: Option<Direction>,
}

impl SelectionTracker {
    /// Creates an idle tracker for a `grid_size` x `grid_size` grid.
    #[must_use]
    pub const fn new(grid_size: u32) -> Self {
        Self {
            grid_size,
            expired: false,
            state: SelectionState::Idle,
            path: Vec::new(),
            direction: None,
        }
    }

    /// Observes round lifecycle events.
    ///
    /// A new round resizes the tracker and re-enables input. Once the round
    /// ends the tracker drops any drag and ignores further input.
    pub fn handle(&mut self, events: &[Event]) {
        for event in events {
            match event {
                Event::RoundStarted { grid_size, .. } => {
                    self.grid_size = *grid_size;
                    self.expired = false;
                    self.reset();
                }
                Event::RoundEnded { .. } => {
                    self.expired = true;
                    self.reset();
                }
                Event::TimeAdvanced { .. } | Event::WordFound { .. } => {}
            }
        }
    }

    /// Starts a drag at `cell`, discarding any drag already in progress.
    ///
    /// Ignored once the round has ended.
    pub fn begin(&mut self, cell: CellCoord) -> Result<(), SelectionError> {
        self.check_bounds(cell)?;
        if self.expired {
            return Ok(());
        }

        self.path.clear();
        self.path.push(cell);
        self.direction = None;
        self.state = SelectionState::Selecting;
        Ok(())
    }

    /// Offers the cell the pointer moved onto.
    ///
    /// Ignored while idle or after the round has ended.
    pub fn extend(&mut self, cell: CellCoord) -> Result<(), SelectionError> {
        self.check_bounds(cell)?;
        if self.expired || self.state != SelectionState::Selecting {
            return Ok(());
        }

        let Some(&last) = self.path.last() else {
            return Ok(());
        };
        if cell == last {
            return Ok(());
        }

        if self.path.len() >= 2 && self.path[self.path.len() - 2] == cell {
            let _ = self.path.pop();
            if self.path.len() == 1 {
                self.direction = None;
            }
            return Ok(());
        }

        match self.direction {
            None => {
                if let Some(direction) = Direction::between(last, cell) {
                    self.direction = Some(direction);
                    self.path.push(cell);
                }
            }
            Some(direction) => {
                if last.step(direction) == Some(cell) {
                    self.path.push(cell);
                }
            }
        }
        Ok(())
    }

    /// Finishes the drag, returning its path and going back to idle.
    ///
    /// Returns an empty path when no drag was in progress.
    pub fn end(&mut self) -> Vec<CellCoord> {
        if self.state != SelectionState::Selecting {
            return Vec::new();
        }
        let path = std::mem::take(&mut self.path);
        self.reset();
        path
    }

    /// Current phase of the drag.
    #[must_use]
    pub const fn state(&self) -> SelectionState {
        self.state
    }

    /// Cells collected so far, in drag order.
    #[must_use]
    pub fn path(&self) -> &[CellCoord] {
        &self.path
    }

    /// Direction locked by the second cell of the drag.
    #[must_use]
    pub const fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Reports whether input is ignored because the round ended.
    #[must_use]
    pub const fn is_expired(&self) -> bool {
        self.expired
    }

    fn reset(&mut self) {
        self.path.clear();
        self.direction = None;
        self.state = SelectionState::Idle;
    }

    fn check_bounds(&self, cell: CellCoord) -> Result<(), SelectionError> {
        if cell.row() < self.grid_size && cell.column() < self.grid_size {
            Ok(())
        } else {
            Err(SelectionError::OutOfBounds {
                cell,
                size: self.grid_size,
            })
        }
    }
}
