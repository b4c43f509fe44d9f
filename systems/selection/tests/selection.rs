use word_search_core::{CellCoord, Event, Outcome, RoundId, RoundSummary};
use word_search_system_selection::{SelectionError, SelectionState, SelectionTracker};

fn cell(row: u32, column: u32) -> CellCoord {
    CellCoord::new(row, column)
}

fn drag(tracker: &mut SelectionTracker, cells: &[CellCoord]) {
    let (first, rest) = cells.split_first().expect("drag needs a cell");
    tracker.begin(*first).expect("start in bounds");
    for next in rest {
        tracker.extend(*next).expect("cell in bounds");
    }
}

fn round_ended() -> Event {
    Event::RoundEnded {
        round: RoundId::new(1),
        summary: RoundSummary {
            outcome: Outcome::Lost,
            final_score: 0,
            found_count: 0,
            total_count: 1,
            time_bonus: None,
            missed_words: vec!["GATO".to_owned()],
        },
    }
}

#[test]
fn straight_drag_collects_every_cell() {
    let mut tracker = SelectionTracker::new(10);
    drag(&mut tracker, &[cell(0, 0), cell(0, 1), cell(0, 2), cell(0, 3)]);

    assert_eq!(tracker.state(), SelectionState::Selecting);
    assert_eq!(
        tracker.end(),
        vec![cell(0, 0), cell(0, 1), cell(0, 2), cell(0, 3)]
    );
    assert_eq!(tracker.state(), SelectionState::Idle);
    assert!(tracker.path().is_empty());
}

#[test]
fn off_line_cell_is_ignored() {
    let mut tracker = SelectionTracker::new(10);
    drag(&mut tracker, &[cell(0, 0), cell(0, 1), cell(1, 1)]);

    assert_eq!(
        tracker.path(),
        &[cell(0, 0), cell(0, 1)],
        "(1, 1) leaves the locked east direction"
    );
}

#[test]
fn stepping_back_onto_previous_cell_retracts() {
    let mut tracker = SelectionTracker::new(10);
    drag(&mut tracker, &[cell(0, 0), cell(0, 1), cell(0, 2)]);
    tracker.extend(cell(0, 1)).expect("in bounds");

    assert_eq!(tracker.path(), &[cell(0, 0), cell(0, 1)]);
}

#[test]
fn revisiting_older_cells_is_ignored() {
    let mut tracker = SelectionTracker::new(10);
    drag(&mut tracker, &[cell(3, 3), cell(4, 4), cell(5, 5), cell(6, 6)]);
    tracker.extend(cell(4, 4)).expect("in bounds");
    tracker.extend(cell(3, 3)).expect("in bounds");
    tracker.extend(cell(6, 6)).expect("in bounds");

    assert_eq!(
        tracker.path(),
        &[cell(3, 3), cell(4, 4), cell(5, 5), cell(6, 6)],
        "only the immediate predecessor retracts the drag"
    );
}

#[test]
fn reentering_last_cell_is_ignored() {
    let mut tracker = SelectionTracker::new(10);
    drag(&mut tracker, &[cell(2, 2), cell(2, 2), cell(1, 1), cell(1, 1)]);

    assert_eq!(tracker.path(), &[cell(2, 2), cell(1, 1)]);
}

#[test]
fn second_cell_must_be_a_neighbour() {
    let mut tracker = SelectionTracker::new(10);
    drag(&mut tracker, &[cell(0, 0), cell(0, 2)]);

    assert_eq!(tracker.path(), &[cell(0, 0)], "a gap cannot start a line");
    assert_eq!(tracker.direction(), None);
}

#[test]
fn every_direction_can_be_dragged() {
    let mut tracker = SelectionTracker::new(5);
    let centre = cell(2, 2);
    for direction in word_search_core::Direction::ALL {
        let first = centre.step(direction).expect("neighbour");
        let second = first.step(direction).expect("second neighbour");
        drag(&mut tracker, &[centre, first, second]);
        assert_eq!(tracker.direction(), Some(direction));
        assert_eq!(tracker.end(), vec![centre, first, second]);
    }
}

#[test]
fn begin_while_selecting_restarts_the_drag() {
    let mut tracker = SelectionTracker::new(10);
    drag(&mut tracker, &[cell(0, 0), cell(1, 0)]);
    tracker.begin(cell(5, 5)).expect("in bounds");

    assert_eq!(tracker.path(), &[cell(5, 5)]);
    assert_eq!(tracker.direction(), None);
}

#[test]
fn end_on_idle_tracker_returns_empty_path() {
    let mut tracker = SelectionTracker::new(10);

    assert!(tracker.end().is_empty());
    assert!(tracker.end().is_empty());
    assert_eq!(tracker.state(), SelectionState::Idle);
}

#[test]
fn extend_without_begin_is_ignored() {
    let mut tracker = SelectionTracker::new(10);
    tracker.extend(cell(1, 1)).expect("in bounds");

    assert_eq!(tracker.state(), SelectionState::Idle);
    assert!(tracker.path().is_empty());
}

#[test]
fn out_of_bounds_cells_are_contract_violations() {
    let mut tracker = SelectionTracker::new(4);

    assert_eq!(
        tracker.begin(cell(4, 0)),
        Err(SelectionError::OutOfBounds {
            cell: cell(4, 0),
            size: 4
        })
    );
    tracker.begin(cell(3, 3)).expect("in bounds");
    assert_eq!(
        tracker.extend(cell(3, 4)),
        Err(SelectionError::OutOfBounds {
            cell: cell(3, 4),
            size: 4
        })
    );
    assert_eq!(tracker.path(), &[cell(3, 3)]);
}

#[test]
fn input_after_round_end_is_ignored() {
    let mut tracker = SelectionTracker::new(10);
    drag(&mut tracker, &[cell(0, 0), cell(0, 1)]);

    tracker.handle(&[round_ended()]);
    assert!(tracker.is_expired());
    assert_eq!(tracker.state(), SelectionState::Idle);

    tracker.begin(cell(0, 0)).expect("in bounds");
    tracker.extend(cell(0, 1)).expect("in bounds");
    assert!(tracker.path().is_empty());
    assert!(tracker.end().is_empty());
}

#[test]
fn new_round_resizes_and_reenables_input() {
    let mut tracker = SelectionTracker::new(8);
    tracker.handle(&[round_ended()]);
    tracker.handle(&[Event::RoundStarted {
        round: RoundId::new(2),
        grid_size: 12,
        total_words: 8,
        time_remaining: 160,
    }]);

    assert!(!tracker.is_expired());
    drag(&mut tracker, &[cell(11, 11), cell(10, 10)]);
    assert_eq!(tracker.end(), vec![cell(11, 11), cell(10, 10)]);
}
