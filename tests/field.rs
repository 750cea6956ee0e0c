//! Validates cell status transitions, frontier coupling, and rounded
//! neighbor-color averaging

use chromagrow::algorithm::FrontierQueue;
use chromagrow::color::Color;
use chromagrow::io::error::GrowthError;
use chromagrow::spatial::{Cell, Coord, GrowthField};

#[test]
fn test_preferred_color_rounds_the_average() {
    let mut field = GrowthField::new(4, 4);
    let mut frontier = FrontierQueue::new(4, 4);

    // Three committed neighbors of (1, 1) with channel sums 7, 3, and 1.
    assert!(
        field
            .commit(&mut frontier, Coord::new(0, 0), Color::new(1, 0, 0))
            .is_ok()
    );
    assert!(
        field
            .commit(&mut frontier, Coord::new(1, 0), Color::new(2, 1, 1))
            .is_ok()
    );
    assert!(
        field
            .commit(&mut frontier, Coord::new(2, 0), Color::new(4, 2, 0))
            .is_ok()
    );

    // (7+1)/3 = 2, (3+1)/3 = 1, (1+1)/3 = 0 with rounded division.
    assert_eq!(
        field.preferred_color(Coord::new(1, 1)),
        Some(Color::new(2, 1, 0))
    );
}

#[test]
fn test_preferred_color_requires_a_committed_neighbor() {
    let field = GrowthField::new(4, 4);
    assert_eq!(field.preferred_color(Coord::new(2, 2)), None);
    assert_eq!(field.preferred_color(Coord::new(-5, 2)), None);
}

#[test]
fn test_commit_enqueues_untouched_neighbors() {
    let mut field = GrowthField::new(4, 4);
    let mut frontier = FrontierQueue::new(4, 4);

    assert!(
        field
            .commit(&mut frontier, Coord::new(1, 1), Color::new(0, 0, 0))
            .is_ok()
    );
    assert_eq!(field.set_count(), 1);
    assert_eq!(frontier.len(), 8);
    for dx in -1..=1 {
        for dy in -1..=1 {
            let neighbor = Coord::new(1 + dx, 1 + dy);
            if (dx, dy) == (0, 0) {
                assert_eq!(field.cell(neighbor), Some(Cell::Set(Color::new(0, 0, 0))));
            } else {
                assert_eq!(field.cell(neighbor), Some(Cell::Queued));
                assert!(frontier.contains(neighbor));
            }
        }
    }
}

#[test]
fn test_corner_commit_reaches_three_neighbors() {
    let mut field = GrowthField::new(4, 4);
    let mut frontier = FrontierQueue::new(4, 4);

    assert!(
        field
            .commit(&mut frontier, Coord::new(0, 0), Color::new(0, 0, 0))
            .is_ok()
    );
    assert_eq!(frontier.len(), 3);
}

#[test]
fn test_committing_a_queued_cell_leaves_the_frontier() {
    let mut field = GrowthField::new(4, 4);
    let mut frontier = FrontierQueue::new(4, 4);

    assert!(
        field
            .commit(&mut frontier, Coord::new(0, 0), Color::new(0, 0, 0))
            .is_ok()
    );
    assert_eq!(field.cell(Coord::new(1, 1)), Some(Cell::Queued));

    assert!(
        field
            .commit(&mut frontier, Coord::new(1, 1), Color::new(1, 1, 1))
            .is_ok()
    );
    assert!(!frontier.contains(Coord::new(1, 1)));
    assert_eq!(
        field.cell(Coord::new(1, 1)),
        Some(Cell::Set(Color::new(1, 1, 1)))
    );
    assert_eq!(field.set_count(), 2);
}

#[test]
fn test_commit_rejects_already_set_cells() {
    let mut field = GrowthField::new(4, 4);
    let mut frontier = FrontierQueue::new(4, 4);

    assert!(
        field
            .commit(&mut frontier, Coord::new(2, 2), Color::new(0, 0, 0))
            .is_ok()
    );
    let before = frontier.len();

    assert!(matches!(
        field.commit(&mut frontier, Coord::new(2, 2), Color::new(1, 1, 1)),
        Err(GrowthError::CellAlreadySet { .. })
    ));
    // A rejected commit leaves no side effects behind.
    assert_eq!(field.set_count(), 1);
    assert_eq!(frontier.len(), before);
    assert_eq!(
        field.cell(Coord::new(2, 2)),
        Some(Cell::Set(Color::new(0, 0, 0)))
    );
}

#[test]
fn test_commit_rejects_out_of_bounds_coordinates() {
    let mut field = GrowthField::new(4, 4);
    let mut frontier = FrontierQueue::new(4, 4);

    assert!(matches!(
        field.commit(&mut frontier, Coord::new(4, 0), Color::new(0, 0, 0)),
        Err(GrowthError::CoordOutOfBounds { .. })
    ));
    assert_eq!(field.set_count(), 0);
    assert!(frontier.is_empty());
}
