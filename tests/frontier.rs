//! Validates frontier queue membership, O(1) swap-removal, and uniform
//! random selection

use chromagrow::algorithm::FrontierQueue;
use chromagrow::algorithm::frontier::ENQUEUE_PRIORITY;
use chromagrow::io::error::GrowthError;
use chromagrow::spatial::Coord;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_duplicate_adds_are_no_ops() {
    let mut frontier = FrontierQueue::new(4, 4);
    let coord = Coord::new(2, 1);

    assert!(frontier.add(coord, ENQUEUE_PRIORITY).is_ok());
    assert!(frontier.add(coord, ENQUEUE_PRIORITY).is_ok());
    assert!(frontier.add(coord, 17).is_ok());

    assert_eq!(frontier.len(), 1);
    assert!(frontier.contains(coord));
}

#[test]
fn test_add_rejects_out_of_bounds_coordinates() {
    let mut frontier = FrontierQueue::new(4, 4);
    for coord in [
        Coord::new(-1, 0),
        Coord::new(0, -1),
        Coord::new(4, 0),
        Coord::new(0, 4),
    ] {
        assert!(matches!(
            frontier.add(coord, ENQUEUE_PRIORITY),
            Err(GrowthError::CoordOutOfBounds { .. })
        ));
    }
    assert!(frontier.is_empty());
}

#[test]
fn test_remove_rejects_non_members() {
    let mut frontier = FrontierQueue::new(4, 4);
    assert!(matches!(
        frontier.remove(Coord::new(1, 1)),
        Err(GrowthError::NotQueued { .. })
    ));
    assert!(matches!(
        frontier.remove(Coord::new(-3, 9)),
        Err(GrowthError::NotQueued { .. })
    ));
}

#[test]
fn test_swap_removal_keeps_membership_consistent() {
    let mut frontier = FrontierQueue::new(4, 4);
    let coords = [
        Coord::new(0, 0),
        Coord::new(1, 0),
        Coord::new(2, 2),
        Coord::new(3, 3),
    ];
    for coord in coords {
        assert!(frontier.add(coord, ENQUEUE_PRIORITY).is_ok());
    }
    assert_eq!(frontier.len(), 4);

    // Remove from the middle so the last element is swapped inward.
    assert!(frontier.remove(Coord::new(1, 0)).is_ok());
    assert_eq!(frontier.len(), 3);
    assert!(!frontier.contains(Coord::new(1, 0)));
    assert!(frontier.contains(Coord::new(3, 3)));

    // The swapped-in element must still be removable by coordinate.
    assert!(frontier.remove(Coord::new(3, 3)).is_ok());
    assert!(frontier.remove(Coord::new(0, 0)).is_ok());
    assert!(frontier.remove(Coord::new(2, 2)).is_ok());
    assert!(frontier.is_empty());
}

#[test]
fn test_pick_random_returns_only_members() {
    let mut frontier = FrontierQueue::new(8, 8);
    let mut rng = StdRng::seed_from_u64(3);

    assert_eq!(frontier.pick_random(&mut rng), None);

    let members = [Coord::new(0, 7), Coord::new(5, 5), Coord::new(7, 0)];
    for coord in members {
        assert!(frontier.add(coord, ENQUEUE_PRIORITY).is_ok());
    }

    for _ in 0..50 {
        let Some(picked) = frontier.pick_random(&mut rng) else {
            unreachable!("frontier is non-empty");
        };
        assert!(members.contains(&picked));
        assert!(frontier.contains(picked));
    }
    // Selection leaves membership untouched.
    assert_eq!(frontier.len(), 3);
}

#[test]
fn test_capacity_spans_the_grid() {
    let mut frontier = FrontierQueue::new(2, 3);
    assert_eq!(frontier.capacity(), 6);

    for x in 0..2 {
        for y in 0..3 {
            assert!(frontier.add(Coord::new(x, y), ENQUEUE_PRIORITY).is_ok());
        }
    }
    assert_eq!(frontier.len(), frontier.capacity());
}
