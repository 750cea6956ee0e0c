//! Validates the color pool against brute-force nearest-neighbor search
//! under randomized removal sequences

use chromagrow::algorithm::ColorPool;
use chromagrow::color::{Color, ColorCube};
use chromagrow::io::error::GrowthError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn pool_over(r: u16, g: u16, b: u16) -> ColorPool {
    let Ok(cube) = ColorCube::new(r, g, b) else {
        unreachable!("test cube resolutions are in range");
    };
    ColorPool::new(cube)
}

/// Smallest squared distance from the query to any still-available color
fn brute_force_nearest(pool: &ColorPool, query: Color) -> Option<u32> {
    (0..pool.cube().len())
        .map(|index| pool.cube().color_at(index))
        .filter(|&color| pool.is_available(color))
        .map(|color| query.squared_distance(color))
        .min()
}

#[test]
fn test_fresh_pool_holds_every_color() {
    let pool = pool_over(4, 4, 4);
    assert_eq!(pool.remaining(), 64);
    assert!(!pool.is_exhausted());
    for index in 0..pool.cube().len() {
        assert!(pool.is_available(pool.cube().color_at(index)));
    }
}

#[test]
fn test_nearest_matches_brute_force_under_random_removals() {
    let mut pool = pool_over(4, 4, 4);
    let mut rng = StdRng::seed_from_u64(99);

    // Drain most of the pool, checking optimality at every step.
    for _ in 0..60 {
        let query = Color::new(
            rng.random_range(0..8),
            rng.random_range(0..8),
            rng.random_range(0..8),
        );
        let Ok(found) = pool.nearest_available(query, &mut rng) else {
            unreachable!("pool is not exhausted yet");
        };
        assert!(pool.is_available(found));

        let Some(best) = brute_force_nearest(&pool, query) else {
            unreachable!("pool is not exhausted yet");
        };
        assert_eq!(query.squared_distance(found), best);

        assert!(pool.remove(found).is_ok());
        assert!(!pool.is_available(found));
    }
    assert_eq!(pool.remaining(), 4);
}

#[test]
fn test_queries_outside_the_cube_still_resolve() {
    let pool = pool_over(2, 2, 2);
    let mut rng = StdRng::seed_from_u64(5);

    // Preferred colors near the cube edge can exceed every resolution.
    let query = Color::new(200, 200, 200);
    let Ok(found) = pool.nearest_available(query, &mut rng) else {
        unreachable!("full pool always answers");
    };
    assert_eq!(found, Color::new(1, 1, 1));
}

#[test]
fn test_remove_rejects_double_removal() {
    let mut pool = pool_over(4, 2, 2);
    let color = Color::new(2, 1, 0);

    assert!(pool.remove(color).is_ok());
    assert!(matches!(
        pool.remove(color),
        Err(GrowthError::ColorUnavailable { .. })
    ));
    assert_eq!(pool.remaining(), 15);
}

#[test]
fn test_remove_rejects_colors_outside_the_cube() {
    let mut pool = pool_over(4, 2, 2);
    assert!(matches!(
        pool.remove(Color::new(4, 0, 0)),
        Err(GrowthError::ColorOutOfCube { .. })
    ));
    assert_eq!(pool.remaining(), 16);
}

#[test]
fn test_exhausted_pool_reports_exhaustion() {
    let mut pool = pool_over(2, 2, 1);
    let mut rng = StdRng::seed_from_u64(1);

    for index in 0..pool.cube().len() {
        assert!(pool.remove(pool.cube().color_at(index)).is_ok());
    }

    assert!(pool.is_exhausted());
    assert_eq!(pool.remaining(), 0);
    assert!(matches!(
        pool.nearest_available(Color::new(0, 0, 0), &mut rng),
        Err(GrowthError::PoolExhausted)
    ));
}

#[test]
fn test_search_never_returns_a_removed_color() {
    let mut pool = pool_over(3, 3, 3);
    let mut rng = StdRng::seed_from_u64(1234);
    let query = Color::new(1, 1, 1);

    let mut drained = Vec::new();
    while !pool.is_exhausted() {
        let Ok(found) = pool.nearest_available(query, &mut rng) else {
            unreachable!("pool still has colors");
        };
        assert!(!drained.contains(&found), "{found} returned twice");
        assert!(pool.remove(found).is_ok());
        drained.push(found);
    }
    assert_eq!(drained.len(), 27);
}

#[test]
fn test_single_color_pool_drains_to_empty() {
    let mut pool = pool_over(1, 1, 1);
    let mut rng = StdRng::seed_from_u64(0);

    let Ok(only) = pool.nearest_available(Color::new(9, 9, 9), &mut rng) else {
        unreachable!("a fresh pool holds its single color");
    };
    assert_eq!(only, Color::new(0, 0, 0));
    assert!(pool.remove(only).is_ok());
    assert!(pool.is_exhausted());
}
