//! Spawn placement.
//!
//! Hands out distinct random tiles for the initial actor layout.

use std::collections::HashSet;

use log::debug;
use rand::Rng;

use crate::config::error::{ConfigError, Result};
use crate::game::types::Position;

/// Sample `count` pairwise-distinct tiles uniformly at random.
///
/// Fails up front when the board has fewer than `count` tiles, so sampling never
/// spins on an impossible layout.
pub fn assign_positions<R: Rng>(
    count: usize,
    board_size: usize,
    rng: &mut R,
) -> Result<Vec<Position>> {
    if count > board_size.saturating_mul(board_size) {
        return Err(ConfigError::NotEnoughTiles {
            requested: count,
            board_size,
        });
    }

    let mut taken = HashSet::with_capacity(count);
    let mut positions = Vec::with_capacity(count);
    while positions.len() < count {
        let pos = Position {
            x: rng.random_range(0..board_size),
            y: rng.random_range(0..board_size),
        };
        if taken.insert(pos) {
            positions.push(pos);
        }
    }

    debug!("[Placement] Assigned {} positions on a {}x{} board", count, board_size, board_size);
    Ok(positions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_positions_are_distinct_and_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let positions = assign_positions(12, 4, &mut rng).expect("enough tiles");
            assert_eq!(positions.len(), 12);
            let unique: HashSet<_> = positions.iter().collect();
            assert_eq!(unique.len(), 12);
            assert!(positions.iter().all(|p| p.x < 4 && p.y < 4));
        }
    }

    #[test]
    fn test_fills_whole_board() {
        let mut rng = StdRng::seed_from_u64(1);
        let positions = assign_positions(9, 3, &mut rng).expect("exact fit");
        let unique: HashSet<_> = positions.into_iter().collect();
        assert_eq!(unique.len(), 9);
    }

    #[test]
    fn test_zero_count() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(assign_positions(0, 5, &mut rng).expect("nothing to place").is_empty());
    }

    #[test]
    fn test_too_many_positions() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = assign_positions(5, 2, &mut rng).unwrap_err();
        assert!(matches!(err, ConfigError::NotEnoughTiles { requested: 5, board_size: 2 }));
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = assign_positions(6, 10, &mut StdRng::seed_from_u64(42)).expect("layout");
        let b = assign_positions(6, 10, &mut StdRng::seed_from_u64(42)).expect("layout");
        assert_eq!(a, b);
    }
}
