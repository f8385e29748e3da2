//! Board geometry.
//!
//! The board is an implicit `board_size x board_size` square. It owns no actors;
//! it only answers bounds questions and hands out distinct spawn tiles.

pub mod placement;

pub use placement::*;

use crate::game::types::{Direction, Position};

pub fn is_within_bounds(pos: Position, board_size: usize) -> bool {
    pos.x < board_size && pos.y < board_size
}

/// Neighbouring tile in `direction`, or `None` if that would leave the board.
pub fn step(pos: Position, direction: Direction, board_size: usize) -> Option<Position> {
    if !is_within_bounds(pos, board_size) {
        return None;
    }
    let Position { x, y } = pos;
    let next = match direction {
        Direction::Up => Position { x, y: y.checked_sub(1)? },
        Direction::Down => Position { x, y: y + 1 },
        Direction::Left => Position { x: x.checked_sub(1)?, y },
        Direction::Right => Position { x: x + 1, y },
    };
    is_within_bounds(next, board_size).then_some(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_inside_board() {
        let pos = Position::new(3, 3);
        assert_eq!(step(pos, Direction::Up, 10), Some(Position::new(3, 2)));
        assert_eq!(step(pos, Direction::Down, 10), Some(Position::new(3, 4)));
        assert_eq!(step(pos, Direction::Left, 10), Some(Position::new(2, 3)));
        assert_eq!(step(pos, Direction::Right, 10), Some(Position::new(4, 3)));
    }

    #[test]
    fn test_step_blocked_at_edges() {
        assert_eq!(step(Position::new(0, 0), Direction::Up, 10), None);
        assert_eq!(step(Position::new(0, 0), Direction::Left, 10), None);
        assert_eq!(step(Position::new(9, 9), Direction::Down, 10), None);
        assert_eq!(step(Position::new(9, 9), Direction::Right, 10), None);
    }

    #[test]
    fn test_step_on_single_tile_board() {
        for dir in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            assert_eq!(step(Position::new(0, 0), dir, 1), None);
        }
    }

    #[test]
    fn test_step_from_outside_board() {
        assert_eq!(step(Position::new(12, 0), Direction::Left, 10), None);
    }
}
