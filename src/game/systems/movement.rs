//! Player movement system.
//!
//! This module handles moving the player on the board.

use log::{debug, trace};
use rand::Rng;

use crate::game::state::GameState;
use crate::game::types::{Direction, GameEvent};

/// Move the player one tile in `direction`.
/// Returns `false`, leaving the position untouched, if the step would leave the board.
pub fn move_player<R: Rng>(game_state: &mut GameState<R>, direction: Direction) -> bool {
    let board_size = game_state.config.board_size;
    let from = game_state.player.position();
    let Some(to) = game_state.player.attempt_move(direction, board_size) else {
        trace!("[TurnEngine] Move {:?} from ({}, {}) blocked by board edge", direction, from.x, from.y);
        return false;
    };

    game_state.player.move_to(to);
    game_state.events.push(GameEvent::Moved { from, to });
    debug!("[TurnEngine] Player moved {:?} to ({}, {})", direction, to.x, to.y);
    true
}
