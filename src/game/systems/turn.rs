//! End-of-turn resolution.
//!
//! Runs after every turn-consuming action: regeneration, engagement check, the engaged
//! enemy's ambush, then the turn counter advance.

use log::debug;
use rand::Rng;

use crate::game::state::GameState;
use crate::game::systems::combat::{Assailant, resolve_engaged_attack};
use crate::game::types::GameEvent;

pub fn end_turn<R: Rng>(game_state: &mut GameState<R>) {
    game_state.engaged = None;

    game_state.player.regenerate();
    for enemy in game_state.enemies.iter_mut() {
        enemy.regenerate();
    }

    // First enemy in roster order wins if several share the player's tile.
    let player_pos = game_state.player.position();
    game_state.engaged = game_state
        .enemies
        .iter()
        .position(|enemy| enemy.is_alive() && enemy.position() == player_pos);

    if let Some(idx) = game_state.engaged {
        if let Some(enemy) = game_state.enemies[idx].index() {
            debug!("[TurnEngine] Player engaged enemy {} at ({}, {})", enemy, player_pos.x, player_pos.y);
            game_state.events.push(GameEvent::Engaged { enemy });
        }
        if resolve_engaged_attack(game_state, Assailant::EngagedEnemy).is_some() {
            return;
        }
    }

    game_state.turn += 1;
    debug!("[TurnEngine] Turn {} begins", game_state.turn);
    game_state.events.push(GameEvent::TurnAdvanced { turn: game_state.turn });
}
