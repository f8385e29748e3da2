//! Combat system.
//!
//! One exchange: the attacker's weapon deals its damage to the victim and its backlash to
//! the attacker. Fights only ever happen between the player and the engaged enemy.

use log::debug;
use rand::Rng;

use crate::game::entities::Actor;
use crate::game::state::GameState;
use crate::game::types::{GameEvent, Outcome};

/// Damage dealt by one exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exchange {
    pub damage: u32,
    pub backlash: u32,
}

/// Who swings in `resolve_engaged_attack`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assailant {
    Player,
    EngagedEnemy,
}

/// Apply one weapon use. An unarmed attacker deals and takes nothing (`None`).
pub fn exchange(attacker: &mut Actor, victim: &mut Actor) -> Option<Exchange> {
    let weapon = attacker.weapon_handle()?;
    victim.apply_damage(weapon.damage);
    attacker.apply_damage(weapon.backlash);
    Some(Exchange {
        damage: weapon.damage,
        backlash: weapon.backlash,
    })
}

/// Resolve one exchange between the player and the engaged enemy, then settle the
/// aftermath: a dead enemy leaves the roster, and the game ends on defeat or victory.
///
/// Defeat is checked first, so an exchange that kills both the player and the last
/// enemy is a defeat. Returns the outcome if the game ended.
pub fn resolve_engaged_attack<R: Rng>(game_state: &mut GameState<R>, assailant: Assailant) -> Option<Outcome> {
    let idx = game_state.engaged?;
    let enemy = game_state.enemies.get_mut(idx)?;
    let player = &mut game_state.player;

    let (attacker, victim) = match assailant {
        Assailant::Player => (player, enemy),
        Assailant::EngagedEnemy => (enemy, player),
    };
    let (attacker_side, victim_side) = (attacker.side(), victim.side());

    if let Some(hit) = exchange(attacker, victim) {
        debug!(
            "[Combat] {:?} hit {:?} for {} (backlash {})",
            attacker_side, victim_side, hit.damage, hit.backlash
        );
        game_state.events.push(GameEvent::Attacked {
            attacker: attacker_side,
            victim: victim_side,
            damage: hit.damage,
            backlash: hit.backlash,
        });
    } else {
        debug!("[Combat] {:?} is unarmed, no damage dealt", attacker_side);
    }

    if !game_state.enemies[idx].is_alive() {
        let fallen = game_state.enemies.remove(idx);
        game_state.engaged = None;
        if let Some(enemy) = fallen.index() {
            debug!("[Combat] Enemy {} defeated", enemy);
            game_state.events.push(GameEvent::EnemyDefeated { enemy });
        }
    }

    let outcome = if !game_state.player.is_alive() {
        Some(Outcome::Defeat)
    } else if game_state.enemies.is_empty() {
        Some(Outcome::Victory)
    } else {
        None
    };
    if let Some(outcome) = outcome {
        game_state.end(outcome);
    }
    outcome
}
