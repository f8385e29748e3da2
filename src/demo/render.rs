//! Game rendering system (terminal).
//!
//! Builds the board and the side panel as plain text. Nothing here mutates the game.

use std::fmt::Write;

use rand::Rng;

use dullest_dungeon::config::game::MAX_DISPLAYED_NPCS;
use dullest_dungeon::game::entities::Actor;
use dullest_dungeon::game::{GameEvent, GameMode, GameState, Outcome, Position, Side, Weapon};

const TITLE: &str = "Dullest Dungeon";

/// One character per tile: `@` player, enemy index (or `X` past 9), `*` for a shared
/// tile, `.` when empty.
pub fn render_board<R: Rng>(state: &GameState<R>) -> String {
    let size = state.config().board_size;
    let player_pos = state.player().position();
    let mut out = String::with_capacity(size * (size * 2 + 1));

    for y in 0..size {
        for x in 0..size {
            let pos = Position::new(x, y);
            let enemy = state.enemies().iter().find(|e| e.position() == pos);
            let symbol = match (pos == player_pos, enemy) {
                (true, Some(_)) => '*',
                (true, None) => '@',
                (false, Some(enemy)) => enemy_symbol(enemy),
                (false, None) => '.',
            };
            out.push(symbol);
            out.push(if x + 1 == size { '\n' } else { ' ' });
        }
    }
    out
}

fn enemy_symbol(enemy: &Actor) -> char {
    enemy
        .index()
        .and_then(|index| char::from_digit(index, 10))
        .unwrap_or('X')
}

fn weapon_stats(weapon: &Weapon) -> String {
    format!("{} (dmg {} / backlash {})", weapon.name, weapon.damage, weapon.backlash)
}

/// Title, turn, player status, then whatever the current mode calls for.
pub fn render_panel<R: Rng>(state: &GameState<R>) -> String {
    let mut out = String::new();
    let player = state.player();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{TITLE}    turn: {}", state.turn_number());
    let _ = writeln!(out, "use up/down/left/right to move");
    let _ = writeln!(out, "a: attack, s: switch weapon");
    let _ = writeln!(out, "Health: {}/{}", player.health(), player.max_health());
    let _ = writeln!(
        out,
        "Weapon: {}",
        player.weapon().map_or_else(|| "No Weapon".to_string(), weapon_stats)
    );
    let _ = writeln!(out);

    match state.current_mode() {
        GameMode::Playing => {
            let _ = writeln!(out, "{} enemies remaining", state.enemies().len());
            for enemy in state.enemies().iter().take(MAX_DISPLAYED_NPCS) {
                let _ = writeln!(
                    out,
                    "[{}] {}/{}  {}",
                    enemy.index().unwrap_or_default(),
                    enemy.health(),
                    enemy.max_health(),
                    enemy.weapon().map_or_else(|| "unarmed".to_string(), weapon_stats)
                );
            }
            if let Some(index) = state.engaged_enemy().and_then(Actor::index) {
                let _ = writeln!(out, "Fighting enemy {index}!");
            }
        }
        GameMode::ChoosingWeapon => {
            let _ = writeln!(out, "Choose your weapon");
            for (count, weapon) in state.available_weapons().iter().enumerate() {
                let _ = writeln!(out, "[{}] - {}", count + 1, weapon_stats(weapon));
            }
        }
        GameMode::Ended => {
            let banner = match state.outcome() {
                Some(Outcome::Victory) => "VICTORY",
                _ => "GAME OVER",
            };
            let _ = writeln!(out, "{banner}");
        }
    }

    let _ = writeln!(out, "q: quit, r: reset");
    out
}

pub fn render<R: Rng>(state: &GameState<R>) -> String {
    format!("{}\n{}", render_board(state), render_panel(state))
}

fn side_name(side: Side) -> String {
    match side {
        Side::Player => "You".to_string(),
        Side::Enemy(index) => format!("Enemy {index}"),
    }
}

/// Message line for an event, if it is worth telling the player about.
pub fn describe_event(event: &GameEvent) -> Option<String> {
    let line = match event {
        GameEvent::WeaponEquipped { name } => format!("You equip the {name}."),
        GameEvent::Engaged { enemy } => format!("Enemy {enemy} ambushes you!"),
        GameEvent::Attacked { attacker, victim, damage, backlash } => format!(
            "{} hit {} for {} and took {} backlash.",
            side_name(*attacker),
            side_name(*victim).to_lowercase(),
            damage,
            backlash
        ),
        GameEvent::EnemyDefeated { enemy } => format!("Enemy {enemy} is defeated."),
        GameEvent::GameEnded { outcome: Outcome::Victory } => "All enemies are dead.".to_string(),
        GameEvent::GameEnded { outcome: Outcome::Defeat } => "You died.".to_string(),
        GameEvent::Reset => "A new dungeon awaits.".to_string(),
        GameEvent::Moved { .. } | GameEvent::WeaponMenuOpened | GameEvent::TurnAdvanced { .. } => {
            return None;
        }
    };
    Some(line)
}
