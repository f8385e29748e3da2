//! Turn engine.
//!
//! `GameState` owns one game: the player, the enemy roster, the weapon roster, the turn
//! counter and the current mode. The presentation layer feeds it actions through the
//! `submit_*` methods and reads it back through the accessors. Every action either
//! fully applies, including its turn resolution, or is rejected with `false`.

use std::mem;
use std::rc::Rc;

use log::{error, info, trace};
use rand::Rng;

use crate::config::error::{ConfigError, Result};
use crate::config::game::GameConfig;
use crate::game::entities::{Actor, build_roster, pick_random_weapon};
use crate::game::grid::{assign_positions, is_within_bounds};
use crate::game::systems::{Assailant, end_turn, move_player, resolve_engaged_attack};
use crate::game::types::{Direction, GameEvent, GameMode, Outcome, Position, Weapon};

#[derive(Debug)]
pub struct GameState<R: Rng> {
    pub(crate) config: GameConfig,
    pub(crate) rng: R,
    pub(crate) turn: u32,
    pub(crate) player: Actor,
    pub(crate) enemies: Vec<Actor>,
    pub(crate) weapons: Vec<Rc<Weapon>>,
    pub(crate) mode: GameMode,
    pub(crate) outcome: Option<Outcome>,
    /// Index into `enemies` of the enemy sharing the player's tile, recomputed every turn.
    pub(crate) engaged: Option<usize>,
    pub(crate) events: Vec<GameEvent>,
}

/// Freshly spawned actors and the roster they were armed from.
struct Spawn {
    weapons: Vec<Rc<Weapon>>,
    player: Actor,
    enemies: Vec<Actor>,
}

impl<R: Rng> GameState<R> {
    /// Validate `config`, then spawn a new game: the player and every enemy on distinct
    /// random tiles, each enemy holding a random weapon from the roster.
    pub fn new(config: GameConfig, mut rng: R) -> Result<Self> {
        config.validate()?;
        let spawn = Self::spawn(&config, &mut rng)?;
        info!(
            "[TurnEngine] New game: {}x{} board, {} enemies",
            config.board_size, config.board_size, config.enemy_count
        );
        Ok(Self::assemble(config, rng, spawn))
    }

    /// Build a game with a fixed layout instead of random placement. Each enemy is given
    /// as its tile and the roster index of its weapon; `config.enemy_count` is ignored.
    ///
    /// Positions must be on the board but need not be distinct. `reset` still spawns a
    /// random layout of `config.enemy_count` enemies.
    pub fn from_layout(
        config: GameConfig,
        player_position: Position,
        enemies: &[(Position, usize)],
        rng: R,
    ) -> Result<Self> {
        config.validate()?;
        if enemies.is_empty() {
            return Err(ConfigError::NoEnemies);
        }
        let board_size = config.board_size;
        let weapons = build_roster(&config.weapons);

        let check_bounds = |position: Position| {
            if is_within_bounds(position, board_size) {
                Ok(())
            } else {
                Err(ConfigError::PositionOutOfBounds { position, board_size })
            }
        };

        check_bounds(player_position)?;
        let player = Actor::player(player_position, config.max_health);

        let mut placed = Vec::with_capacity(enemies.len());
        for (i, &(position, weapon_index)) in enemies.iter().enumerate() {
            check_bounds(position)?;
            let weapon = weapons.get(weapon_index).ok_or(ConfigError::UnknownWeapon {
                index: weapon_index,
                roster_len: weapons.len(),
            })?;
            placed.push(Actor::enemy(enemy_index(i), position, config.max_health, Rc::clone(weapon)));
        }

        Ok(Self::assemble(config, rng, Spawn { weapons, player, enemies: placed }))
    }

    fn spawn(config: &GameConfig, rng: &mut R) -> Result<Spawn> {
        let weapons = build_roster(&config.weapons);
        let mut positions = assign_positions(config.enemy_count + 1, config.board_size, rng)?;

        // Enemies take the first tiles in spawn order, the player the last one.
        let player_pos = positions.pop().ok_or(ConfigError::NoEnemies)?;
        let player = Actor::player(player_pos, config.max_health);

        let mut enemies = Vec::with_capacity(positions.len());
        for (i, pos) in positions.into_iter().enumerate() {
            let weapon = pick_random_weapon(&weapons, rng).ok_or(ConfigError::EmptyWeaponRoster)?;
            enemies.push(Actor::enemy(enemy_index(i), pos, config.max_health, weapon));
        }

        Ok(Spawn { weapons, player, enemies })
    }

    fn assemble(config: GameConfig, rng: R, spawn: Spawn) -> Self {
        Self {
            config,
            rng,
            turn: 1,
            player: spawn.player,
            enemies: spawn.enemies,
            weapons: spawn.weapons,
            mode: GameMode::Playing,
            outcome: None,
            engaged: None,
            events: Vec::new(),
        }
    }

    /// Throw away the current game and spawn a new one from the stored configuration,
    /// drawing from the same random source.
    pub fn reset(&mut self) -> Result<()> {
        self.config.validate()?;
        let spawn = Self::spawn(&self.config, &mut self.rng)?;
        self.turn = 1;
        self.player = spawn.player;
        self.enemies = spawn.enemies;
        self.weapons = spawn.weapons;
        self.mode = GameMode::Playing;
        self.outcome = None;
        self.engaged = None;
        self.events.clear();
        self.events.push(GameEvent::Reset);
        info!("[TurnEngine] Game reset with {} enemies", self.enemies.len());
        Ok(())
    }

    pub(crate) fn end(&mut self, outcome: Outcome) {
        self.mode = GameMode::Ended;
        self.outcome = Some(outcome);
        self.events.push(GameEvent::GameEnded { outcome });
        info!("[TurnEngine] Game ended on turn {}: {:?}", self.turn, outcome);
    }

    // ----------------- read-only views -------------------

    pub fn current_mode(&self) -> GameMode {
        self.mode
    }

    pub fn player(&self) -> &Actor {
        &self.player
    }

    pub fn enemies(&self) -> &[Actor] {
        &self.enemies
    }

    pub fn available_weapons(&self) -> &[Rc<Weapon>] {
        &self.weapons
    }

    pub fn turn_number(&self) -> u32 {
        self.turn
    }

    /// Set once the game has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// The enemy the player currently shares a tile with, if any.
    pub fn engaged_enemy(&self) -> Option<&Actor> {
        self.engaged.and_then(|idx| self.enemies.get(idx))
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Take every event queued since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        mem::take(&mut self.events)
    }

    // ----------------- player actions -------------------

    pub fn submit_move(&mut self, direction: Direction) -> bool {
        if self.mode != GameMode::Playing {
            trace!("[TurnEngine] Move ignored in {:?}", self.mode);
            return false;
        }
        if !move_player(self, direction) {
            return false;
        }
        end_turn(self);
        true
    }

    /// Open the weapon menu. Consumes no turn.
    pub fn submit_switch_weapon_request(&mut self) -> bool {
        if self.mode != GameMode::Playing {
            trace!("[TurnEngine] Weapon switch ignored in {:?}", self.mode);
            return false;
        }
        self.mode = GameMode::ChoosingWeapon;
        self.events.push(GameEvent::WeaponMenuOpened);
        true
    }

    /// Equip roster entry `index` (0-based) and resolve a turn.
    pub fn submit_weapon_choice(&mut self, index: usize) -> bool {
        if self.mode != GameMode::ChoosingWeapon {
            trace!("[TurnEngine] Weapon choice ignored in {:?}", self.mode);
            return false;
        }
        let Some(weapon) = self.weapons.get(index).cloned() else {
            trace!("[TurnEngine] No weapon at index {}", index);
            return false;
        };

        let name = weapon.name.clone();
        self.player.equip(weapon);
        self.mode = GameMode::Playing;
        self.events.push(GameEvent::WeaponEquipped { name });
        end_turn(self);
        true
    }

    /// Swing at the engaged enemy. Only legal while armed and sharing its tile.
    pub fn submit_attack(&mut self) -> bool {
        if self.mode != GameMode::Playing {
            trace!("[TurnEngine] Attack ignored in {:?}", self.mode);
            return false;
        }
        if self.player.weapon().is_none() {
            trace!("[TurnEngine] Attack ignored: player is unarmed");
            return false;
        }
        let player_pos = self.player.position();
        if !self.engaged_enemy().is_some_and(|enemy| enemy.position() == player_pos) {
            trace!("[TurnEngine] Attack ignored: no engaged enemy");
            return false;
        }

        if resolve_engaged_attack(self, Assailant::Player).is_none() {
            end_turn(self);
        }
        true
    }

    /// Start over from any mode.
    pub fn submit_reset(&mut self) -> bool {
        match self.reset() {
            Ok(()) => true,
            Err(err) => {
                error!("[TurnEngine] Reset failed: {}", err);
                false
            }
        }
    }
}

fn enemy_index(spawn_order: usize) -> u32 {
    u32::try_from(spawn_order + 1).unwrap_or(u32::MAX)
}
