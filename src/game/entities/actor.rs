//! Actor entity logic.
//!
//! Player and enemies share one type: a positioned, health-bearing character that may
//! wield a weapon. Enemies carry a 1-based index, the player carries none.

use std::rc::Rc;

use serde::Serialize;

use crate::game::grid::step;
use crate::game::types::{Direction, Position, Side, Weapon};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pos: Position,
    health: u32,
    max_health: u32,
    alive: bool,
    weapon: Option<Rc<Weapon>>,
    index: Option<u32>,
}

impl Actor {
    /// Unarmed player at full health.
    pub fn player(pos: Position, max_health: u32) -> Self {
        Self {
            pos,
            health: max_health,
            max_health,
            alive: max_health > 0,
            weapon: None,
            index: None,
        }
    }

    /// Armed enemy at full health.
    pub fn enemy(index: u32, pos: Position, max_health: u32, weapon: Rc<Weapon>) -> Self {
        Self {
            pos,
            health: max_health,
            max_health,
            alive: max_health > 0,
            weapon: Some(weapon),
            index: Some(index),
        }
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn weapon(&self) -> Option<&Weapon> {
        self.weapon.as_deref()
    }

    /// Enemy index, `None` for the player.
    pub fn index(&self) -> Option<u32> {
        self.index
    }

    pub fn is_player(&self) -> bool {
        self.index.is_none()
    }

    pub fn side(&self) -> Side {
        match self.index {
            Some(index) => Side::Enemy(index),
            None => Side::Player,
        }
    }

    pub fn equip(&mut self, weapon: Rc<Weapon>) {
        self.weapon = Some(weapon);
    }

    /// Take `amount` damage. Health clamps at 0, which kills the actor for good.
    pub fn apply_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
        if self.health == 0 {
            self.alive = false;
        }
    }

    /// Heal 1 HP, up to max health. Dead actors stay dead.
    pub fn regenerate(&mut self) {
        if self.alive && self.health < self.max_health {
            self.health += 1;
        }
    }

    /// Where a step in `direction` would land, or `None` if it leaves the board.
    /// Never mutates; the caller commits the move with `move_to`.
    pub fn attempt_move(&self, direction: Direction, board_size: usize) -> Option<Position> {
        step(self.pos, direction, board_size)
    }

    pub(crate) fn move_to(&mut self, pos: Position) {
        self.pos = pos;
    }

    pub(crate) fn weapon_handle(&self) -> Option<Rc<Weapon>> {
        self.weapon.clone()
    }
}

/// Owned, serialisable copy of an actor for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActorView {
    pub index: Option<u32>,
    pub position: Position,
    pub health: u32,
    pub max_health: u32,
    pub alive: bool,
    pub weapon: Option<Weapon>,
}

impl From<&Actor> for ActorView {
    fn from(actor: &Actor) -> Self {
        Self {
            index: actor.index,
            position: actor.pos,
            health: actor.health,
            max_health: actor.max_health,
            alive: actor.alive,
            weapon: actor.weapon().cloned(),
        }
    }
}
