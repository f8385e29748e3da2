use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Immutable weapon stats. Shared read-only between the roster and every actor wielding it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    /// Dealt to the victim on each use.
    pub damage: u32,
    /// Dealt to the wielder on each use.
    pub backlash: u32,
}

impl Weapon {
    pub fn new(name: impl Into<String>, damage: u32, backlash: u32) -> Self {
        Self {
            name: name.into(),
            damage,
            backlash,
        }
    }
}

/// What the turn engine accepts input for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    Playing,
    ChoosingWeapon,
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Victory,
    Defeat,
}

/// Which side of an exchange an actor is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    /// 1-based enemy index.
    Enemy(u32),
}

/// Notifications for the presentation layer, queued by accepted actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Moved { from: Position, to: Position },
    WeaponMenuOpened,
    WeaponEquipped { name: String },
    /// The player shares a tile with this enemy.
    Engaged { enemy: u32 },
    Attacked {
        attacker: Side,
        victim: Side,
        damage: u32,
        backlash: u32,
    },
    EnemyDefeated { enemy: u32 },
    /// A turn resolved without ending the game; redraw.
    TurnAdvanced { turn: u32 },
    GameEnded { outcome: Outcome },
    Reset,
}
