//! Configuration errors.
//!
//! Any of these aborts game construction (or reset) before a single actor is placed.
//! Rejected player actions are not errors and never show up here.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::game::types::Position;

pub type Result<T, E = ConfigError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("board size must be at least 1")]
    EmptyBoard,

    #[error("at least one enemy is required")]
    NoEnemies,

    #[error("{enemies} enemies and the player cannot get distinct tiles on a {board_size}x{board_size} board")]
    TooManyEnemies { enemies: usize, board_size: usize },

    #[error("cannot place {requested} actors on distinct tiles of a {board_size}x{board_size} board")]
    NotEnoughTiles { requested: usize, board_size: usize },

    #[error("max health must be greater than 0")]
    ZeroMaxHealth,

    #[error("weapon roster is empty")]
    EmptyWeaponRoster,

    #[error("weapon #{index} has no name")]
    UnnamedWeapon { index: usize },

    #[error("position ({}, {}) is outside the {board_size}x{board_size} board", .position.x, .position.y)]
    PositionOutOfBounds { position: Position, board_size: usize },

    #[error("weapon index {index} is out of range for a roster of {roster_len}")]
    UnknownWeapon { index: usize, roster_len: usize },

    #[error("cannot read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
