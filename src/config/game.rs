/// Game configuration.
///
/// This module defines the default gameplay parameters (board size, enemy count,
/// max health and weapon roster) and the immutable `GameConfig` handed to the turn engine.
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::error::{ConfigError, Result};
use crate::game::types::Weapon;

/// Number of tiles on each side of the square board.
pub const NUM_TILES: usize = 10;

/// Number of enemies spawned at game start.
pub const NPC_NUMS: usize = 2;

/// Health every actor starts with, and the regeneration cap.
pub const MAX_HEALTH: u32 = 100;

/// Max number of enemies listed by the presentation layer.
pub const MAX_DISPLAYED_NPCS: usize = 5;

/// Default weapon roster: (name, damage, backlash).
pub const WEAPONS: [(&str, u32, u32); 3] = [
    ("Double Edged Sword", 5, 1),
    ("Mallet", 4, 0),
    ("Warhammer", 8, 3),
];

/// Settings consumed by `GameState` at construction and on every reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_size: usize,
    pub enemy_count: usize,
    pub max_health: u32,
    pub weapons: Vec<Weapon>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: NUM_TILES,
            enemy_count: NPC_NUMS,
            max_health: MAX_HEALTH,
            weapons: WEAPONS
                .iter()
                .map(|&(name, damage, backlash)| Weapon::new(name, damage, backlash))
                .collect(),
        }
    }
}

impl GameConfig {
    /// Check every setting. Called eagerly before any game is built.
    pub fn validate(&self) -> Result<()> {
        if self.board_size == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        if self.enemy_count == 0 {
            return Err(ConfigError::NoEnemies);
        }
        // The player needs a tile of its own too.
        let tiles = self.board_size.saturating_mul(self.board_size);
        if self.enemy_count >= tiles {
            return Err(ConfigError::TooManyEnemies {
                enemies: self.enemy_count,
                board_size: self.board_size,
            });
        }
        if self.max_health == 0 {
            return Err(ConfigError::ZeroMaxHealth);
        }
        if self.weapons.is_empty() {
            return Err(ConfigError::EmptyWeaponRoster);
        }
        if let Some(index) = self.weapons.iter().position(|w| w.name.trim().is_empty()) {
            return Err(ConfigError::UnnamedWeapon { index });
        }
        Ok(())
    }

    /// Parse and validate a TOML document. Missing fields keep their defaults.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML config file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let input = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&input)
    }

    /// Total number of tiles on the board.
    pub fn tile_count(&self) -> usize {
        self.board_size.saturating_mul(self.board_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.board_size, 10);
        assert_eq!(config.enemy_count, 2);
        assert_eq!(config.max_health, 100);
        assert_eq!(config.weapons.len(), 3);
        assert_eq!(config.weapons[2], Weapon::new("Warhammer", 8, 3));
    }

    #[test]
    fn test_rejects_empty_board() {
        let config = GameConfig { board_size: 0, ..GameConfig::default() };
        assert!(matches!(config.validate(), Err(ConfigError::EmptyBoard)));
    }

    #[test]
    fn test_rejects_no_enemies() {
        let config = GameConfig { enemy_count: 0, ..GameConfig::default() };
        assert!(matches!(config.validate(), Err(ConfigError::NoEnemies)));
    }

    #[test]
    fn test_enemy_count_must_leave_room_for_player() {
        let full = GameConfig { board_size: 2, enemy_count: 4, ..GameConfig::default() };
        assert!(matches!(
            full.validate(),
            Err(ConfigError::TooManyEnemies { enemies: 4, board_size: 2 })
        ));

        let tight = GameConfig { board_size: 2, enemy_count: 3, ..GameConfig::default() };
        assert!(tight.validate().is_ok());
    }

    #[test]
    fn test_single_tile_board_cannot_host_an_enemy() {
        let config = GameConfig { board_size: 1, enemy_count: 1, ..GameConfig::default() };
        assert!(matches!(config.validate(), Err(ConfigError::TooManyEnemies { .. })));
    }

    #[test]
    fn test_rejects_zero_max_health() {
        let config = GameConfig { max_health: 0, ..GameConfig::default() };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroMaxHealth)));
    }

    #[test]
    fn test_rejects_empty_or_unnamed_weapons() {
        let empty = GameConfig { weapons: vec![], ..GameConfig::default() };
        assert!(matches!(empty.validate(), Err(ConfigError::EmptyWeaponRoster)));

        let unnamed = GameConfig {
            weapons: vec![Weapon::new("Mallet", 4, 0), Weapon::new("  ", 1, 1)],
            ..GameConfig::default()
        };
        assert!(matches!(unnamed.validate(), Err(ConfigError::UnnamedWeapon { index: 1 })));
    }

    #[test]
    fn test_from_toml_str_fills_defaults() {
        let config = GameConfig::from_toml_str("board_size = 6\nenemy_count = 4\n")
            .expect("valid config");
        assert_eq!(config.board_size, 6);
        assert_eq!(config.enemy_count, 4);
        assert_eq!(config.max_health, MAX_HEALTH);
        assert_eq!(config.weapons.len(), WEAPONS.len());
    }

    #[test]
    fn test_from_toml_str_reads_weapons() {
        let input = r#"
            max_health = 20

            [[weapons]]
            name = "Dagger"
            damage = 2
            backlash = 0
        "#;
        let config = GameConfig::from_toml_str(input).expect("valid config");
        assert_eq!(config.max_health, 20);
        assert_eq!(config.weapons, vec![Weapon::new("Dagger", 2, 0)]);
    }

    #[test]
    fn test_from_toml_str_validates() {
        let err = GameConfig::from_toml_str("max_health = 0").unwrap_err();
        assert!(matches!(err, ConfigError::ZeroMaxHealth));
    }

    #[test]
    fn test_from_toml_str_rejects_negative_damage() {
        let input = "[[weapons]]\nname = \"Cursed\"\ndamage = -1\nbacklash = 0\n";
        assert!(matches!(GameConfig::from_toml_str(input), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_from_toml_file_missing() {
        let err = GameConfig::from_toml_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }
}
