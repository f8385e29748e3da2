//! Serialisable snapshot of a game for presentation clients.

use rand::Rng;
use serde::Serialize;

use crate::game::entities::ActorView;
use crate::game::state::GameState;
use crate::game::types::{GameMode, Outcome, Weapon};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    pub turn: u32,
    pub mode: GameMode,
    pub outcome: Option<Outcome>,
    pub player: ActorView,
    pub enemies: Vec<ActorView>,
    pub weapons: Vec<Weapon>,
    /// Index of the enemy sharing the player's tile.
    pub engaged_enemy: Option<u32>,
}

impl GameView {
    pub fn from_state<R: Rng>(state: &GameState<R>) -> Self {
        Self {
            turn: state.turn_number(),
            mode: state.current_mode(),
            outcome: state.outcome(),
            player: ActorView::from(state.player()),
            enemies: state.enemies().iter().map(ActorView::from).collect(),
            weapons: state.available_weapons().iter().map(|w| (**w).clone()).collect(),
            engaged_enemy: state.engaged_enemy().and_then(|enemy| enemy.index()),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::config::GameConfig;
    use crate::game::types::Position;

    #[test]
    fn test_view_reflects_state() {
        let state = GameState::from_layout(
            GameConfig::default(),
            Position::new(1, 1),
            &[(Position::new(2, 2), 0), (Position::new(3, 3), 2)],
            StdRng::seed_from_u64(5),
        )
        .expect("valid layout");

        let view = GameView::from_state(&state);

        assert_eq!(view.turn, 1);
        assert_eq!(view.mode, GameMode::Playing);
        assert_eq!(view.player.index, None);
        assert_eq!(view.player.position, Position::new(1, 1));
        assert_eq!(view.enemies.len(), 2);
        assert_eq!(view.enemies[1].weapon, Some(Weapon::new("Warhammer", 8, 3)));
        assert_eq!(view.weapons.len(), 3);
        assert_eq!(view.engaged_enemy, None);
    }

    #[test]
    fn test_view_serialises_to_json() {
        let state = GameState::from_layout(
            GameConfig::default(),
            Position::new(0, 0),
            &[(Position::new(4, 4), 1)],
            StdRng::seed_from_u64(5),
        )
        .expect("valid layout");

        let json = GameView::from_state(&state).to_json().expect("serialisable");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["turn"], 1);
        assert_eq!(value["mode"], "Playing");
        assert_eq!(value["player"]["health"], 100);
        assert_eq!(value["player"]["weapon"], serde_json::Value::Null);
        assert_eq!(value["enemies"][0]["index"], 1);
        assert_eq!(value["enemies"][0]["weapon"]["name"], "Mallet");
        assert_eq!(value["weapons"][2]["backlash"], 3);
    }
}
