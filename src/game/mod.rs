//! Game logic module.
//!
//! Entities, board geometry, the systems that act on them, and the turn engine
//! (`GameState`) tying them together.

pub mod types;
pub mod state;
pub mod view;

pub mod entities;
pub mod grid;
pub mod systems;

pub use state::GameState;
pub use types::*;
pub use view::GameView;
