/// Main configuration module.
/// 
/// Re-exports the game settings and the configuration error type.
pub mod error;
pub mod game;

pub use error::{ConfigError, Result};
pub use game::GameConfig;
