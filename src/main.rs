//! Main entry point for the terminal game.
//!
//! Initializes logging, loads the optional TOML config given as the first argument and
//! runs the interactive loop.

use std::env;
use std::error::Error;

use log::info;

use dullest_dungeon::config::GameConfig;

mod demo;

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logger from environment variable (RUST_LOG).
    env_logger::init();

    let config = match env::args().nth(1) {
        Some(path) => {
            info!("[Main] Loading config from {}", path);
            GameConfig::from_toml_file(&path)?
        }
        None => GameConfig::default(),
    };

    demo::game_loop::run_game_loop(config)
}
