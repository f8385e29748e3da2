// Terminal front end for the game. Provides submodules for the interactive loop,
// line-based input parsing and text rendering.
pub mod game_loop;
pub mod input;
pub mod render;
