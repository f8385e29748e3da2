//! Dullest Dungeon: a turn-based grid duel.
//!
//! A player walks a square board, stumbles onto enemies and fights them with weapons
//! that trade damage dealt against backlash taken. The `game` module holds the turn
//! engine; `config` holds its settings. Rendering and input are left to the caller.

pub mod config;
pub mod game;
