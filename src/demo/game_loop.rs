//! Interactive terminal loop.
//!
//! Reads one command per line, forwards it to the turn engine and redraws after every
//! accepted action.

use std::error::Error;
use std::io::{self, BufRead, Write};

use log::{debug, info};

use dullest_dungeon::config::GameConfig;
use dullest_dungeon::game::{GameState, GameView};

use crate::demo::input::{Command, parse_command};
use crate::demo::render::{describe_event, render};

/// Prompt for the next input line. `None` on end of input.
fn read_line(input: &mut impl BufRead, out: &mut impl Write) -> io::Result<Option<String>> {
    write!(out, "> ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Run the game until the player quits or input ends.
pub fn run_game_loop(config: GameConfig) -> Result<(), Box<dyn Error>> {
    let mut state = GameState::new(config, rand::rng())?;
    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();

    writeln!(out, "{}", render(&state))?;

    while let Some(line) = read_line(&mut input, &mut out)? {
        let Some(command) = parse_command(&line) else {
            writeln!(out, "Unknown command.")?;
            continue;
        };

        let accepted = match command {
            Command::Move(direction) => state.submit_move(direction),
            Command::Attack => state.submit_attack(),
            Command::SwitchWeapon => state.submit_switch_weapon_request(),
            Command::ChooseWeapon(index) => state.submit_weapon_choice(index),
            Command::Reset => state.submit_reset(),
            Command::Dump => {
                writeln!(out, "{}", GameView::from_state(&state).to_json()?)?;
                continue;
            }
            Command::Quit => break,
        };
        debug!("[Demo] {:?} accepted={}", command, accepted);

        if !accepted {
            writeln!(out, "Nothing happens.")?;
            continue;
        }
        for event in state.drain_events() {
            if let Some(line) = describe_event(&event) {
                writeln!(out, "{line}")?;
            }
        }
        writeln!(out, "{}", render(&state))?;
    }

    info!("[Demo] Leaving on turn {}", state.turn_number());
    Ok(())
}
