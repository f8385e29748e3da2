//! Weapon roster logic.
//!
//! The roster is built once per game from the configuration and shared by every actor.

use std::rc::Rc;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::game::types::Weapon;

pub fn build_roster(weapons: &[Weapon]) -> Vec<Rc<Weapon>> {
    weapons.iter().cloned().map(Rc::new).collect()
}

/// Pick a roster entry uniformly at random. `None` only for an empty roster.
pub fn pick_random_weapon<R: Rng>(roster: &[Rc<Weapon>], rng: &mut R) -> Option<Rc<Weapon>> {
    roster.choose(rng).cloned()
}
