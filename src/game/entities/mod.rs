//! Game entities module.
//!
//! This module organizes actor and weapon roster logic.

pub mod actor;
pub mod weapon;

pub use actor::*;
pub use weapon::*;
