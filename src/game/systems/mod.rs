pub mod combat;
pub mod movement;
pub mod turn;

pub use combat::*;
pub use movement::*;
pub use turn::*;
