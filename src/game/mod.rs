//! The move model, the rules that score a pair of moves, and the
//! session that strings rounds together into a game.

pub mod moves;
pub use moves::*;

pub mod outcome;
pub use outcome::*;

pub mod round;
pub use round::*;

pub mod rules;
pub use rules::*;

pub mod session;
pub use session::*;

pub mod tally;
pub use tally::*;
