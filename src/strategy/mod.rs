//! Pluggable villain policies and the combinators that compose them.
//!
//! A [`Strategy`] is a single capability: shown the hero's past moves,
//! it produces the next villain move. Richer opponents are assembled
//! from simpler ones rather than special-cased. [`Toss`] commits to one
//! of two policies on a coin flip, [`Alternate`] swaps between two by
//! turn parity, and every history-reading policy ships pre-wrapped in
//! [`FirstThenOther`] so that turn one is covered.

use crate::game::Move;

pub mod alternate;
pub use alternate::*;

pub mod always;
pub use always::*;

pub mod dice;
pub use dice::*;

pub mod echo;
pub use echo::*;

pub mod first_then_other;
pub use first_then_other::*;

pub mod frequency;
pub use frequency::*;

pub mod last_lost;
pub use last_lost::*;

pub mod markov;
pub use markov::*;

pub mod random;
pub use random::*;

pub mod toss;
pub use toss::*;

/// A villain policy.
///
/// `decide` is shown the hero's past moves, oldest first, and nothing
/// else: not the villain's own past moves, not the outcomes. An empty
/// slice means this is the first turn. Stateful policies take `&mut
/// self` so they can consume entropy between turns.
pub trait Strategy {
    fn decide(&mut self, seen: &[Move]) -> Move;
}
