use super::moves::Move;
use super::outcome::Outcome;

/// Pure total mapping from a pair of moves to the hero's outcome.
/// The 3x3 table is spelled out so the cycle is visible at a glance.
#[rustfmt::skip]
pub fn evaluate(hero: Move, villain: Move) -> Outcome {
    match (hero, villain) {
        (Move::Rock,     Move::Rock)     => Outcome::Draw,
        (Move::Rock,     Move::Paper)    => Outcome::Loss, // P > R
        (Move::Rock,     Move::Scissors) => Outcome::Win,  // R > S
        (Move::Paper,    Move::Rock)     => Outcome::Win,  // P > R
        (Move::Paper,    Move::Paper)    => Outcome::Draw,
        (Move::Paper,    Move::Scissors) => Outcome::Loss, // S > P
        (Move::Scissors, Move::Rock)     => Outcome::Loss, // R > S
        (Move::Scissors, Move::Paper)    => Outcome::Win,  // S > P
        (Move::Scissors, Move::Scissors) => Outcome::Draw,
    }
}
