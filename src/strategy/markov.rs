use std::collections::BTreeMap;

use super::Dice;
use super::FirstThenOther;
use super::Strategy;
use crate::game::Move;

/// Predict the hero's next move with a first-order transition model and
/// beat the prediction.
///
/// The model maps each move to the list of moves the hero threw
/// immediately after it, rebuilt from scratch each turn. A history of
/// `[r, r, p, s, r]` builds:
///
/// ```text
/// r -> [r, p]
/// p -> [s]
/// s -> [r]
/// ```
///
/// The prediction is drawn uniformly from the successors of the hero's
/// last move, so repeats weight the guess. A last move with no recorded
/// successors falls back to a uniform guess over all three moves; the
/// fallback roll happens only on that path, so pinned dice see exactly
/// one roll per turn.
pub fn markov_chain(opener: impl Strategy + 'static, dice: impl Dice + 'static) -> FirstThenOther {
    FirstThenOther::new(
        opener,
        Markov {
            dice: Box::new(dice),
        },
    )
}

struct Markov {
    dice: Box<dyn Dice>,
}

impl Markov {
    fn chain(seen: &[Move]) -> BTreeMap<Move, Vec<Move>> {
        let mut chain: BTreeMap<Move, Vec<Move>> = BTreeMap::new();
        for pair in seen.windows(2) {
            chain.entry(pair[0]).or_default().push(pair[1]);
        }
        chain
    }
}

impl Strategy for Markov {
    fn decide(&mut self, seen: &[Move]) -> Move {
        let last = seen.last().expect("markov sees a non-empty history");
        let chain = Self::chain(seen);
        let guess = match chain.get(last) {
            Some(nexts) => nexts[self.dice.roll(nexts.len())],
            None => {
                let all = Move::all();
                all[self.dice.roll(all.len())]
            }
        };
        guess.loses_to()
    }
}
