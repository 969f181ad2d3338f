use super::Dice;
use super::Strategy;
use crate::game::Move;

/// Commit to one of two strategies on a single coin flip.
///
/// The flip happens once, when the combinator is built, not once per
/// turn. A `Toss` behaves exactly like whichever side won the flip for
/// its entire lifetime.
pub struct Toss(Box<dyn Strategy>);

impl Toss {
    pub fn new(
        heads: impl Strategy + 'static,
        tails: impl Strategy + 'static,
        mut dice: impl Dice,
    ) -> Self {
        match dice.roll(2) {
            0 => Self(Box::new(heads)),
            _ => Self(Box::new(tails)),
        }
    }
}

impl Strategy for Toss {
    fn decide(&mut self, seen: &[Move]) -> Move {
        self.0.decide(seen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::Always;

    #[test]
    fn heads_commits_to_the_first() {
        let mut toss = Toss::new(Always(Move::Rock), Always(Move::Paper), |_| 0);
        assert_eq!(toss.decide(&[]), Move::Rock);
        assert_eq!(toss.decide(&[Move::Scissors]), Move::Rock);
    }

    #[test]
    fn tails_commits_to_the_second() {
        let mut toss = Toss::new(Always(Move::Rock), Always(Move::Paper), |_| 1);
        assert_eq!(toss.decide(&[]), Move::Paper);
        assert_eq!(toss.decide(&[Move::Scissors]), Move::Paper);
    }

    #[test]
    fn flips_at_construction_not_per_turn() {
        let mut flips = 0;
        let mut toss = Toss::new(Always(Move::Rock), Always(Move::Paper), |_: usize| {
            flips += 1;
            0
        });
        toss.decide(&[]);
        toss.decide(&[Move::Rock]);
        assert_eq!(flips, 1);
    }
}
