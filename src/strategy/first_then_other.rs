use super::Strategy;
use crate::game::Move;

/// Open with one strategy, hand every later turn to another.
///
/// History-reading policies are only well-defined from turn two, so
/// each of them ships behind this wrapper with a caller-chosen opener.
pub struct FirstThenOther {
    first: Box<dyn Strategy>,
    rest: Box<dyn Strategy>,
}

impl FirstThenOther {
    pub fn new(first: impl Strategy + 'static, rest: impl Strategy + 'static) -> Self {
        Self {
            first: Box::new(first),
            rest: Box::new(rest),
        }
    }
}

impl Strategy for FirstThenOther {
    fn decide(&mut self, seen: &[Move]) -> Move {
        if seen.is_empty() {
            self.first.decide(seen)
        } else {
            self.rest.decide(seen)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::Always;

    #[test]
    fn first_turn_goes_to_the_opener() {
        let mut split = FirstThenOther::new(Always(Move::Rock), Always(Move::Scissors));
        assert_eq!(split.decide(&[]), Move::Rock);
    }

    #[test]
    fn every_later_turn_goes_to_the_rest() {
        let mut split = FirstThenOther::new(Always(Move::Rock), Always(Move::Scissors));
        assert_eq!(split.decide(&[Move::Rock]), Move::Scissors);
        assert_eq!(split.decide(&[Move::Rock, Move::Paper]), Move::Scissors);
    }
}
