use super::Strategy;
use crate::game::Move;

/// Swap between two strategies by turn parity: even-length histories go
/// to one side, odd-length histories to the other.
pub struct Alternate {
    even: Box<dyn Strategy>,
    odd: Box<dyn Strategy>,
}

impl Alternate {
    pub fn new(even: impl Strategy + 'static, odd: impl Strategy + 'static) -> Self {
        Self {
            even: Box::new(even),
            odd: Box::new(odd),
        }
    }
}

impl Strategy for Alternate {
    fn decide(&mut self, seen: &[Move]) -> Move {
        if seen.len() % 2 == 0 {
            self.even.decide(seen)
        } else {
            self.odd.decide(seen)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::Always;

    #[test]
    fn parity_picks_the_side() {
        let mut alternate = Alternate::new(Always(Move::Rock), Always(Move::Paper));
        assert_eq!(alternate.decide(&[]), Move::Rock);
        assert_eq!(alternate.decide(&[Move::Scissors]), Move::Paper);
        assert_eq!(alternate.decide(&[Move::Scissors, Move::Scissors]), Move::Rock);
    }
}
