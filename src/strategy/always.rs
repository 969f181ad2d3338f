use super::Strategy;
use crate::game::Move;

/// Ignores history and throws its one move forever.
pub struct Always(pub Move);

impl Strategy for Always {
    fn decide(&mut self, _: &[Move]) -> Move {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_regardless_of_history() {
        let mut always = Always(Move::Scissors);
        assert_eq!(always.decide(&[]), Move::Scissors);
        assert_eq!(always.decide(&[Move::Rock, Move::Paper]), Move::Scissors);
    }
}
