use super::FirstThenOther;
use super::Strategy;
use crate::game::Move;

/// Throw the move that would have lost the previous round, i.e. the one
/// the hero's last move beats.
pub fn last_lost(opener: impl Strategy + 'static) -> FirstThenOther {
    FirstThenOther::new(opener, LastLost)
}

struct LastLost;

impl Strategy for LastLost {
    fn decide(&mut self, seen: &[Move]) -> Move {
        seen.last()
            .expect("last_lost sees a non-empty history")
            .beats()
    }
}
