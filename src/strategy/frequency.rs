use super::FirstThenOther;
use super::Strategy;
use crate::game::Move;

/// Beat the hero's most frequent move.
///
/// Frequency ties break toward the earliest move in [`Move::all`]
/// order, so the pick is deterministic for any history.
pub fn beat_most_frequent(opener: impl Strategy + 'static) -> FirstThenOther {
    FirstThenOther::new(opener, Frequency)
}

struct Frequency;

impl Strategy for Frequency {
    fn decide(&mut self, seen: &[Move]) -> Move {
        assert!(!seen.is_empty(), "frequency sees a non-empty history");
        let mut counts = [0; 3];
        for m in seen {
            counts[*m as usize] += 1;
        }
        let mut mode = Move::Rock;
        let mut most = 0;
        for m in Move::all() {
            if counts[m as usize] > most {
                most = counts[m as usize];
                mode = m;
            }
        }
        mode.loses_to()
    }
}
