use super::FirstThenOther;
use super::Strategy;
use crate::game::Move;

/// Replay the hero's previous move.
pub fn echo(opener: impl Strategy + 'static) -> FirstThenOther {
    FirstThenOther::new(opener, Echo)
}

/// Only reachable behind [`FirstThenOther`], which guarantees a
/// non-empty history.
struct Echo;

impl Strategy for Echo {
    fn decide(&mut self, seen: &[Move]) -> Move {
        *seen.last().expect("echo sees a non-empty history")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::Always;

    const SEEN: [Move; 5] = [
        Move::Rock,
        Move::Paper,
        Move::Scissors,
        Move::Paper,
        Move::Paper,
    ];

    #[test]
    fn opens_with_the_opener() {
        assert_eq!(echo(Always(Move::Scissors)).decide(&[]), Move::Scissors);
    }

    #[test]
    fn then_replays_the_last_move() {
        assert_eq!(echo(Always(Move::Scissors)).decide(&SEEN), Move::Paper);
        assert_eq!(echo(Always(Move::Scissors)).decide(&[Move::Rock]), Move::Rock);
    }
}
