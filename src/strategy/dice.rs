use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Bounded index source behind every randomized strategy.
///
/// `roll(faces)` returns an index in `0..faces`, for `faces >= 1`.
/// Production code rolls an [`Entropy`]; tests inject plain closures
/// (`|_| 0`) to pin every choice.
pub trait Dice {
    fn roll(&mut self, faces: usize) -> usize;
}

impl<F: FnMut(usize) -> usize> Dice for F {
    fn roll(&mut self, faces: usize) -> usize {
        self(faces)
    }
}

/// OS-seeded or replay-seeded [`Dice`].
pub struct Entropy(SmallRng);

impl Entropy {
    pub fn new() -> Self {
        Self(SmallRng::from_os_rng())
    }
    /// Pin the whole stream for reproducible sessions.
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Default for Entropy {
    fn default() -> Self {
        Self::new()
    }
}

impl Dice for Entropy {
    fn roll(&mut self, faces: usize) -> usize {
        self.0.random_range(0..faces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_dice() {
        let mut fixed = |_: usize| 2usize;
        assert_eq!(fixed.roll(3), 2);
    }

    #[test]
    fn rolls_stay_in_bounds() {
        let mut dice = Entropy::new();
        for _ in 0..100 {
            assert!(dice.roll(3) < 3);
            assert!(dice.roll(2) < 2);
            assert!(dice.roll(1) == 0);
        }
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = Entropy::seeded(2024);
        let mut b = Entropy::seeded(2024);
        for _ in 0..32 {
            assert_eq!(a.roll(52), b.roll(52));
        }
    }
}
