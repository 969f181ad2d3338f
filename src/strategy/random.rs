use super::Dice;
use super::Strategy;
use crate::game::Move;

/// Uniformly random play. Nothing can be learned about it from history,
/// and it learns nothing from history in return.
pub struct Random(Box<dyn Dice>);

impl Random {
    pub fn new(dice: impl Dice + 'static) -> Self {
        Self(Box::new(dice))
    }
}

impl Strategy for Random {
    fn decide(&mut self, _: &[Move]) -> Move {
        let all = Move::all();
        all[self.0.roll(all.len())]
    }
}
