use super::moves::Move;
use super::round::Round;
use super::rules;
use super::tally::Tally;
use crate::strategy::Strategy;

/// One table: the villain strategy, every round played, and the running
/// score. There is no terminal state; a session can be played and
/// queried for as long as the process lives.
pub struct Session {
    villain: Box<dyn Strategy>,
    history: Vec<Round>,
    tally: Tally,
}

impl Session {
    pub fn new(villain: Box<dyn Strategy>) -> Self {
        Self {
            villain,
            history: Vec::new(),
            tally: Tally::default(),
        }
    }

    /// Play one round against the villain.
    ///
    /// The villain is shown only the hero's past moves, oldest first,
    /// never its own moves and never the outcomes. The hero's current
    /// move is not part of what it sees, so neither side reacts to the
    /// other within a turn.
    pub fn play(&mut self, hero: Move) -> Round {
        let seen = self.recall();
        let villain = self.villain.decide(&seen);
        let outcome = rules::evaluate(hero, villain);
        let round = Round {
            hero,
            villain,
            outcome,
        };
        self.history.push(round);
        self.tally.record(outcome);
        log::debug!("round {}: {}", self.history.len(), round);
        round
    }

    /// Every round played so far, in play order.
    pub fn history(&self) -> &[Round] {
        &self.history
    }

    /// Value snapshot of the running score.
    pub fn tally(&self) -> Tally {
        self.tally
    }

    fn recall(&self) -> Vec<Move> {
        self.history.iter().map(|round| round.hero).collect()
    }
}
