use super::moves::Move;
use super::outcome::Outcome;
use colored::Colorize;

/// One completed exchange, recorded from the hero's point of view.
/// Built once per turn by the session and never mutated after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub hero: Move,
    pub villain: Move,
    pub outcome: Outcome,
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let outcome = match self.outcome {
            Outcome::Win => self.outcome.to_string().green(),
            Outcome::Loss => self.outcome.to_string().red(),
            Outcome::Draw => self.outcome.to_string().yellow(),
        };
        write!(f, "{} vs {} ({})", self.hero, self.villain, outcome)
    }
}
