use super::outcome::Outcome;

/// Running win/loss/draw counters for one session.
///
/// Stored as counters rather than recomputed from history, so reads are
/// O(1) and the struct stays Copy. Display matches the statistics block
/// the console prints verbatim.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    wins: usize,
    losses: usize,
    draws: usize,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
    pub fn count(&self, outcome: Outcome) -> usize {
        match outcome {
            Outcome::Win => self.wins,
            Outcome::Loss => self.losses,
            Outcome::Draw => self.draws,
        }
    }
    pub fn total(&self) -> usize {
        self.wins + self.losses + self.draws
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "You: {}", self.wins)?;
        writeln!(f, "AI: {}", self.losses)?;
        write!(f, "Draw: {}", self.draws)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let tally = Tally::default();
        assert_eq!(tally.count(Outcome::Win), 0);
        assert_eq!(tally.count(Outcome::Loss), 0);
        assert_eq!(tally.count(Outcome::Draw), 0);
        assert_eq!(tally.total(), 0);
    }

    #[test]
    fn counts_each_outcome_separately() {
        let mut tally = Tally::default();
        tally.record(Outcome::Win);
        tally.record(Outcome::Win);
        tally.record(Outcome::Loss);
        tally.record(Outcome::Draw);
        assert_eq!(tally.count(Outcome::Win), 2);
        assert_eq!(tally.count(Outcome::Loss), 1);
        assert_eq!(tally.count(Outcome::Draw), 1);
        assert_eq!(tally.total(), 4);
    }

    #[test]
    fn displays_the_statistics_block() {
        let mut tally = Tally::default();
        tally.record(Outcome::Win);
        tally.record(Outcome::Loss);
        tally.record(Outcome::Draw);
        assert_eq!(tally.to_string(), "You: 1\nAI: 1\nDraw: 1");
    }
}
