//! Roshambot Binary
//!
//! Interactive rock-paper-scissors at the terminal.
//!
//! Options: --opponent, --seed

use clap::Parser;
use roshambot::console::Console;
use roshambot::console::Runner;
use roshambot::game::Move;
use roshambot::strategy::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Opponent policy preset.
    #[arg(long, value_enum, default_value_t = Opponent::Markov)]
    opponent: Opponent,
    /// Pin every random choice the opponent makes, for reproducible sessions.
    #[arg(long)]
    seed: Option<u64>,
}

/// Named opponent presets. History-reading presets open with a random
/// move; toss commits to markov or frequency on one flip at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum Opponent {
    Rock,
    Paper,
    Scissors,
    Random,
    Echo,
    LastLost,
    Frequency,
    Markov,
    Toss,
    Alternate,
}

impl Opponent {
    fn strategy(self, seed: Option<u64>) -> Box<dyn Strategy> {
        let dice = move || match seed {
            Some(seed) => Entropy::seeded(seed),
            None => Entropy::new(),
        };
        match self {
            Opponent::Rock => Box::new(Always(Move::Rock)),
            Opponent::Paper => Box::new(Always(Move::Paper)),
            Opponent::Scissors => Box::new(Always(Move::Scissors)),
            Opponent::Random => Box::new(Random::new(dice())),
            Opponent::Echo => Box::new(echo(Random::new(dice()))),
            Opponent::LastLost => Box::new(last_lost(Random::new(dice()))),
            Opponent::Frequency => Box::new(beat_most_frequent(Random::new(dice()))),
            Opponent::Markov => Box::new(markov_chain(Random::new(dice()), dice())),
            Opponent::Toss => Box::new(Toss::new(
                markov_chain(Random::new(dice()), dice()),
                beat_most_frequent(Random::new(dice())),
                dice(),
            )),
            Opponent::Alternate => Box::new(Alternate::new(
                beat_most_frequent(Random::new(dice())),
                last_lost(Random::new(dice())),
            )),
        }
    }
}

impl std::fmt::Display for Opponent {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Opponent::Rock => write!(f, "rock"),
            Opponent::Paper => write!(f, "paper"),
            Opponent::Scissors => write!(f, "scissors"),
            Opponent::Random => write!(f, "random"),
            Opponent::Echo => write!(f, "echo"),
            Opponent::LastLost => write!(f, "last-lost"),
            Opponent::Frequency => write!(f, "frequency"),
            Opponent::Markov => write!(f, "markov"),
            Opponent::Toss => write!(f, "toss"),
            Opponent::Alternate => write!(f, "alternate"),
        }
    }
}

fn main() -> anyhow::Result<()> {
    roshambot::log()?;
    let args = Args::parse();
    log::info!("sitting down against {}", args.opponent);
    Runner::new(Console, args.opponent.strategy(args.seed)).run();
    Ok(())
}
