use crate::game::Move;
use crate::game::Outcome;
use crate::game::Round;
use colored::Colorize;

pub const WELCOME: &str = "Welcome to the game of Rock, Paper and Scissors!";
pub const PROMPT: &str = "Please choose one of: (r)ock, (p)aper, (s)cissors";
pub const HELP: &str = ":q - quit game\n:h - show help\n:s - show game statistics";

const VERSUS: &str = ">=====VS=====<";
const RULE: &str = "-------------------------------------------------------";

#[rustfmt::skip]
const ROCK: &str =
    r"    _______
---'   ____)
      (_____)
      (_____)
      (____)
---.__(___)
";

#[rustfmt::skip]
const PAPER: &str =
    r"    _______
---'   ____)____
          ______)
          _______)
         _______)
---.__________)
";

#[rustfmt::skip]
const SCISSORS: &str =
    r"    _______
---'   ____)____
          ______)
       __________)
      (____)
---.__(___)";

/// ASCII art for one thrown move.
pub fn art(m: Move) -> &'static str {
    match m {
        Move::Rock => ROCK,
        Move::Paper => PAPER,
        Move::Scissors => SCISSORS,
    }
}

/// Outcome banner, colorized from the hero's point of view.
pub fn verdict(outcome: Outcome) -> String {
    match outcome {
        Outcome::Win => "Greetings, you won!".green().to_string(),
        Outcome::Loss => "Sorry, you lost. Maybe next time!".red().to_string(),
        Outcome::Draw => "And it's a draw.".yellow().to_string(),
    }
}

/// Full round block: both arts head to head, then the verdict.
pub fn round(round: &Round) -> String {
    let verdict = verdict(round.outcome);
    [
        art(round.hero),
        VERSUS,
        art(round.villain),
        verdict.as_str(),
        RULE,
    ]
    .join("\n")
}

/// Echo an unreadable move token back to the player.
pub fn misread(input: &str) -> String {
    format!("Sorry, I didn't understand your move: {}", input)
}
