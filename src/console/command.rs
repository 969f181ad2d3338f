/// Loop control tokens, matched before move parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    Stats,
}

impl TryFrom<&str> for Command {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            ":q" => Ok(Command::Quit),
            ":h" => Ok(Command::Help),
            ":s" => Ok(Command::Stats),
            _ => Err(format!("invalid command str: {}", s)),
        }
    }
}
