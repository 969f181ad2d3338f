/// One of the three throwable signs.
///
/// The only relation with game meaning is the cyclic beats-relation:
/// rock crushes scissors, scissors cut paper, paper covers rock. The
/// derived ordering (R < P < S) carries no strength information; it
/// exists to satisfy ordered collections and to fix the documented
/// frequency tie-break.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Move {
    Rock = 0,
    Paper = 1,
    Scissors = 2,
}

impl Move {
    /// All three moves, in tie-break order.
    pub const fn all() -> [Move; 3] {
        [Move::Rock, Move::Paper, Move::Scissors]
    }
    /// The move this move defeats.
    pub const fn beats(&self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }
    /// The move that defeats this move.
    pub const fn loses_to(&self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }
}

/// str isomorphism
///
/// The token set is deliberately exact: no trimming, no case folding
/// beyond the six tokens listed.
impl TryFrom<&str> for Move {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "r" | "R" => Ok(Move::Rock),
            "p" | "P" => Ok(Move::Paper),
            "s" | "S" => Ok(Move::Scissors),
            _ => Err(format!("invalid move str: {}", s)),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Move::Rock => write!(f, "rock"),
            Move::Paper => write!(f, "paper"),
            Move::Scissors => write!(f, "scissors"),
        }
    }
}
