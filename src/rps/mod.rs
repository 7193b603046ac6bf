pub mod game;

pub use game::RpsGame;

use crate::session::RoundOutcome;
use std::fmt;

/// A Rock-Paper-Scissors throw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Fixed beats-relation: rock beats scissors, paper beats rock,
    /// scissors beats paper
    pub fn beats(&self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors)
                | (Move::Paper, Move::Rock)
                | (Move::Scissors, Move::Paper)
        )
    }

    /// Announcement for a move beating the one it defeats
    pub fn winning_verb(&self) -> &'static str {
        match self {
            Move::Rock => "rock crushes scissors",
            Move::Paper => "paper covers rock",
            Move::Scissors => "scissors cut paper",
        }
    }

    /// Parse one of the three literals, case-insensitive
    pub fn parse(text: &str) -> Option<Move> {
        match text.to_lowercase().as_str() {
            "rock" => Some(Move::Rock),
            "paper" => Some(Move::Paper),
            "scissors" => Some(Move::Scissors),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        };
        f.pad(name)
    }
}

/// Resolve one throw from each side
pub fn duel(human: Move, computer: Move) -> RoundOutcome {
    if human == computer {
        RoundOutcome::Draw
    } else if human.beats(computer) {
        RoundOutcome::HumanWin
    } else {
        RoundOutcome::ComputerWin
    }
}
