use crate::console::Console;
use crate::rng::GameRng;
use crate::rps::{duel, Move};
use crate::session::{GameError, RoundOutcome, Session};
use std::io::{BufRead, Write};

/// Interactive Rock-Paper-Scissors session. First to `target` points wins
/// the match; a target of 0 plays on indefinitely, bounded only by the
/// play-again prompt. Ties score nothing.
pub struct RpsGame<R, W> {
    console: Console<R, W>,
    rng: GameRng,
    session: Session,
    target: u32,
    history: Vec<(u32, Move, Move)>,
}

impl<R: BufRead, W: Write> RpsGame<R, W> {
    pub fn new(console: Console<R, W>, rng: GameRng, target: u32) -> Self {
        RpsGame {
            console,
            rng,
            session: Session::new(),
            target,
            history: Vec::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    pub fn run(&mut self) -> Result<(), GameError> {
        self.console.line("Welcome to Rock Paper Scissors!")?;
        if self.target > 0 {
            self.console.line(&format!("First to {} points wins!", self.target))?;
        }

        loop {
            self.session.begin_round()?;
            let human = self.console.prompt_until(
                "Choose your move (rock, paper, scissors): ",
                "Invalid move. Please try again.",
                Move::parse,
            )?;
            let computer = *self.rng.pick(&Move::ALL);

            self.console.line(&format!("Player chose: {}", human))?;
            self.console.line(&format!("Computer chose: {}", computer))?;

            let outcome = duel(human, computer);
            match outcome {
                RoundOutcome::Draw => self.console.line("It's a tie!")?,
                RoundOutcome::HumanWin => {
                    self.console.line(&format!("You win: {}!", human.winning_verb()))?
                }
                RoundOutcome::ComputerWin => {
                    self.console.line(&format!("Computer wins: {}!", computer.winning_verb()))?
                }
            }
            self.session.resolve(outcome)?;

            let score = self.session.score;
            self.console.line(&format!(
                "Score - Player: {}, Computer: {}",
                score.wins, score.losses
            ))?;

            self.history.push((score.rounds(), human, computer));
            self.show_history()?;

            if self.target > 0 && (score.wins >= self.target || score.losses >= self.target) {
                self.session.end()?;
                break;
            }

            self.session.request_play_again()?;
            let again = self.console.confirm("Do you want to play again? (yes/no): ")?;
            self.session.play_again(again)?;
            if !again {
                break;
            }
        }

        self.farewell()
    }

    fn show_history(&mut self) -> Result<(), GameError> {
        self.console.line("")?;
        self.console.line("Move History:")?;
        self.console.line("Round | Human   | Computer")?;
        self.console.line("------|---------|---------")?;
        for &(round, human, computer) in &self.history {
            self.console
                .line(&format!("{:<6}| {:<8}| {:<8}", round, human, computer))?;
        }
        Ok(())
    }

    fn farewell(&mut self) -> Result<(), GameError> {
        let score = self.session.score;
        self.console.line(&format!(
            "Final Score - Player: {}, Computer: {}",
            score.wins, score.losses
        ))?;

        if self.target > 0 && score.wins >= self.target {
            self.console.line("Player wins the game!")?;
        } else if self.target > 0 && score.losses >= self.target {
            self.console.line("Computer wins the game!")?;
        } else {
            self.console.line("Game ended without a winner.")?;
        }

        self.console.line("Thanks for playing Rock Paper Scissors. Goodbye!")?;
        Ok(())
    }
}
