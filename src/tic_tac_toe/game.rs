use crate::console::Console;
use crate::rng::GameRng;
use crate::session::{GameError, RoundOutcome, Session};
use crate::tic_tac_toe::board::{Board, Marker};
use std::io::{BufRead, Write};

/// Interactive Tic-Tac-Toe session: human plays X and moves first, the
/// computer picks uniform-random open squares, and the match runs until
/// either side reaches the score threshold or the player declines a rematch.
pub struct TicTacToeGame<R, W> {
    console: Console<R, W>,
    rng: GameRng,
    session: Session,
    threshold: u32,
}

impl<R: BufRead, W: Write> TicTacToeGame<R, W> {
    /// `threshold` of 0 disables the match bound (rounds repeat until the
    /// player declines).
    pub fn new(console: Console<R, W>, rng: GameRng, threshold: u32) -> Self {
        TicTacToeGame {
            console,
            rng,
            session: Session::new(),
            threshold,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    pub fn run(&mut self) -> Result<(), GameError> {
        self.console.line("Welcome to Tic Tac Toe!")?;
        if self.threshold > 0 {
            self.console.line(&format!(
                "First to {} round wins takes the match!",
                self.threshold
            ))?;
        }

        loop {
            self.session.begin_round()?;
            let outcome = self.play_round()?;

            match outcome {
                RoundOutcome::HumanWin => self.console.line("You won this round!")?,
                RoundOutcome::ComputerWin => self.console.line("Computer won this round!")?,
                RoundOutcome::Draw => self.console.line("It's a draw!")?,
            }
            self.session.resolve(outcome)?;

            let score = self.session.score;
            self.console.line(&format!(
                "Score - You: {}, Computer: {}, Draws: {}",
                score.wins, score.losses, score.draws
            ))?;

            if self.threshold > 0 && score.wins >= self.threshold {
                self.console.line("You are the grand winner!")?;
                self.session.end()?;
                break;
            }
            if self.threshold > 0 && score.losses >= self.threshold {
                self.console.line("Computer is the grand winner!")?;
                self.session.end()?;
                break;
            }

            self.session.request_play_again()?;
            let again = self.console.confirm("Do you want to play again? (y/n): ")?;
            self.session.play_again(again)?;
            if !again {
                break;
            }
        }

        self.console.line("Thanks for playing! Goodbye!")?;
        Ok(())
    }

    /// One round on a fresh board; turns alternate human then computer
    /// until a triple is complete or the board fills.
    fn play_round(&mut self) -> Result<RoundOutcome, GameError> {
        let mut board = Board::new();

        loop {
            self.show_board(&board)?;

            let position = self.human_move(&board)?;
            board.place(position, Marker::Human)?;
            if board.has_winner() || board.is_full() {
                break;
            }

            let open = board.empty_positions();
            let position = *self.rng.pick(&open);
            board.place(position, Marker::Computer)?;
            self.console.line(&format!("Computer picks square {}.", position))?;
            if board.has_winner() || board.is_full() {
                break;
            }
        }
        self.show_board(&board)?;

        Ok(match board.winner() {
            Some(Marker::Human) => RoundOutcome::HumanWin,
            Some(_) => RoundOutcome::ComputerWin,
            None => RoundOutcome::Draw,
        })
    }

    fn human_move(&mut self, board: &Board) -> Result<usize, GameError> {
        let open = board.empty_positions();
        let choices = open
            .iter()
            .map(|position| position.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let prompt = format!("Choose a square ({}): ", choices);

        let position = self.console.prompt_until(
            &prompt,
            "Invalid choice. Please pick an open square.",
            |answer| {
                answer
                    .parse::<usize>()
                    .ok()
                    .filter(|position| board.is_open(*position))
            },
        )?;
        Ok(position)
    }

    fn show_board(&mut self, board: &Board) -> Result<(), GameError> {
        self.console.line("")?;
        for line in board.to_string().lines() {
            self.console.line(line)?;
        }
        self.console.line("")?;
        Ok(())
    }
}
