use crate::cards::{Deck, Hand};
use crate::console::Console;
use crate::rng::GameRng;
use crate::session::{GameError, RoundOutcome, Session};
use crate::twenty_one::{dealer_hits, round_outcome};
use std::io::{BufRead, Write};

/// Interactive Twenty-One session: fresh deck each round, player acts first,
/// the stake moves by one per decided round, and the session ends when the
/// stake hits zero or the configured target.
pub struct TwentyOneGame<R, W> {
    console: Console<R, W>,
    rng: GameRng,
    session: Session,
    money: u32,
    target: u32,
}

impl<R: BufRead, W: Write> TwentyOneGame<R, W> {
    pub fn new(console: Console<R, W>, rng: GameRng, bankroll: u32, target: u32) -> Self {
        TwentyOneGame {
            console,
            rng,
            session: Session::new(),
            money: bankroll,
            target,
        }
    }

    pub fn money(&self) -> u32 {
        self.money
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    pub fn run(&mut self) -> Result<(), GameError> {
        self.console.line("Welcome to Twenty-One!")?;

        loop {
            if self.money == 0 || self.money >= self.target {
                self.session.end()?;
                break;
            }

            self.session.begin_round()?;
            let outcome = self.play_round()?;

            match outcome {
                RoundOutcome::HumanWin => self.money += 1,
                RoundOutcome::ComputerWin => self.money -= 1,
                RoundOutcome::Draw => {}
            }
            self.session.resolve(outcome)?;

            if self.money == 0 {
                self.console.line("You have no money left. Game over!")?;
                self.session.end()?;
                break;
            }
            if self.money >= self.target {
                self.console.line(&format!(
                    "Congratulations! You have reached ${}. You win the game!",
                    self.target
                ))?;
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

        let score = self.session.score;
        self.console.line(&format!(
            "Final tally - Wins: {}, Losses: {}, Ties: {}",
            score.wins, score.losses, score.draws
        ))?;
        self.console.line("Thanks for playing Twenty-One! Goodbye!")?;
        Ok(())
    }

    /// One round: deal, player turn, dealer turn (skipped on a player bust),
    /// then announce the result.
    fn play_round(&mut self) -> Result<RoundOutcome, GameError> {
        let mut deck = Deck::new();
        let mut player = Hand::new();
        let mut dealer = Hand::new();

        for _ in 0..2 {
            player.push(deck.deal(&mut self.rng));
            dealer.push(deck.deal(&mut self.rng));
        }
        self.show_hands(&player, &dealer, true)?;

        self.player_turn(&mut deck, &mut player, &dealer)?;
        if !player.is_busted() {
            self.dealer_turn(&mut deck, &player, &mut dealer)?;
        }

        let outcome = round_outcome(&player, &dealer);
        self.show_hands(&player, &dealer, false)?;
        match outcome {
            RoundOutcome::HumanWin => self.console.line("You win!")?,
            RoundOutcome::ComputerWin if player.is_busted() => {
                self.console.line("You busted! Dealer wins.")?
            }
            RoundOutcome::ComputerWin => self.console.line("Dealer wins!")?,
            RoundOutcome::Draw => self.console.line("It's a tie!")?,
        }
        Ok(outcome)
    }

    fn player_turn(
        &mut self,
        deck: &mut Deck,
        player: &mut Hand,
        dealer: &Hand,
    ) -> Result<(), GameError> {
        while !player.is_busted() {
            let hits = self.console.prompt_until(
                "Do you want to hit (h) or stay (s)? ",
                "Invalid input. Please enter 'h' or 's'.",
                |answer| match answer.to_lowercase().as_str() {
                    "h" | "hit" => Some(true),
                    "s" | "stay" => Some(false),
                    _ => None,
                },
            )?;
            if !hits {
                break;
            }
            player.push(deck.deal(&mut self.rng));
            self.show_hands(player, dealer, true)?;
        }
        Ok(())
    }

    fn dealer_turn(
        &mut self,
        deck: &mut Deck,
        player: &Hand,
        dealer: &mut Hand,
    ) -> Result<(), GameError> {
        self.show_hands(player, dealer, false)?;
        while dealer_hits(dealer.score()) {
            self.console.line("Dealer hits.")?;
            dealer.push(deck.deal(&mut self.rng));
            self.show_hands(player, dealer, false)?;
        }
        Ok(())
    }

    fn show_hands(&mut self, player: &Hand, dealer: &Hand, hidden: bool) -> Result<(), GameError> {
        self.console.line("")?;
        self.console.line("Dealer's Hand:")?;
        if hidden {
            if let Some(first) = dealer.cards().first() {
                self.console.line(&format!("{} and [Hidden Card]", first))?;
            }
        } else {
            self.console.line(&dealer.to_string())?;
            self.console.line(&format!("Dealer's Score: {}", dealer.score()))?;
        }

        self.console.line("")?;
        self.console.line("Player's Hand:")?;
        self.console.line(&player.to_string())?;
        self.console.line(&format!("Player's Score: {}", player.score()))?;
        self.console.line(&format!("Player's Money: ${}", self.money))?;
        Ok(())
    }
}
