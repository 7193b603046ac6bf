use crate::cards::{Deck, Hand};
use crate::rng::GameRng;
use crate::rps::{duel, Move};
use crate::session::RoundOutcome;
use crate::tic_tac_toe::{Board, Marker};
use crate::twenty_one::{dealer_hits, round_outcome};
use rayon::prelude::*;
use serde::Serialize;

/// Which game a headless batch simulates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    TwentyOne,
    TicTacToe,
    Rps,
}

impl GameKind {
    pub fn name(&self) -> &'static str {
        match self {
            GameKind::TwentyOne => "twenty-one",
            GameKind::TicTacToe => "tic-tac-toe",
            GameKind::Rps => "rock-paper-scissors",
        }
    }
}

/// Play one automated round deterministically from its seed. The human
/// side is replaced by a fixed policy: the dealer's hit-below-17 rule for
/// Twenty-One, uniform-random choices elsewhere.
pub fn play_round(kind: GameKind, seed: u64) -> RoundOutcome {
    let mut rng = GameRng::new(Some(seed));
    match kind {
        GameKind::TwentyOne => twenty_one_round(&mut rng),
        GameKind::TicTacToe => tic_tac_toe_round(&mut rng),
        GameKind::Rps => rps_round(&mut rng),
    }
}

fn twenty_one_round(rng: &mut GameRng) -> RoundOutcome {
    let mut deck = Deck::new();
    let mut player = Hand::new();
    let mut dealer = Hand::new();

    for _ in 0..2 {
        player.push(deck.deal(rng));
        dealer.push(deck.deal(rng));
    }

    // Automated player mirrors the dealer policy
    while !player.is_busted() && dealer_hits(player.score()) {
        player.push(deck.deal(rng));
    }
    if !player.is_busted() {
        while dealer_hits(dealer.score()) {
            dealer.push(deck.deal(rng));
        }
    }
    round_outcome(&player, &dealer)
}

fn tic_tac_toe_round(rng: &mut GameRng) -> RoundOutcome {
    let mut board = Board::new();
    let mut turn = Marker::Human;

    while !board.has_winner() && !board.is_full() {
        let open = board.empty_positions();
        let position = *rng.pick(&open);
        board
            .place(position, turn)
            .expect("picked position is open");
        turn = if turn == Marker::Human {
            Marker::Computer
        } else {
            Marker::Human
        };
    }

    match board.winner() {
        Some(Marker::Human) => RoundOutcome::HumanWin,
        Some(_) => RoundOutcome::ComputerWin,
        None => RoundOutcome::Draw,
    }
}

fn rps_round(rng: &mut GameRng) -> RoundOutcome {
    let human = *rng.pick(&Move::ALL);
    let computer = *rng.pick(&Move::ALL);
    duel(human, computer)
}

/// Aggregated results of a batch run
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Summary {
    pub game: &'static str,
    pub seed: u64,
    pub rounds: usize,
    pub human_wins: usize,
    pub computer_wins: usize,
    pub draws: usize,
}

impl Summary {
    fn aggregate(kind: GameKind, seed: u64, outcomes: &[RoundOutcome]) -> Self {
        let mut summary = Summary {
            game: kind.name(),
            seed,
            rounds: outcomes.len(),
            human_wins: 0,
            computer_wins: 0,
            draws: 0,
        };
        for outcome in outcomes {
            match outcome {
                RoundOutcome::HumanWin => summary.human_wins += 1,
                RoundOutcome::ComputerWin => summary.computer_wins += 1,
                RoundOutcome::Draw => summary.draws += 1,
            }
        }
        summary
    }

    pub fn rate(&self, count: usize) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            count as f64 / self.rounds as f64
        }
    }
}

/// Run `rounds` automated rounds in parallel, each seeded by offset from
/// `base_seed` so the whole batch is reproducible.
pub fn run_batch(kind: GameKind, rounds: usize, base_seed: u64) -> Summary {
    let outcomes: Vec<RoundOutcome> = (0..rounds)
        .into_par_iter()
        .map(|i| play_round(kind, base_seed.wrapping_add(i as u64)))
        .collect();
    Summary::aggregate(kind, base_seed, &outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_summary() {
        for kind in [GameKind::TwentyOne, GameKind::TicTacToe, GameKind::Rps] {
            let first = run_batch(kind, 200, 42);
            let second = run_batch(kind, 200, 42);
            assert_eq!(first, second, "{} batch must be reproducible", kind.name());
        }
    }

    #[test]
    fn test_counts_sum_to_rounds() {
        for kind in [GameKind::TwentyOne, GameKind::TicTacToe, GameKind::Rps] {
            let summary = run_batch(kind, 500, 7);
            assert_eq!(
                summary.human_wins + summary.computer_wins + summary.draws,
                summary.rounds
            );
            assert_eq!(summary.rounds, 500);
        }
    }

    #[test]
    fn test_every_round_terminates() {
        for seed in 0..100 {
            // Would hang or panic if a round failed to reach a terminal state
            play_round(GameKind::TwentyOne, seed);
            play_round(GameKind::TicTacToe, seed);
            play_round(GameKind::Rps, seed);
        }
    }

    #[test]
    fn test_rps_outcomes_are_spread() {
        // 600 uniform-random duels should land in every bucket
        let summary = run_batch(GameKind::Rps, 600, 123);
        assert!(summary.human_wins > 0);
        assert!(summary.computer_wins > 0);
        assert!(summary.draws > 0);
    }

    #[test]
    fn test_summary_serializes_to_json() {
        let summary = run_batch(GameKind::Rps, 10, 1);
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"game\":\"rock-paper-scissors\""));
        assert!(json.contains("\"rounds\":10"));
    }

    #[test]
    fn test_rate() {
        let summary = run_batch(GameKind::Rps, 100, 5);
        let total = summary.rate(summary.human_wins)
            + summary.rate(summary.computer_wins)
            + summary.rate(summary.draws);
        assert!((total - 1.0).abs() < 1e-9);
    }
}
