use clap::{Parser, Subcommand, ValueEnum};
use parlor::console::Console;
use parlor::rng::GameRng;
use parlor::rps::RpsGame;
use parlor::simulation::{run_batch, GameKind, Summary};
use parlor::tic_tac_toe::TicTacToeGame;
use parlor::twenty_one::TwentyOneGame;

#[derive(Parser)]
#[command(name = "parlor")]
#[command(about = "Turn-based console games: Twenty-One, Tic-Tac-Toe, Rock-Paper-Scissors", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play Twenty-One against the dealer
    TwentyOne {
        /// Starting stake
        #[arg(long, default_value = "5")]
        bankroll: u32,

        /// Stake at which the session is won
        #[arg(long, default_value = "10")]
        target: u32,

        /// Seed for the card deals (for reproducibility)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Play Tic-Tac-Toe against a random computer
    TicTacToe {
        /// Round wins that take the match (0 = no bound)
        #[arg(long, default_value = "3")]
        threshold: u32,

        /// Seed for the computer's moves (for reproducibility)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Play Rock-Paper-Scissors
    Rps {
        /// Points that win the match (0 = endless)
        #[arg(long, default_value = "5")]
        target: u32,

        /// Seed for the computer's throws (for reproducibility)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Run a headless batch of automated rounds and print the outcome distribution
    Simulate {
        /// Game to simulate
        #[arg(value_enum)]
        game: SimTarget,

        /// Number of rounds
        #[arg(short = 'n', long, default_value = "1000")]
        rounds: usize,

        /// Base seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SimTarget {
    TwentyOne,
    TicTacToe,
    Rps,
}

impl From<SimTarget> for GameKind {
    fn from(target: SimTarget) -> Self {
        match target {
            SimTarget::TwentyOne => GameKind::TwentyOne,
            SimTarget::TicTacToe => GameKind::TicTacToe,
            SimTarget::Rps => GameKind::Rps,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::TwentyOne {
            bankroll,
            target,
            seed,
        } => {
            let mut game =
                TwentyOneGame::new(Console::stdio(), GameRng::new(seed), bankroll, target);
            exit_on_error(game.run());
        }
        Commands::TicTacToe { threshold, seed } => {
            let mut game = TicTacToeGame::new(Console::stdio(), GameRng::new(seed), threshold);
            exit_on_error(game.run());
        }
        Commands::Rps { target, seed } => {
            let mut game = RpsGame::new(Console::stdio(), GameRng::new(seed), target);
            exit_on_error(game.run());
        }
        Commands::Simulate {
            game,
            rounds,
            seed,
            json,
        } => simulate(game.into(), rounds, seed, json),
    }
}

fn exit_on_error<E: std::fmt::Display>(result: Result<(), E>) {
    if let Err(e) = result {
        eprintln!("✗ {}", e);
        std::process::exit(1);
    }
}

fn simulate(kind: GameKind, rounds: usize, seed: Option<u64>, json: bool) {
    let base_seed = seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos() as u64
    });

    if !json {
        println!("\n=== Parlor Simulator ===\n");
        println!("Game: {}", kind.name());
        println!("Rounds: {}", rounds);
        println!("Seed: {}", base_seed);
        println!();
    }

    let start = std::time::Instant::now();
    let summary = run_batch(kind, rounds, base_seed);
    let elapsed = start.elapsed();

    if json {
        match serde_json::to_string_pretty(&summary) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("✗ Failed to serialize summary: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    println!("=== Results ===\n");
    print_bucket("Human wins", summary.human_wins, &summary);
    print_bucket("Computer wins", summary.computer_wins, &summary);
    print_bucket("Draws", summary.draws, &summary);

    println!();
    println!(
        "Simulation completed in {:.2?} ({:.0} rounds/sec)",
        elapsed,
        rounds as f64 / elapsed.as_secs_f64()
    );
}

fn print_bucket(label: &str, count: usize, summary: &Summary) {
    let pct = summary.rate(count) * 100.0;
    let bar = "█".repeat((pct / 2.0) as usize);
    println!("  {:14} {:5.1}% {} ({})", label, pct, bar, count);
}
