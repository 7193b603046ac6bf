pub mod engine;

pub use engine::{play_round, run_batch, GameKind, Summary};
