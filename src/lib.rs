pub mod cards;
pub mod console;
pub mod rng;
pub mod rps;
pub mod session;
pub mod simulation;
pub mod tic_tac_toe;
pub mod twenty_one;
