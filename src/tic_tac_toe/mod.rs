pub mod board;
pub mod game;

pub use board::{Board, BoardError, Marker, WINNING_TRIPLES};
pub use game::TicTacToeGame;
