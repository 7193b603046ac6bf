pub mod deck;
pub mod hand;
pub mod types;

pub use deck::Deck;
pub use hand::Hand;
pub use types::{Card, Rank, Suit};
