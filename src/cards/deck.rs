use crate::cards::types::{Card, Rank, Suit};
use crate::rng::GameRng;

/// A deck of 52 unique (rank, suit) cards. Deals are uniform-random without
/// replacement; an exhausted deck is rebuilt fresh before the next deal
/// (no persistent shoe).
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(52);
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    /// Deal one card chosen uniformly at random, rebuilding first if empty
    pub fn deal(&mut self, rng: &mut GameRng) -> Card {
        if self.cards.is_empty() {
            *self = Deck::new();
        }
        let index = rng.index(self.cards.len());
        self.cards.swap_remove(index)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
