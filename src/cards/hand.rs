use crate::cards::types::Card;
use std::fmt;

const BUST_LIMIT: u32 = 21;
const ACE_DOWNGRADE: u32 = 10;

/// An ordered hand of cards with soft/hard ace scoring
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Hand { cards: Vec::new() }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Sum of base values with aces downgraded (11 → 1) one at a time while
    /// the total exceeds 21 and an un-downgraded ace remains. Downgrades
    /// only as many aces as needed, so the score is order-invariant and
    /// never negative.
    pub fn score(&self) -> u32 {
        let mut score: u32 = self.cards.iter().map(|card| card.value()).sum();
        let mut soft_aces = self.cards.iter().filter(|card| card.rank.is_ace()).count();

        while score > BUST_LIMIT && soft_aces > 0 {
            score -= ACE_DOWNGRADE;
            soft_aces -= 1;
        }
        score
    }

    pub fn is_busted(&self) -> bool {
        self.score() > BUST_LIMIT
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.cards.iter().map(|card| card.to_string()).collect();
        write!(f, "{}", names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::types::{Rank, Suit};

    fn hand_of(ranks: &[Rank]) -> Hand {
        let mut hand = Hand::new();
        for &rank in ranks {
            hand.push(Card::new(rank, Suit::Clubs));
        }
        hand
    }

    #[test]
    fn test_simple_score() {
        assert_eq!(hand_of(&[Rank::Ten, Rank::Seven]).score(), 17);
        assert_eq!(hand_of(&[Rank::Two, Rank::Three, Rank::Four]).score(), 9);
    }

    #[test]
    fn test_soft_ace_counts_eleven() {
        assert_eq!(hand_of(&[Rank::Ace, Rank::Six]).score(), 17);
        assert_eq!(hand_of(&[Rank::Ace, Rank::King]).score(), 21);
    }

    #[test]
    fn test_ace_downgrades_to_avoid_bust() {
        assert_eq!(hand_of(&[Rank::Ace, Rank::Nine, Rank::Five]).score(), 15);
    }

    #[test]
    fn test_downgrades_only_as_many_aces_as_needed() {
        // A + A + 9 = 11 + 1 + 9: one downgrade is enough
        assert_eq!(hand_of(&[Rank::Ace, Rank::Ace, Rank::Nine]).score(), 21);
        // A + A + A + K starts at 43; every ace must drop: 1+1+1+10 = 13
        assert_eq!(hand_of(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::King]).score(), 13);
    }

    #[test]
    fn test_score_is_order_invariant() {
        let ranks = [Rank::Ace, Rank::Five, Rank::King, Rank::Ace, Rank::Three];
        let forward = hand_of(&ranks).score();

        let mut reversed = ranks;
        reversed.reverse();
        assert_eq!(hand_of(&reversed).score(), forward);

        let rotated = [Rank::King, Rank::Ace, Rank::Three, Rank::Ace, Rank::Five];
        assert_eq!(hand_of(&rotated).score(), forward);
    }

    #[test]
    fn test_busted() {
        assert!(hand_of(&[Rank::Ten, Rank::King, Rank::Two]).is_busted());
        assert!(!hand_of(&[Rank::Ten, Rank::King, Rank::Ace]).is_busted());
        assert!(!hand_of(&[Rank::Ten, Rank::King]).is_busted());
    }

    #[test]
    fn test_all_aces_never_negative() {
        let hand = hand_of(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace]);
        assert_eq!(hand.score(), 14); // 11 + 1 + 1 + 1
    }

    #[test]
    fn test_display_joins_cards() {
        let mut hand = Hand::new();
        hand.push(Card::new(Rank::Queen, Suit::Hearts));
        hand.push(Card::new(Rank::Two, Suit::Spades));
        assert_eq!(hand.to_string(), "Q of Hearts, 2 of Spades");
    }
}
