pub mod game;

pub use game::TwentyOneGame;

use crate::cards::Hand;
use crate::session::RoundOutcome;

/// Score at which the dealer stands
pub const DEALER_STAND: u32 = 17;

/// Fixed dealer strategy: hit while below 17, otherwise stand
pub fn dealer_hits(score: u32) -> bool {
    score < DEALER_STAND
}

/// Resolve a finished round. The player acts first and may bust before the
/// dealer plays; a dealer bust is always a player win, otherwise the higher
/// final score wins.
pub fn round_outcome(player: &Hand, dealer: &Hand) -> RoundOutcome {
    if player.is_busted() {
        RoundOutcome::ComputerWin
    } else if dealer.is_busted() || player.score() > dealer.score() {
        RoundOutcome::HumanWin
    } else if player.score() < dealer.score() {
        RoundOutcome::ComputerWin
    } else {
        RoundOutcome::Draw
    }
}
