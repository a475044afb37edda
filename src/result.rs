//! Round and insurance result types.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// How a round ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundOutcome {
    /// Player was dealt a natural and the dealer was not.
    Blackjack,
    /// Player finished above the dealer.
    Win,
    /// Dealer went over 21.
    DealerBust,
    /// Dealer finished above the player.
    Lose,
    /// Player went over 21.
    Bust,
    /// Equal totals, or both dealt a natural.
    Push,
}

impl RoundOutcome {
    /// Returns whether the player won money on the main bet.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Blackjack | Self::Win | Self::DealerBust)
    }
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Blackjack => "Blackjack! You win!",
            Self::Win => "You win!",
            Self::DealerBust => "Dealer busts! You win!",
            Self::Lose => "You lose!",
            Self::Bust => "Bust! You lose!",
            Self::Push => "Push! It's a tie!",
        })
    }
}

/// Result of a settled round.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: RoundOutcome,
    /// Final stake on the main hand (doubled if the player doubled down).
    pub bet: i64,
    /// Change applied to the balance by the main bet.
    pub net: i64,
    /// The player's final hand value.
    pub player_score: u8,
    /// The dealer's final hand value.
    pub dealer_score: u8,
    /// The player's final cards.
    pub player_cards: Vec<Card>,
    /// The dealer's final cards.
    pub dealer_cards: Vec<Card>,
    /// Balance once the round was settled.
    pub balance_after: i64,
}

/// Immediate resolution of an insurance side bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InsuranceOutcome {
    /// Dealer holds blackjack; the side bet was paid.
    Won(i64),
    /// Dealer does not hold blackjack; the side bet was forfeited.
    Lost(i64),
}

impl InsuranceOutcome {
    /// Change applied to the balance.
    #[must_use]
    pub const fn net(self) -> i64 {
        match self {
            Self::Won(amount) => amount,
            Self::Lost(amount) => -amount,
        }
    }
}
