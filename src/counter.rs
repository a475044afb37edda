//! Hi-Lo card counting and betting advisories.
//!
//! The counter observes every card drawn from the shoe, including the dealer's
//! hole card at the moment it is dealt. Advisories are informational only and
//! never influence the outcome of a round.

use core::fmt;

use crate::card::{Card, DECK_SIZE, Rank};

/// Fewest decks the true count is ever divided by.
pub const MIN_DECKS_REMAINING: f64 = 0.5;

/// Hi-Lo weight of a rank: low cards +1, neutral cards 0, high cards -1.
#[must_use]
pub const fn hi_lo_weight(rank: Rank) -> i32 {
    match rank {
        Rank::Two | Rank::Three | Rank::Four | Rank::Five | Rank::Six => 1,
        Rank::Seven | Rank::Eight | Rank::Nine => 0,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King | Rank::Ace => -1,
    }
}

/// Running Hi-Lo count since the last reshuffle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardCounter {
    running_count: i32,
    cards_seen: u32,
}

impl CardCounter {
    /// Creates a counter with nothing observed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            running_count: 0,
            cards_seen: 0,
        }
    }

    /// Records one card drawn from the shoe.
    pub const fn observe(&mut self, card: &Card) {
        self.cards_seen += 1;
        self.running_count += hi_lo_weight(card.rank);
    }

    /// Forgets everything observed. Called when the shoe is reshuffled.
    pub const fn reset(&mut self) {
        self.running_count = 0;
        self.cards_seen = 0;
    }

    /// Sum of the Hi-Lo weights observed so far.
    #[must_use]
    pub const fn running_count(&self) -> i32 {
        self.running_count
    }

    /// Number of cards observed since the last reset.
    #[must_use]
    pub const fn cards_seen(&self) -> u32 {
        self.cards_seen
    }

    /// Estimated decks left in a shoe holding `remaining` cards.
    #[must_use]
    pub fn decks_remaining(&self, remaining: usize) -> f64 {
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for card counts"
        )]
        let decks = remaining as f64 / DECK_SIZE as f64;
        decks
    }

    /// Running count per estimated deck remaining.
    ///
    /// The divisor never drops below [`MIN_DECKS_REMAINING`], so the value
    /// stays bounded as the shoe runs out.
    ///
    /// ```
    /// use shoecount::CardCounter;
    ///
    /// let counter = CardCounter::new();
    /// assert_eq!(counter.true_count(208), 0.0);
    /// ```
    #[must_use]
    pub fn true_count(&self, remaining: usize) -> f64 {
        let decks = self.decks_remaining(remaining).max(MIN_DECKS_REMAINING);
        f64::from(self.running_count) / decks
    }

    /// Advisory for the current count with `remaining` cards left.
    #[must_use]
    pub fn advisory(&self, remaining: usize) -> Advisory {
        advisory(self.true_count(remaining))
    }
}

/// How favourable the remaining shoe is for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Advantage {
    /// True count of 3 or more.
    VeryFavorable,
    /// True count of 2 or more.
    Favorable,
    /// True count of 1 or more.
    SlightEdge,
    /// Between -1 and 1, exclusive.
    Neutral,
    /// True count of -1 or less.
    HouseEdge,
    /// True count of -2 or less.
    Unfavorable,
    /// True count of -3 or less.
    VeryBad,
}

impl Advantage {
    /// Classifies a true count.
    #[must_use]
    pub fn from_true_count(true_count: f64) -> Self {
        if true_count >= 3.0 {
            Self::VeryFavorable
        } else if true_count >= 2.0 {
            Self::Favorable
        } else if true_count >= 1.0 {
            Self::SlightEdge
        } else if true_count <= -3.0 {
            Self::VeryBad
        } else if true_count <= -2.0 {
            Self::Unfavorable
        } else if true_count <= -1.0 {
            Self::HouseEdge
        } else {
            Self::Neutral
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryFavorable => "VERY FAVORABLE",
            Self::Favorable => "FAVORABLE",
            Self::SlightEdge => "Slight Edge",
            Self::Neutral => "Neutral",
            Self::HouseEdge => "House Edge",
            Self::Unfavorable => "UNFAVORABLE",
            Self::VeryBad => "VERY BAD",
        }
    }
}

impl fmt::Display for Advantage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Bet sizing hint. Its thresholds are coarser than [`Advantage`]'s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BetSuggestion {
    /// True count of 3 or more.
    MaxBet,
    /// True count of 2 or more.
    IncreaseBet,
    /// True count of 1 or more.
    SmallIncrease,
    /// Anything between the other bands.
    StandardBet,
    /// True count of -2 or less.
    MinBetOnly,
}

impl BetSuggestion {
    /// Picks a suggestion for a true count.
    #[must_use]
    pub fn from_true_count(true_count: f64) -> Self {
        if true_count >= 3.0 {
            Self::MaxBet
        } else if true_count >= 2.0 {
            Self::IncreaseBet
        } else if true_count >= 1.0 {
            Self::SmallIncrease
        } else if true_count <= -2.0 {
            Self::MinBetOnly
        } else {
            Self::StandardBet
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MaxBet => "MAX BET",
            Self::IncreaseBet => "Increase Bet",
            Self::SmallIncrease => "Small Increase",
            Self::StandardBet => "Standard Bet",
            Self::MinBetOnly => "MIN BET ONLY",
        }
    }
}

impl fmt::Display for BetSuggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Advantage label and bet suggestion for one true count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Advisory {
    /// How favourable the shoe is.
    pub advantage: Advantage,
    /// Suggested bet sizing.
    pub suggestion: BetSuggestion,
}

/// Looks up the advisory for a true count.
///
/// ```
/// use shoecount::{Advantage, BetSuggestion, advisory};
///
/// let hint = advisory(-2.5);
/// assert_eq!(hint.advantage, Advantage::Unfavorable);
/// assert_eq!(hint.suggestion, BetSuggestion::MinBetOnly);
/// ```
#[must_use]
pub fn advisory(true_count: f64) -> Advisory {
    Advisory {
        advantage: Advantage::from_true_count(true_count),
        suggestion: BetSuggestion::from_true_count(true_count),
    }
}
