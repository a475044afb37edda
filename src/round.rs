//! Per-round table state.

use crate::hand::{DealerHand, Hand};

/// Stakes, hands and eligibility flags of the round on the table.
///
/// Hands stay on the table after settlement so the final position can be
/// shown; they are cleared when the next round starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Round {
    pub(crate) bet: i64,
    pub(crate) insurance_bet: Option<i64>,
    pub(crate) player: Hand,
    pub(crate) dealer: DealerHand,
    pub(crate) can_double_down: bool,
    pub(crate) can_split: bool,
    pub(crate) in_progress: bool,
}

impl Round {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bet: 0,
            insurance_bet: None,
            player: Hand::new(),
            dealer: DealerHand::new(),
            can_double_down: false,
            can_split: false,
            in_progress: false,
        }
    }

    /// Clears the table and opens a round for `bet`.
    pub(crate) fn open(&mut self, bet: i64) {
        self.clear();
        self.bet = bet;
        self.can_double_down = true;
        self.in_progress = true;
    }

    /// Ends the round, keeping the hands visible.
    pub(crate) const fn close(&mut self) {
        self.can_double_down = false;
        self.can_split = false;
        self.in_progress = false;
    }

    /// Clears hands, stakes and flags.
    pub(crate) fn clear(&mut self) {
        self.player.clear();
        self.dealer.clear();
        self.bet = 0;
        self.insurance_bet = None;
        self.close();
    }

    /// Current stake on the main hand.
    #[must_use]
    pub const fn bet(&self) -> i64 {
        self.bet
    }

    /// Insurance stake, if insurance was taken.
    #[must_use]
    pub const fn insurance_bet(&self) -> Option<i64> {
        self.insurance_bet
    }

    /// The player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// The dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &DealerHand {
        &self.dealer
    }

    /// Whether the player may still double down.
    #[must_use]
    pub const fn can_double_down(&self) -> bool {
        self.can_double_down
    }

    /// Whether the player's first two cards form a pair and no card has been
    /// drawn since.
    #[must_use]
    pub const fn can_split(&self) -> bool {
        self.can_split
    }

    /// Whether the round is still being played.
    #[must_use]
    pub const fn in_progress(&self) -> bool {
        self.in_progress
    }

    /// Whether the dealer's up card is an ace.
    #[must_use]
    pub fn dealer_shows_ace(&self) -> bool {
        self.dealer.up_card().is_some_and(crate::card::Card::is_ace)
    }
}
