//! Session configuration options.

use crate::card::DECK_SIZE;

/// Rounding mode for payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for a blackjack session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use shoecount::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(6)
///     .with_reshuffle_threshold(78)
///     .with_starting_balance(500);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// The shoe is rebuilt before a draw once this many cards or fewer remain.
    /// 0 reshuffles only when the shoe is empty. Sessions cap it at a quarter
    /// of a full shoe, so one deck reshuffles at 13 cards.
    pub reshuffle_threshold: usize,
    /// Balance a session starts with and returns to on reset.
    pub starting_balance: i64,
    /// Blackjack payout ratio (typically 1.5).
    pub blackjack_pays: f64,
    /// Rounding mode for blackjack payouts.
    pub rounding_blackjack: RoundingMode,
    /// Whether insurance is offered against a dealer ace.
    pub insurance: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 4,
            reshuffle_threshold: DECK_SIZE,
            starting_balance: 1000,
            blackjack_pays: 1.5,
            rounding_blackjack: RoundingMode::Down,
            insurance: true,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// Below four decks the session also lowers the effective reshuffle
    /// threshold to a quarter of the shoe.
    ///
    /// # Example
    ///
    /// ```
    /// use shoecount::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the reshuffle threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use shoecount::GameOptions;
    ///
    /// let options = GameOptions::default().with_reshuffle_threshold(0);
    /// assert_eq!(options.reshuffle_threshold, 0);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_threshold(mut self, cards: usize) -> Self {
        self.reshuffle_threshold = cards;
        self
    }

    /// Sets the starting balance.
    ///
    /// # Example
    ///
    /// ```
    /// use shoecount::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_balance(250);
    /// assert_eq!(options.starting_balance, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: i64) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets the blackjack payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use shoecount::GameOptions;
    ///
    /// let options = GameOptions::default().with_blackjack_pays(1.2);
    /// assert_eq!(options.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use shoecount::{GameOptions, RoundingMode};
    ///
    /// let options = GameOptions::default().with_rounding_blackjack(RoundingMode::Up);
    /// assert_eq!(options.rounding_blackjack, RoundingMode::Up);
    /// ```
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets whether insurance is offered.
    ///
    /// # Example
    ///
    /// ```
    /// use shoecount::GameOptions;
    ///
    /// let options = GameOptions::default().with_insurance(false);
    /// assert_eq!(options.insurance, false);
    /// ```
    #[must_use]
    pub const fn with_insurance(mut self, offered: bool) -> Self {
        self.insurance = offered;
        self
    }
}
