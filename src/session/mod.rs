//! Session state and round flow.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::counter::{Advisory, CardCounter};
use crate::error::ActionError;
use crate::hand::{DealerHand, Hand};
use crate::options::GameOptions;
use crate::result::RoundResult;
use crate::round::Round;
use crate::shoe::Shoe;

mod actions;
mod bet;
mod dealer;
mod insurance;
pub mod state;
mod view;

pub use dealer::DEALER_STANDS_ON;
pub use state::{Progress, RoundState};
pub use view::{LegalActions, TableView};

/// A single-player blackjack session.
///
/// The session owns the balance, the shoe, the Hi-Lo counter and the discard
/// pile, and runs one round at a time. Every command completes synchronously;
/// a front-end is free to pace the visible steps itself.
#[derive(Debug, Clone)]
pub struct Session {
    options: GameOptions,
    shoe: Shoe,
    counter: CardCounter,
    discard: Vec<Card>,
    balance: i64,
    round: Round,
    state: RoundState,
    last_result: Option<RoundResult>,
    reshuffles: u32,
}

impl Session {
    /// Creates a new session with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use shoecount::{GameOptions, RoundState, Session};
    ///
    /// let session = Session::new(GameOptions::default(), 42);
    /// assert_eq!(session.balance(), 1000);
    /// assert_eq!(session.state(), RoundState::AwaitingBet);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let shoe = Shoe::new(options.decks, seed);
        let balance = options.starting_balance;

        Self {
            options,
            shoe,
            counter: CardCounter::new(),
            discard: Vec::new(),
            balance,
            round: Round::new(),
            state: if balance > 0 {
                RoundState::AwaitingBet
            } else {
                RoundState::NoFunds
            },
            last_result: None,
            reshuffles: 0,
        }
    }

    /// Rebuilds the shoe and forgets the count and discard pile.
    fn reshuffle(&mut self) {
        self.shoe.reshuffle();
        self.discard.clear();
        self.counter.reset();
        self.reshuffles += 1;
        log::info!("reshuffled a new {}-deck shoe", self.shoe.decks());
    }

    /// Draws a card, reshuffling first once the shoe is down to the threshold.
    fn draw(&mut self) -> Card {
        if self.shoe.len() <= self.reshuffle_threshold() || self.shoe.is_empty() {
            self.reshuffle();
        }

        // A freshly built shoe always holds at least one full deck.
        let card = self
            .shoe
            .draw()
            .expect("shoe was refilled before drawing");
        self.counter.observe(&card);
        log::debug!("drew {card} ({} left)", self.shoe.len());
        card
    }

    /// Clears the previous round from the table.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::NoFunds`] when the balance is exhausted and
    /// [`ActionError::RoundInProgress`] while a round is being played.
    pub fn start_new_round(&mut self) -> Result<(), ActionError> {
        if self.state == RoundState::NoFunds {
            return Err(ActionError::NoFunds);
        }
        if self.round.in_progress() {
            return Err(ActionError::RoundInProgress);
        }

        self.round.clear();
        self.last_result = None;
        self.state = RoundState::AwaitingBet;
        Ok(())
    }

    /// Restores the starting balance with a fresh shoe, count and discard pile.
    ///
    /// Any round in progress is abandoned without settlement.
    pub fn reset_balance(&mut self) {
        if self.round.in_progress() {
            log::info!("abandoning round with bet {}", self.round.bet());
        }

        self.balance = self.options.starting_balance;
        self.round.clear();
        self.last_result = None;
        self.reshuffle();
        self.state = if self.balance > 0 {
            RoundState::AwaitingBet
        } else {
            RoundState::NoFunds
        };
        log::info!("balance reset to {}", self.balance);
    }

    /// Returns the session options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> i64 {
        self.balance
    }

    /// Returns the stake on the table (0 between rounds once cleared).
    #[must_use]
    pub const fn bet(&self) -> i64 {
        self.round.bet()
    }

    /// Returns the insurance stake for this round, if taken.
    #[must_use]
    pub const fn insurance_bet(&self) -> Option<i64> {
        self.round.insurance_bet()
    }

    /// Returns whether a round is being played.
    #[must_use]
    pub const fn is_round_in_progress(&self) -> bool {
        self.round.in_progress()
    }

    /// Returns the round on the table.
    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        self.round.player()
    }

    /// Returns the dealer's hand. Check
    /// [`DealerHand::is_hole_revealed`] before showing the second card.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        self.round.dealer()
    }

    /// Returns the cards settled since the last reshuffle, oldest first.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard
    }

    /// Returns the most recently discarded card.
    #[must_use]
    pub fn last_discard(&self) -> Option<Card> {
        self.discard.last().copied()
    }

    /// Returns the shoe.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns the shoe for stacking scripted deals.
    ///
    /// Cards placed this way are still counted when they are drawn.
    pub const fn shoe_mut(&mut self) -> &mut Shoe {
        &mut self.shoe
    }

    /// Returns the number of cards left in the shoe.
    #[must_use]
    pub fn shoe_remaining(&self) -> usize {
        self.shoe.len()
    }

    /// Returns the card count at or below which the shoe is rebuilt before a
    /// draw.
    ///
    /// This is the configured threshold, capped at a quarter of a full shoe so
    /// that small shoes still deal several rounds between reshuffles.
    ///
    /// ```
    /// use shoecount::{GameOptions, Session};
    ///
    /// let session = Session::new(GameOptions::default(), 1);
    /// assert_eq!(session.reshuffle_threshold(), 52);
    ///
    /// let single = Session::new(GameOptions::default().with_decks(1), 1);
    /// assert_eq!(single.reshuffle_threshold(), 13);
    /// ```
    #[must_use]
    pub fn reshuffle_threshold(&self) -> usize {
        self.options
            .reshuffle_threshold
            .min(self.shoe.capacity() / 4)
    }

    /// Returns the size of a full shoe.
    #[must_use]
    pub const fn shoe_total(&self) -> usize {
        self.shoe.capacity()
    }

    /// Returns the card counter.
    #[must_use]
    pub const fn counter(&self) -> &CardCounter {
        &self.counter
    }

    /// Returns the Hi-Lo running count.
    #[must_use]
    pub const fn running_count(&self) -> i32 {
        self.counter.running_count()
    }

    /// Returns the cards drawn since the last reshuffle.
    #[must_use]
    pub const fn cards_seen(&self) -> u32 {
        self.counter.cards_seen()
    }

    /// Returns the true count for the cards left in the shoe.
    #[must_use]
    pub fn true_count(&self) -> f64 {
        self.counter.true_count(self.shoe.len())
    }

    /// Returns the estimated decks left in the shoe.
    #[must_use]
    pub fn decks_remaining(&self) -> f64 {
        self.counter.decks_remaining(self.shoe.len())
    }

    /// Returns the advantage label and bet suggestion for the current count.
    #[must_use]
    pub fn advisory(&self) -> Advisory {
        self.counter.advisory(self.shoe.len())
    }

    /// Returns the result of the most recently settled round, until the table
    /// is cleared.
    #[must_use]
    pub const fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Returns how many times the shoe has been rebuilt.
    #[must_use]
    pub const fn reshuffle_count(&self) -> u32 {
        self.reshuffles
    }
}
