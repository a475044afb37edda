//! Read-only snapshot of the table for rendering.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::counter::Advisory;
use crate::result::RoundResult;

use super::{RoundState, Session};

/// Which player actions are currently legal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LegalActions {
    /// Draw a card.
    pub hit: bool,
    /// Keep the current hand.
    pub stand: bool,
    /// Double the bet for exactly one more card.
    pub double_down: bool,
    /// Split a pair. Not supported, so always `false`.
    pub split: bool,
    /// Insure against a dealer blackjack.
    pub insurance: bool,
}

/// Everything a front-end needs to draw the table after a command.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableView {
    /// Round state.
    pub state: RoundState,
    /// Current balance.
    pub balance: i64,
    /// Stake on the table.
    pub bet: i64,
    /// Insurance stake, if taken.
    pub insurance_bet: Option<i64>,
    /// Cards left in the shoe.
    pub shoe_remaining: usize,
    /// Cards in a full shoe.
    pub shoe_total: usize,
    /// Hi-Lo running count.
    pub running_count: i32,
    /// Cards drawn since the last reshuffle.
    pub cards_seen: u32,
    /// Running count per deck remaining.
    pub true_count: f64,
    /// Decks left in the shoe.
    pub decks_remaining: f64,
    /// Advantage label and bet suggestion.
    pub advisory: Advisory,
    /// The player's cards.
    pub player_cards: Vec<Card>,
    /// The player's score, if they hold cards.
    pub player_score: Option<u8>,
    /// The dealer's cards; `None` marks a face-down card.
    pub dealer_cards: Vec<Option<Card>>,
    /// The dealer's score, once the hole card is revealed.
    pub dealer_score: Option<u8>,
    /// Cards in the discard pile.
    pub discard_count: usize,
    /// Top of the discard pile.
    pub last_discard: Option<Card>,
    /// Legal player actions.
    pub legal_actions: LegalActions,
    /// Whether the opening hand is a pair (split itself is unavailable).
    pub split_eligible: bool,
    /// Result of the round just settled.
    pub last_result: Option<RoundResult>,
    /// Times the shoe has been rebuilt.
    pub reshuffles: u32,
}

impl Session {
    /// Returns the player actions that would currently be accepted.
    ///
    /// ```
    /// use shoecount::{GameOptions, Session};
    ///
    /// let session = Session::new(GameOptions::default(), 1);
    /// assert!(!session.legal_actions().hit);
    /// ```
    #[must_use]
    pub fn legal_actions(&self) -> LegalActions {
        if self.state != RoundState::PlayerTurn {
            return LegalActions::default();
        }

        let bet = self.round.bet;
        LegalActions {
            hit: true,
            stand: true,
            double_down: self.round.can_double_down
                && bet <= self.balance
                && bet.checked_mul(2).is_some(),
            split: false,
            insurance: self.is_insurance_offered()
                && self.balance >= bet.saturating_add(self.insurance_cost()),
        }
    }

    /// Captures the table for rendering, with the hole card masked until the
    /// dealer reveals it.
    #[must_use]
    pub fn view(&self) -> TableView {
        let player = self.round.player();
        let dealer = self.round.dealer();
        let revealed = dealer.is_hole_revealed();

        let dealer_cards = dealer
            .cards()
            .iter()
            .enumerate()
            .map(|(index, card)| (index == 0 || revealed).then_some(*card))
            .collect();

        TableView {
            state: self.state,
            balance: self.balance,
            bet: self.round.bet(),
            insurance_bet: self.round.insurance_bet(),
            shoe_remaining: self.shoe_remaining(),
            shoe_total: self.shoe_total(),
            running_count: self.running_count(),
            cards_seen: self.cards_seen(),
            true_count: self.true_count(),
            decks_remaining: self.decks_remaining(),
            advisory: self.advisory(),
            player_cards: player.cards().to_vec(),
            player_score: (!player.is_empty()).then(|| player.score()),
            dealer_cards,
            dealer_score: (revealed && !dealer.is_empty()).then(|| dealer.score()),
            discard_count: self.discard.len(),
            last_discard: self.last_discard(),
            legal_actions: self.legal_actions(),
            split_eligible: self.split_eligible(),
            last_result: self.last_result.clone(),
            reshuffles: self.reshuffles,
        }
    }
}
