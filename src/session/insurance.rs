use crate::error::ActionError;
use crate::result::InsuranceOutcome;

use super::{RoundState, Session};

impl Session {
    /// Returns whether insurance is currently being offered.
    ///
    /// Insurance stays on offer for the whole player turn while the dealer
    /// shows an ace, until it is taken.
    #[must_use]
    pub fn is_insurance_offered(&self) -> bool {
        self.state == RoundState::PlayerTurn
            && self.options.insurance
            && self.round.insurance_bet.is_none()
            && self.round.dealer_shows_ace()
    }

    /// Cost of insurance for the current bet: half the bet, rounded down.
    #[must_use]
    pub const fn insurance_cost(&self) -> i64 {
        self.round.bet / 2
    }

    /// Takes insurance and resolves it immediately against the hole card.
    ///
    /// If the dealer holds blackjack the side bet is paid even money,
    /// otherwise it is lost. The main hand plays on either way.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - It is not the player's turn
    /// - Insurance is disabled or the dealer does not show an ace
    /// - Insurance was already taken this round
    /// - The balance cannot cover both the bet and the insurance
    pub fn take_insurance(&mut self) -> Result<InsuranceOutcome, ActionError> {
        self.ensure_player_turn()?;

        if !self.options.insurance || !self.round.dealer_shows_ace() {
            return Err(ActionError::InsuranceUnavailable);
        }

        if self.round.insurance_bet.is_some() {
            return Err(ActionError::InsuranceTaken);
        }

        let amount = self.insurance_cost();
        if self.balance < self.round.bet.saturating_add(amount) {
            return Err(ActionError::InsufficientFunds);
        }

        self.round.insurance_bet = Some(amount);

        let outcome = if self.round.dealer.is_blackjack() {
            InsuranceOutcome::Won(amount)
        } else {
            InsuranceOutcome::Lost(amount)
        };
        self.balance = self.balance.saturating_add(outcome.net());

        log::info!("insurance {amount}: {outcome:?}, balance {}", self.balance);
        Ok(outcome)
    }
}
