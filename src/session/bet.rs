use crate::error::BetError;
use crate::result::RoundOutcome;

use super::{Progress, RoundState, Session};

impl Session {
    fn deal_to_player(&mut self) {
        let card = self.draw();
        self.round.player.push(card);
    }

    fn deal_to_dealer(&mut self) {
        let card = self.draw();
        self.round.dealer.push(card);
    }

    /// Places a bet and deals the opening hands.
    ///
    /// Cards go player, dealer, player, dealer (hole card). A natural for the
    /// player settles the round on the spot: 3:2 against a dealer without
    /// blackjack, a push against one.
    ///
    /// # Errors
    ///
    /// Returns an error if the balance is exhausted, a round is already in
    /// progress, the amount is below one, or it exceeds the balance.
    ///
    /// # Example
    ///
    /// ```
    /// use shoecount::{GameOptions, Session};
    ///
    /// let mut session = Session::new(GameOptions::default(), 3);
    /// let progress = session.place_bet(25).unwrap();
    /// assert_eq!(session.player_hand().len(), 2);
    /// let _ = progress;
    /// ```
    pub fn place_bet(&mut self, amount: i64) -> Result<Progress, BetError> {
        if self.state == RoundState::NoFunds {
            return Err(BetError::NoFunds);
        }

        if self.round.in_progress() {
            return Err(BetError::RoundInProgress);
        }

        if amount < 1 {
            return Err(BetError::ZeroBet);
        }

        if amount > self.balance {
            return Err(BetError::ExceedsBalance);
        }

        log::debug!("bet placed: {amount}");
        self.last_result = None;
        self.round.open(amount);
        self.state = RoundState::Dealing;

        self.deal_to_player();
        self.deal_to_dealer();
        self.deal_to_player();
        self.deal_to_dealer();

        Ok(self.finish_initial_deal())
    }

    fn finish_initial_deal(&mut self) -> Progress {
        self.round.can_split = self.round.player.is_pair();

        if self.round.player.is_blackjack() {
            let outcome = if self.round.dealer.is_blackjack() {
                RoundOutcome::Push
            } else {
                RoundOutcome::Blackjack
            };
            return Progress::Settled(self.settle(outcome));
        }

        self.state = RoundState::PlayerTurn;
        Progress::PlayerTurn
    }
}
