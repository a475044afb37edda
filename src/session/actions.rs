use crate::error::ActionError;
use crate::hand::BLACKJACK;
use crate::result::{RoundOutcome, RoundResult};

use super::{Progress, RoundState, Session};

impl Session {
    pub(super) fn ensure_player_turn(&self) -> Result<(), ActionError> {
        match self.state {
            RoundState::PlayerTurn => Ok(()),
            RoundState::NoFunds => Err(ActionError::NoFunds),
            _ => Err(ActionError::NoRound),
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// A hit ends double-down and split eligibility for the round. Going over
    /// 21 settles the round as a bust; reaching exactly 21 stands
    /// automatically, so the dealer plays and the round settles.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn hit(&mut self) -> Result<Progress, ActionError> {
        self.ensure_player_turn()?;

        let card = self.draw();
        self.round.player.push(card);
        self.round.can_double_down = false;
        self.round.can_split = false;

        let score = self.round.player.score();
        log::debug!("player hits {card}, score {score}");

        if score > BLACKJACK {
            Ok(Progress::Settled(self.settle(RoundOutcome::Bust)))
        } else if score == BLACKJACK {
            Ok(Progress::Settled(self.play_dealer()))
        } else {
            Ok(Progress::PlayerTurn)
        }
    }

    /// Player action: Stand (keep current hand). The dealer plays and the
    /// round settles.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<RoundResult, ActionError> {
        self.ensure_player_turn()?;

        log::debug!("player stands on {}", self.round.player.score());
        Ok(self.play_dealer())
    }

    /// Player action: Double down (double bet, receive one card, then stand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, the player has already
    /// hit, or the current bet exceeds the balance. A stake too large to double
    /// is reported as [`ActionError::InsufficientFunds`].
    pub fn double_down(&mut self) -> Result<RoundResult, ActionError> {
        self.ensure_player_turn()?;

        if !self.round.can_double_down {
            return Err(ActionError::CannotDouble);
        }

        if self.round.bet > self.balance {
            return Err(ActionError::InsufficientFunds);
        }
        let Some(doubled) = self.round.bet.checked_mul(2) else {
            return Err(ActionError::InsufficientFunds);
        };

        self.round.bet = doubled;
        let card = self.draw();
        self.round.player.push(card);
        self.round.can_double_down = false;
        self.round.can_split = false;

        let score = self.round.player.score();
        log::debug!(
            "player doubles to {} and draws {card}, score {score}",
            self.round.bet
        );

        if score > BLACKJACK {
            Ok(self.settle(RoundOutcome::Bust))
        } else {
            Ok(self.play_dealer())
        }
    }

    /// Player action: Split.
    ///
    /// Pairs are detected but splitting is not supported, so this never
    /// succeeds. It reports why, letting a front-end distinguish "not a pair"
    /// from "pair, but unavailable".
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::CannotSplit`] when the hand is not a splittable
    /// pair and [`ActionError::SplitUnavailable`] when it is.
    pub fn split(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        if self.round.can_split {
            Err(ActionError::SplitUnavailable)
        } else {
            Err(ActionError::CannotSplit)
        }
    }

    /// Returns whether the opening hand is a pair that has not been hit.
    #[must_use]
    pub const fn split_eligible(&self) -> bool {
        self.round.can_split()
    }
}
