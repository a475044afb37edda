use crate::hand::BLACKJACK;
use crate::options::RoundingMode;
use crate::result::{RoundOutcome, RoundResult};

use super::{RoundState, Session};

/// The dealer draws below this total and stands on it or above, soft or hard.
pub const DEALER_STANDS_ON: u8 = 17;

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> i64 {
    match mode {
        RoundingMode::Up => amount.ceil() as i64,
        RoundingMode::Down => amount.floor() as i64,
        RoundingMode::Nearest => amount.round() as i64,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> i64 {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as i64,
        RoundingMode::Down => libm::floor(amount) as i64,
        RoundingMode::Nearest => libm::round(amount) as i64,
    }
}

impl Session {
    /// Reveals the hole card, draws to 17 and settles against the player.
    pub(super) fn play_dealer(&mut self) -> RoundResult {
        self.state = RoundState::DealerTurn;
        self.round.dealer.reveal_hole();

        while self.round.dealer.score() < DEALER_STANDS_ON {
            let card = self.draw();
            self.round.dealer.push(card);
            log::debug!("dealer hits {card}, score {}", self.round.dealer.score());
        }

        let player = self.round.player.score();
        let dealer = self.round.dealer.score();

        let outcome = if dealer > BLACKJACK {
            RoundOutcome::DealerBust
        } else if player > dealer {
            RoundOutcome::Win
        } else if player < dealer {
            RoundOutcome::Lose
        } else {
            RoundOutcome::Push
        };

        self.settle(outcome)
    }

    /// Winnings on a player natural.
    fn blackjack_winnings(&self, bet: i64) -> i64 {
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for monetary values"
        )]
        let winnings = (bet as f64) * self.options.blackjack_pays;
        round_amount(winnings, self.options.rounding_blackjack)
    }

    /// Pays out the round, discards both hands and returns to betting.
    pub(super) fn settle(&mut self, outcome: RoundOutcome) -> RoundResult {
        self.state = RoundState::Settlement;
        self.round.dealer.reveal_hole();

        let bet = self.round.bet;
        let net = match outcome {
            RoundOutcome::Blackjack => self.blackjack_winnings(bet),
            RoundOutcome::Win | RoundOutcome::DealerBust => bet,
            RoundOutcome::Lose | RoundOutcome::Bust => -bet,
            RoundOutcome::Push => 0,
        };
        self.balance = self.balance.saturating_add(net);

        self.discard.extend_from_slice(self.round.player.cards());
        self.discard.extend_from_slice(self.round.dealer.cards());

        let result = RoundResult {
            outcome,
            bet,
            net,
            player_score: self.round.player.score(),
            dealer_score: self.round.dealer.score(),
            player_cards: self.round.player.cards().to_vec(),
            dealer_cards: self.round.dealer.cards().to_vec(),
            balance_after: self.balance,
        };

        self.round.close();
        self.last_result = Some(result.clone());

        log::info!(
            "round settled: {outcome:?}, net {net}, balance {}",
            self.balance
        );

        if self.balance <= 0 {
            log::info!("balance exhausted, waiting for a reset");
            self.state = RoundState::NoFunds;
        } else {
            self.state = RoundState::AwaitingBet;
        }

        result
    }
}
