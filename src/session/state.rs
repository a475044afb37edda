//! Round state types.

use crate::result::RoundResult;

/// Where the session is in the round cycle.
///
/// `Dealing`, `DealerTurn` and `Settlement` only exist while a command is
/// running. Between commands a session is in `AwaitingBet`, `PlayerTurn` or
/// `NoFunds`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundState {
    /// Waiting for a bet.
    AwaitingBet,
    /// Dealing the initial four cards.
    Dealing,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Paying out the round.
    Settlement,
    /// The balance is exhausted; only a balance reset is accepted.
    NoFunds,
}

/// What a command left the round in.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Progress {
    /// The player still has to act.
    PlayerTurn,
    /// The round was settled.
    Settled(RoundResult),
}

impl Progress {
    /// Returns the settlement, if the round ended.
    #[must_use]
    pub const fn result(&self) -> Option<&RoundResult> {
        match self {
            Self::PlayerTurn => None,
            Self::Settled(result) => Some(result),
        }
    }
}
