//! Error types for session commands.
//!
//! Every rejection leaves the session exactly as it was. [`RejectionKind`]
//! groups the specific reasons into the four categories a front-end reports.

use thiserror::Error;

/// Broad category of a rejected command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionKind {
    /// The bet amount or timing was not acceptable.
    InvalidBet,
    /// The action is not legal in the current state.
    ActionUnavailable,
    /// The balance cannot cover the extra stake.
    InsufficientFunds,
    /// The balance is exhausted; only a balance reset is accepted.
    NoFundsTerminal,
}

/// Errors that can occur when placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is below one.
    #[error("bet must be at least 1")]
    ZeroBet,
    /// Bet amount exceeds the balance.
    #[error("bet exceeds balance")]
    ExceedsBalance,
    /// A round is already being played.
    #[error("finish the current round first")]
    RoundInProgress,
    /// The balance is exhausted.
    #[error("no funds left, reset the balance")]
    NoFunds,
}

impl BetError {
    /// Returns the rejection category.
    #[must_use]
    pub const fn kind(&self) -> RejectionKind {
        match self {
            Self::ZeroBet | Self::ExceedsBalance | Self::RoundInProgress => {
                RejectionKind::InvalidBet
            }
            Self::NoFunds => RejectionKind::NoFundsTerminal,
        }
    }
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// No round is being played.
    #[error("no round in progress")]
    NoRound,
    /// The action is only valid between rounds.
    #[error("a round is in progress")]
    RoundInProgress,
    /// Double down is no longer allowed this round.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// The hand is not a pair.
    #[error("cannot split this hand")]
    CannotSplit,
    /// The hand is a pair but splitting is not supported.
    #[error("split is not available")]
    SplitUnavailable,
    /// Insurance is not on offer (no dealer ace, or disabled at this table).
    #[error("insurance is not available")]
    InsuranceUnavailable,
    /// Insurance was already taken this round.
    #[error("insurance already taken")]
    InsuranceTaken,
    /// Insufficient funds for this action.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
    /// The balance is exhausted.
    #[error("no funds left, reset the balance")]
    NoFunds,
}

impl ActionError {
    /// Returns the rejection category.
    #[must_use]
    pub const fn kind(&self) -> RejectionKind {
        match self {
            Self::InsufficientFunds => RejectionKind::InsufficientFunds,
            Self::NoFunds => RejectionKind::NoFundsTerminal,
            Self::NoRound
            | Self::RoundInProgress
            | Self::CannotDouble
            | Self::CannotSplit
            | Self::SplitUnavailable
            | Self::InsuranceUnavailable
            | Self::InsuranceTaken => RejectionKind::ActionUnavailable,
        }
    }
}

/// Errors that can occur when stacking a shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// More cards than the shoe can hold.
    #[error("more cards than the shoe can hold")]
    Overfull,
}
