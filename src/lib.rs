//! A single-player blackjack rules engine with Hi-Lo card counting and
//! optional `no_std` support.
//!
//! The crate provides a [`Session`] type that owns the balance, a multi-deck
//! [`Shoe`] with automatic reshuffling, and a [`CardCounter`], and runs one
//! round at a time: bet, deal, player actions, insurance, dealer play and
//! settlement. Every command completes synchronously and returns either its
//! result or a specific rejection; [`Session::view`] captures the table for a
//! front-end to render.
//!
//! # Example
//!
//! ```
//! use shoecount::{GameOptions, Progress, Session};
//!
//! let mut session = Session::new(GameOptions::default(), 42);
//! if let Ok(Progress::PlayerTurn) = session.place_bet(10) {
//!     let result = session.stand().unwrap();
//!     println!("{} (balance {})", result.outcome, result.balance_after);
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod counter;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod round;
pub mod session;
pub mod shoe;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit, standard_deck};
pub use counter::{Advantage, Advisory, BetSuggestion, CardCounter, advisory, hi_lo_weight};
pub use error::{ActionError, BetError, RejectionKind, ShoeError};
pub use hand::{DealerHand, Hand};
pub use options::{GameOptions, RoundingMode};
pub use result::{InsuranceOutcome, RoundOutcome, RoundResult};
pub use round::Round;
pub use session::{DEALER_STANDS_ON, LegalActions, Progress, RoundState, Session, TableView};
pub use shoe::Shoe;
