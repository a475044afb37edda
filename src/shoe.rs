//! The multi-deck shoe cards are dealt from.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, standard_deck};
use crate::error::ShoeError;

/// A shuffled shoe built from several identical decks.
///
/// The last element of the inner vector is the top of the shoe, so drawing is
/// a `pop`. Counting and the reshuffle policy live with the caller; the shoe
/// itself only stores and shuffles cards.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
    decks: u8,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a freshly shuffled shoe of `decks` decks (at least one).
    ///
    /// # Example
    ///
    /// ```
    /// use shoecount::Shoe;
    ///
    /// let shoe = Shoe::new(4, 7);
    /// assert_eq!(shoe.len(), 208);
    /// ```
    #[must_use]
    pub fn new(decks: u8, seed: u64) -> Self {
        let decks = decks.max(1);
        let mut shoe = Self {
            cards: Vec::with_capacity(decks as usize * DECK_SIZE),
            decks,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        shoe.reshuffle();
        shoe
    }

    /// Discards the current contents and rebuilds a full, shuffled shoe.
    pub fn reshuffle(&mut self) {
        self.cards.clear();
        for _ in 0..self.decks {
            self.cards.extend(standard_deck());
        }
        self.cards.shuffle(&mut self.rng);
    }

    /// Removes and returns the top card, or `None` if the shoe is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Replaces the contents so that `draws[0]` is the next card drawn.
    ///
    /// Useful for scripting deals in tests and replays.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Overfull`] if `draws` holds more cards than the
    /// shoe's capacity. The shoe is left unchanged in that case.
    pub fn stack(&mut self, draws: &[Card]) -> Result<(), ShoeError> {
        if draws.len() > self.capacity() {
            return Err(ShoeError::Overfull);
        }

        self.cards.clear();
        self.cards.extend(draws.iter().rev().copied());
        Ok(())
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in a full shoe.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.decks as usize * DECK_SIZE
    }

    /// Number of decks the shoe is built from.
    #[must_use]
    pub const fn decks(&self) -> u8 {
        self.decks
    }
}
