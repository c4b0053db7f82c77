//! Deck controller.

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;
use tracing::{debug, trace};

use crate::card::{Card, CardKind};
use crate::error::OptionsError;
use crate::options::DeckOptions;
use crate::result::Draw;

pub mod state;

pub use state::{DeckEvent, Phase};

/// Owns the undrawn cards and moves them through build, shuffle, draw and
/// reset.
///
/// The top of the deck is the end of [`Deck::cards`]: the last card put in
/// is the first one drawn. A new deck is empty until [`Deck::build`] or
/// [`Deck::reset`] is called.
#[derive(Debug, Clone)]
pub struct Deck<R = ChaCha8Rng> {
    cards: Vec<Card>,
    options: DeckOptions,
    rng: R,
}

impl Deck<ChaCha8Rng> {
    /// Creates an empty deck whose shuffles and point values come from a
    /// `ChaCha8` generator seeded with `seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if `options` does not validate.
    ///
    /// # Example
    ///
    /// ```
    /// use exploding_cards::{Deck, DeckOptions, Phase};
    ///
    /// let mut deck = Deck::new(DeckOptions::default(), 42).unwrap();
    /// assert_eq!(deck.phase(), Phase::Empty);
    ///
    /// deck.reset();
    /// assert_eq!(deck.len(), deck.full_size());
    /// ```
    pub fn new(options: DeckOptions, seed: u64) -> Result<Self, OptionsError> {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Deck<R> {
    /// Creates an empty deck drawing randomness from `rng`.
    ///
    /// # Errors
    ///
    /// Returns an error if `options` does not validate.
    pub fn with_rng(options: DeckOptions, rng: R) -> Result<Self, OptionsError> {
        options.validate()?;

        Ok(Self {
            cards: Vec::with_capacity(options.total_cards()),
            options,
            rng,
        })
    }

    /// Fills an empty deck from the card type table.
    ///
    /// Rows are walked in declared order and each contributes `count` cards.
    /// Points values are sampled here, uniformly from the row's range.
    /// Does nothing if the deck still holds cards.
    pub fn build(&mut self) {
        if !self.cards.is_empty() {
            trace!(remaining = self.cards.len(), "build skipped, deck not empty");
            return;
        }

        for card_type in self.options.card_types() {
            for _ in 0..card_type.count {
                let value = card_type
                    .value_range
                    .map(|range| self.rng.random_range(range.min..=range.max));
                self.cards.push(Card {
                    kind: card_type.kind,
                    value,
                });
            }
        }

        debug!(cards = self.cards.len(), "deck built");
    }

    /// Shuffles the remaining cards in place.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
        debug!(cards = self.cards.len(), "deck shuffled");
    }

    /// Takes the top card.
    ///
    /// Returns [`Draw::Empty`] without touching the deck if no cards are left.
    pub fn draw(&mut self) -> Draw {
        let Some(card) = self.cards.pop() else {
            debug!("draw from empty deck");
            return Draw::Empty;
        };

        trace!(
            kind = %card.kind,
            value = ?card.value,
            remaining = self.cards.len(),
            "card drawn"
        );
        if self.cards.is_empty() {
            debug!("deck exhausted");
        }

        Draw::Card(card)
    }

    /// Discards the remaining cards, then builds and shuffles a full deck.
    pub fn reset(&mut self) {
        let discarded = self.cards.len();
        self.cards.clear();
        self.build();
        self.shuffle();
        debug!(discarded, cards = self.cards.len(), "deck reset");
    }
}

impl<R> Deck<R> {
    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        if self.cards.is_empty() {
            Phase::Empty
        } else {
            Phase::Ready
        }
    }

    /// Returns the number of cards left.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether no cards are left.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the top card without drawing it.
    #[must_use]
    pub fn peek(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Counts the remaining cards per kind.
    #[must_use]
    pub fn composition(&self) -> HashMap<CardKind, usize> {
        let mut counts = HashMap::new();
        for card in &self.cards {
            *counts.entry(card.kind).or_insert(0) += 1;
        }
        counts
    }

    /// Returns the size of a freshly built deck.
    #[must_use]
    pub fn full_size(&self) -> usize {
        self.options.total_cards()
    }

    /// Returns the card type table.
    #[must_use]
    pub const fn options(&self) -> &DeckOptions {
        &self.options
    }
}
