//! Deck engine for Exploding Cards, with optional `no_std` support.
//!
//! A [`Deck`] is built from a table of card types, shuffled, and drawn from
//! one card at a time until it runs out. [`Game`] pairs a deck with a
//! [`View`] that is told about every draw, the end of the game, and resets.
//!
//! # Example
//!
//! ```
//! use exploding_cards::{Deck, DeckOptions, Draw};
//!
//! let mut deck = Deck::new(DeckOptions::default(), 42).unwrap();
//! deck.reset();
//! while let Draw::Card(card) = deck.draw() {
//!     let _ = card;
//! }
//! assert!(deck.is_empty());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod result;

// Re-export main types
pub use card::{Card, CardKind};
pub use deck::{Deck, DeckEvent, Phase};
pub use error::OptionsError;
pub use game::{Game, View};
pub use options::{CardType, DEFAULT_POINTS_RANGE, DeckOptions, ValueRange};
pub use result::Draw;
