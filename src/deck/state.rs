//! Deck phase and event types.

use crate::card::Card;

/// Whether further draws are possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Cards remain in the deck.
    Ready,
    /// The deck is empty: not yet built, or drawn out.
    Empty,
}

/// State change reported to the rendering side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckEvent {
    /// A card was drawn and should be shown.
    Drawn(Card),
    /// A draw found the deck empty. Drawing should be disabled and a reset
    /// offered.
    Ended,
    /// The deck was (re)built and shuffled. Any shown card and end-of-game
    /// message should be cleared.
    Ready,
}
