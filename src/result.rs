//! Draw result type.

use crate::card::Card;

/// Outcome of drawing from the deck.
///
/// An empty deck is a normal end of game, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Draw {
    /// The card taken from the top of the deck.
    Card(Card),
    /// The deck had no cards left.
    Empty,
}

impl Draw {
    /// Returns the drawn card, if any.
    #[must_use]
    pub const fn card(self) -> Option<Card> {
        match self {
            Self::Card(card) => Some(card),
            Self::Empty => None,
        }
    }

    /// Returns whether the deck was empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<Option<Card>> for Draw {
    fn from(card: Option<Card>) -> Self {
        card.map_or(Self::Empty, Self::Card)
    }
}
