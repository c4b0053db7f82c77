//! Card types.

use core::fmt;

/// Card kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CardKind {
    /// Bomb. Drawing one is what the game is named after.
    Bomb,
    /// Defuse.
    Defuse,
    /// Skip a turn.
    SkipTurn,
    /// Nope.
    Nope,
    /// Points card carrying a numeric value.
    Points,
}

impl CardKind {
    /// All kinds, in default table order.
    pub const ALL: [Self; 5] = [
        Self::Bomb,
        Self::Defuse,
        Self::SkipTurn,
        Self::Nope,
        Self::Points,
    ];

    /// Display name of the kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bomb => "Bomb",
            Self::Defuse => "Defuse",
            Self::SkipTurn => "Skip-turn",
            Self::Nope => "Nope",
            Self::Points => "Points",
        }
    }

    /// Returns whether cards of this kind carry a value.
    #[must_use]
    pub const fn has_value(self) -> bool {
        matches!(self, Self::Points)
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single card.
///
/// Cards are created while the deck is built and never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card {
    /// The kind of the card.
    pub kind: CardKind,
    /// The value, present only on [`CardKind::Points`] cards.
    pub value: Option<u8>,
}

impl Card {
    /// Creates a card without a value.
    #[must_use]
    pub const fn new(kind: CardKind) -> Self {
        Self { kind, value: None }
    }

    /// Creates a points card with the given value.
    #[must_use]
    pub const fn points(value: u8) -> Self {
        Self {
            kind: CardKind::Points,
            value: Some(value),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(value) => write!(f, "{} ({value})", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}
