//! Card type table configuration.

use alloc::vec::Vec;

use crate::card::CardKind;
use crate::error::OptionsError;

/// Inclusive range of values a points card may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueRange {
    /// Smallest value.
    pub min: u8,
    /// Largest value.
    pub max: u8,
}

impl ValueRange {
    /// Creates a range. Bounds are checked by [`DeckOptions::validate`].
    #[must_use]
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    /// Returns whether `value` lies within the range.
    #[must_use]
    pub const fn contains(&self, value: u8) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Default range for points cards.
pub const DEFAULT_POINTS_RANGE: ValueRange = ValueRange::new(1, 10);

/// One row of the card type table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardType {
    /// Kind of card this row produces.
    pub kind: CardKind,
    /// Number of cards of this kind in a full deck.
    pub count: usize,
    /// Value range, required for points cards and forbidden otherwise.
    pub value_range: Option<ValueRange>,
}

impl CardType {
    /// Creates a row for a kind without values.
    #[must_use]
    pub const fn new(kind: CardKind, count: usize) -> Self {
        Self {
            kind,
            count,
            value_range: None,
        }
    }

    /// Creates a points row with the given value range.
    #[must_use]
    pub const fn points(count: usize, min: u8, max: u8) -> Self {
        Self {
            kind: CardKind::Points,
            count,
            value_range: Some(ValueRange::new(min, max)),
        }
    }
}

/// The card type table a deck is built from.
///
/// Rows are kept in declared order; the deck is built by walking them front
/// to back. Use the builder methods to customize the table:
///
/// ```
/// use exploding_cards::{CardKind, DeckOptions};
///
/// let options = DeckOptions::default()
///     .with_count(CardKind::Bomb, 2)
///     .with_points_range(3, 7);
/// assert_eq!(options.count_of(CardKind::Bomb), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckOptions {
    card_types: Vec<CardType>,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            card_types: alloc::vec![
                CardType::new(CardKind::Bomb, 4),
                CardType::new(CardKind::Defuse, 6),
                CardType::new(CardKind::SkipTurn, 4),
                CardType::new(CardKind::Nope, 5),
                CardType::points(20, DEFAULT_POINTS_RANGE.min, DEFAULT_POINTS_RANGE.max),
            ],
        }
    }
}

impl DeckOptions {
    /// Creates a table with no rows. Decks built from it are always empty.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            card_types: Vec::new(),
        }
    }

    /// Creates a table from the given rows, in order.
    #[must_use]
    pub fn from_card_types(card_types: impl IntoIterator<Item = CardType>) -> Self {
        Self {
            card_types: card_types.into_iter().collect(),
        }
    }

    /// Adds a row, replacing the existing row of the same kind in place.
    ///
    /// # Example
    ///
    /// ```
    /// use exploding_cards::{CardKind, CardType, DeckOptions};
    ///
    /// let options = DeckOptions::empty()
    ///     .with_card_type(CardType::new(CardKind::Bomb, 1))
    ///     .with_card_type(CardType::points(2, 1, 3));
    /// assert_eq!(options.total_cards(), 3);
    /// ```
    #[must_use]
    pub fn with_card_type(mut self, card_type: CardType) -> Self {
        match self.position(card_type.kind) {
            Some(index) => self.card_types[index] = card_type,
            None => self.card_types.push(card_type),
        }
        self
    }

    /// Sets how many cards of `kind` the deck holds.
    ///
    /// A missing kind is appended; a new points row gets
    /// [`DEFAULT_POINTS_RANGE`].
    ///
    /// # Example
    ///
    /// ```
    /// use exploding_cards::{CardKind, DeckOptions};
    ///
    /// let options = DeckOptions::empty().with_count(CardKind::Nope, 3);
    /// assert_eq!(options.count_of(CardKind::Nope), 3);
    /// ```
    #[must_use]
    pub fn with_count(mut self, kind: CardKind, count: usize) -> Self {
        match self.position(kind) {
            Some(index) => self.card_types[index].count = count,
            None => self.card_types.push(CardType {
                kind,
                count,
                value_range: kind.has_value().then_some(DEFAULT_POINTS_RANGE),
            }),
        }
        self
    }

    /// Sets the value range of the points row, if there is one.
    ///
    /// # Example
    ///
    /// ```
    /// use exploding_cards::{DeckOptions, ValueRange};
    ///
    /// let options = DeckOptions::default().with_points_range(2, 4);
    /// assert_eq!(options.points_range(), Some(ValueRange::new(2, 4)));
    /// ```
    #[must_use]
    pub fn with_points_range(mut self, min: u8, max: u8) -> Self {
        if let Some(index) = self.position(CardKind::Points) {
            self.card_types[index].value_range = Some(ValueRange::new(min, max));
        }
        self
    }

    /// Removes the row for `kind`.
    ///
    /// # Example
    ///
    /// ```
    /// use exploding_cards::{CardKind, DeckOptions};
    ///
    /// let options = DeckOptions::default().without(CardKind::Bomb);
    /// assert_eq!(options.count_of(CardKind::Bomb), 0);
    /// ```
    #[must_use]
    pub fn without(mut self, kind: CardKind) -> Self {
        self.card_types.retain(|card_type| card_type.kind != kind);
        self
    }

    /// Returns the rows in declared order.
    #[must_use]
    pub fn card_types(&self) -> &[CardType] {
        &self.card_types
    }

    /// Returns the declared count for `kind`, or 0 if it has no row.
    #[must_use]
    pub fn count_of(&self, kind: CardKind) -> usize {
        self.position(kind)
            .map_or(0, |index| self.card_types[index].count)
    }

    /// Returns the value range of the points row.
    #[must_use]
    pub fn points_range(&self) -> Option<ValueRange> {
        self.position(CardKind::Points)
            .and_then(|index| self.card_types[index].value_range)
    }

    /// Returns the number of cards in a freshly built deck.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.card_types.iter().map(|card_type| card_type.count).sum()
    }

    /// Checks the table for inconsistent rows.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, walking rows in order.
    pub fn validate(&self) -> Result<(), OptionsError> {
        for (index, card_type) in self.card_types.iter().enumerate() {
            if self.card_types[..index]
                .iter()
                .any(|earlier| earlier.kind == card_type.kind)
            {
                return Err(OptionsError::DuplicateKind(card_type.kind));
            }

            match (card_type.kind.has_value(), card_type.value_range) {
                (true, None) => return Err(OptionsError::MissingRange),
                (true, Some(range)) if range.min > range.max => {
                    return Err(OptionsError::InvalidRange {
                        min: range.min,
                        max: range.max,
                    });
                }
                (false, Some(_)) => return Err(OptionsError::UnexpectedRange(card_type.kind)),
                _ => {}
            }
        }

        Ok(())
    }

    fn position(&self, kind: CardKind) -> Option<usize> {
        self.card_types
            .iter()
            .position(|card_type| card_type.kind == kind)
    }
}
