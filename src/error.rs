//! Error types for deck configuration.

use thiserror::Error;

use crate::card::CardKind;

/// Errors found while validating a card type table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// Value range has its minimum above its maximum.
    #[error("invalid value range: {min} > {max}")]
    InvalidRange {
        /// Lower bound.
        min: u8,
        /// Upper bound.
        max: u8,
    },
    /// Points row declared without a value range.
    #[error("points cards need a value range")]
    MissingRange,
    /// A kind that carries no value was given a value range.
    #[error("{0} cards do not carry a value")]
    UnexpectedRange(CardKind),
    /// The same kind appears twice in the table.
    #[error("card kind declared twice: {0}")]
    DuplicateKind(CardKind),
}
