//! Error types for validation and random byte sources.

use std::convert::Infallible;

use thiserror::Error;

use crate::alphabet::{MAX_LENGTH, MIN_LENGTH};

pub use crate::source::SourceError;

/// Errors for invalid alphabets or sizes.
///
/// All validation happens when an [`Alphabet`][crate::Alphabet] or
/// [`Size`][crate::Size] is constructed, never inside the sampling loop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum InvalidInput {
    /// Fewer than two symbols.
    #[error("Alphabet must contain at least {} characters.", MIN_LENGTH)]
    AlphabetTooShort,

    /// More than 256 symbols.
    #[error("Alphabet must not exceed {} characters.", MAX_LENGTH)]
    AlphabetTooLong,

    /// A symbol appears more than once. Holds the first repeated symbol.
    #[error("Alphabet must not contain duplicate characters.")]
    DuplicateSymbol(char),

    /// Zero or negative ID length.
    #[error("Size must be a positive integer.")]
    NonPositiveSize,

    /// Positive, but too large to allocate an ID or its byte buffer for.
    #[error("Size is too large.")]
    SizeOutOfRange,
}

impl From<Infallible> for InvalidInput {
    fn from(v: Infallible) -> Self {
        match v {}
    }
}
