//! Compact, collision resistant random string IDs.
//!
//! IDs are drawn from a configurable alphabet using an unbiased sampling
//! algorithm over a pluggable source of random bytes. This is a library, not a
//! service: there is no coordination, no time component and no collision
//! detection. The only guarantee beyond uniformity is the quality of the byte
//! source you plug in.
//!
//! # Usage
//!
//! ```
//! use nanoid_gen::Generator;
//!
//! let gen = Generator::new();
//!
//! // 21 symbols from the URL safe default alphabet.
//! let id = gen.generate().unwrap();
//! assert_eq!(id.len(), 21);
//! ```
//!
//! A one-off ID with all defaults does not even need a generator.
//!
//! ```
//! let id = nanoid_gen::generate().unwrap();
//! assert_eq!(id.len(), 21);
//! ```
//!
//! ## Custom alphabet and size
//!
//! ```
//! use nanoid_gen::Generator;
//!
//! let gen = Generator::builder()
//!     .set_alphabet("0123456789")
//!     .set_default_size(12)
//!     .build()
//!     .unwrap();
//!
//! let id = gen.generate().unwrap();
//! assert!(id.chars().all(|c| c.is_ascii_digit()));
//! ```
//!
//! ## Random byte sources
//!
//! The generator asks a [`RandomByteSource`][source::RandomByteSource] for
//! bytes. The default comes from [`source::from_feature_flags()`]: OpenSSL's
//! `RAND_bytes` with the `openssl` feature (on by default), otherwise rand's
//! thread local CSPRNG.
//!
//! Seedable sources exist for tests and fixtures. [`source::Mt19937Random`]
//! reproduces the reference golden vectors bit for bit.
//!
//! ```
//! use std::sync::Arc;
//! use nanoid_gen::Generator;
//! use nanoid_gen::source::Mt19937Random;
//!
//! let gen = Generator::builder()
//!     .set_random_source(Arc::new(Mt19937Random::new(42)))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(gen.generate().unwrap(), "bSXVoyfBS3YoELqjfpZw7");
//! ```
//!
//! # Algorithm
//!
//! When the alphabet length is a power of two, each random byte is masked down
//! to an index. One byte per symbol, no rejection.
//!
//! Otherwise bytes are masked with the smallest all-ones mask covering the
//! alphabet and values outside the alphabet are discarded. Bytes are drawn in
//! batches of `ceil(1.6 * mask * size / len)` so that a second batch is rarely
//! needed. Each batch is scanned from its last byte down to index 1. Index 0
//! is never used. That quirk is kept so seeded sources give the same IDs as
//! already deployed implementations.
//!
//! # Errors
//!
//! Errors are either a result of invalid input, an alphabet or size that fails
//! validation, or a failing byte source. Validation is eager: it happens when
//! an [`Alphabet`], a [`Size`] or a [`Generator`] is built, never halfway
//! through generating an ID. No partial ID is ever returned.
//!
//! The library logs through [`tracing`] and never installs a subscriber.

#![forbid(unsafe_code)]
#![allow(clippy::new_without_default)]
#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

use once_cell::sync::Lazy;
use thiserror::Error;

mod alphabet;
pub use alphabet::{Alphabet, DEFAULT_ALPHABET};

mod size;
pub use size::Size;

mod config;
pub use config::GeneratorConfig;

mod generator;
pub use generator::Generator;

pub mod error;
pub use error::InvalidInput;

pub mod source;

/// Errors for the whole library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NanoIdError {
    /// Invalid alphabet or size.
    #[error("{0}")]
    InvalidInput(#[from] InvalidInput),

    /// The random byte source failed. Passed through unmodified.
    #[error("{0}")]
    Source(#[from] source::SourceError),
}

static PROCESS_DEFAULT: Lazy<Generator> = Lazy::new(Generator::new);

/// Generate an ID with the default alphabet, size and source.
///
/// Uses a generator shared by the whole process, created on first use.
pub fn generate() -> Result<String, NanoIdError> {
    PROCESS_DEFAULT.generate()
}
