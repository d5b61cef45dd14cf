use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::InvalidInput;

pub(crate) const MIN_LENGTH: usize = 2;
pub(crate) const MAX_LENGTH: usize = 256;

/// The 64 symbol URL safe alphabet used unless another one is configured.
///
/// Part of the public contract: IDs already deployed depend on this exact
/// order.
pub const DEFAULT_ALPHABET: &str =
    "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz-";

static DEFAULT: Lazy<Alphabet> = Lazy::new(|| {
    // unwrap: the default alphabet is a valid constant.
    Alphabet::new(DEFAULT_ALPHABET).unwrap()
});

/// Validated set of symbols IDs are drawn from.
///
/// Holds between 2 and 256 unique `char`s. Once constructed it is never
/// mutated, so any `Alphabet` in hand is a valid one.
///
/// ```
/// # use nanoid_gen::Alphabet;
/// let hex = Alphabet::new("0123456789abcdef").unwrap();
///
/// assert_eq!(hex.len(), 16);
/// assert!(hex.is_power_of_two());
///
/// assert!(Alphabet::new("aab").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alphabet {
    value: String,
    symbols: Vec<char>,
}

impl Alphabet {
    /// Validate `value` and create an alphabet from its chars.
    pub fn new(value: &str) -> Result<Alphabet, InvalidInput> {
        let symbols: Vec<char> = value.chars().collect();

        if symbols.len() < MIN_LENGTH {
            return Err(InvalidInput::AlphabetTooShort);
        }

        if symbols.len() > MAX_LENGTH {
            return Err(InvalidInput::AlphabetTooLong);
        }

        let mut seen = HashSet::with_capacity(symbols.len());
        if let Some(dupe) = symbols.iter().find(|c| !seen.insert(**c)) {
            return Err(InvalidInput::DuplicateSymbol(*dupe));
        }

        Ok(Alphabet {
            value: value.to_string(),
            symbols,
        })
    }

    /// The symbols in order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Number of symbols. Always in `2..=256`.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the number of symbols is a power of two.
    ///
    /// Such alphabets are sampled by masking alone, without rejection.
    pub fn is_power_of_two(&self) -> bool {
        let len = self.len();
        len & (len - 1) == 0
    }

    /// The alphabet as the string it was created from.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    #[inline(always)]
    pub(crate) fn symbol(&self, index: usize) -> char {
        self.symbols[index]
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        DEFAULT.clone()
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Alphabet({:?}, len: {})", self.value, self.len())
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl FromStr for Alphabet {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Alphabet::new(s)
    }
}

impl<'a> TryFrom<&'a str> for Alphabet {
    type Error = InvalidInput;

    fn try_from(v: &'a str) -> Result<Self, Self::Error> {
        Alphabet::new(v)
    }
}

impl TryFrom<String> for Alphabet {
    type Error = InvalidInput;

    fn try_from(v: String) -> Result<Self, Self::Error> {
        Alphabet::new(&v)
    }
}

impl From<Alphabet> for String {
    fn from(v: Alphabet) -> Self {
        v.value
    }
}
