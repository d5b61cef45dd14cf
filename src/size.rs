use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::InvalidInput;

/// Strictly positive ID length.
///
/// ```
/// # use nanoid_gen::Size;
/// assert_eq!(Size::new(10).unwrap().get(), 10);
/// assert!(Size::new(0).is_err());
/// assert!(Size::new(-3).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u64")]
pub struct Size(usize);

impl Size {
    /// The default ID length, 21.
    pub const DEFAULT: Size = Size(21);

    /// Validate `value` as an ID length.
    pub fn new(value: i64) -> Result<Size, InvalidInput> {
        if value <= 0 {
            return Err(InvalidInput::NonPositiveSize);
        }
        let v = usize::try_from(value).map_err(|_| InvalidInput::SizeOutOfRange)?;
        Ok(Size(v))
    }

    /// The length as a `usize`. Never zero.
    pub fn get(&self) -> usize {
        self.0
    }
}

impl Default for Size {
    fn default() -> Self {
        Size::DEFAULT
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Size> for u64 {
    fn from(v: Size) -> Self {
        v.0 as u64
    }
}

macro_rules! size_from_signed {
    ($t:ty) => {
        impl TryFrom<$t> for Size {
            type Error = InvalidInput;

            fn try_from(v: $t) -> Result<Self, Self::Error> {
                Size::new(v as i64)
            }
        }
    };
}

macro_rules! size_from_unsigned {
    ($t:ty) => {
        impl TryFrom<$t> for Size {
            type Error = InvalidInput;

            fn try_from(v: $t) -> Result<Self, Self::Error> {
                if v == 0 {
                    return Err(InvalidInput::NonPositiveSize);
                }
                let v = usize::try_from(v).map_err(|_| InvalidInput::SizeOutOfRange)?;
                Ok(Size(v))
            }
        }
    };
}

size_from_signed!(i32);
size_from_signed!(i64);
size_from_unsigned!(u32);
size_from_unsigned!(u64);
size_from_unsigned!(usize);
