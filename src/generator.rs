use std::sync::Arc;

use crate::alphabet::Alphabet;
use crate::config::GeneratorConfig;
use crate::error::InvalidInput;
use crate::size::Size;
use crate::source::{self, RandomByteSource};
use crate::NanoIdError;

/// Over-allocation factor for rejection sampling batches.
///
/// Tuned so a second batch is rarely needed. Changing it changes which IDs a
/// seeded source produces.
const STEP_FACTOR: f64 = 1.6;

/// Mints random string IDs from an [`Alphabet`].
///
/// A generator is immutable configuration: an alphabet, a default size and a
/// shared [`RandomByteSource`]. It keeps no state between calls, so it can be
/// cloned or shared freely between threads.
///
/// ```
/// # use nanoid_gen::Generator;
/// let gen = Generator::new();
///
/// let id = gen.generate().unwrap();
/// assert_eq!(id.chars().count(), 21);
///
/// let short = gen.generate_with_size(8).unwrap();
/// assert_eq!(short.chars().count(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct Generator {
    alphabet: Alphabet,
    default_size: Size,
    source: Arc<dyn RandomByteSource>,
}

impl Generator {
    /// Creates a generator with the default alphabet, size 21, and the
    /// default secure source.
    ///
    /// Use [`Generator::builder()`] to change any of these.
    pub fn new() -> Self {
        Generator::from_parts(Alphabet::default(), Size::DEFAULT, source::from_feature_flags())
    }

    /// Creates a config builder for a customized generator.
    ///
    /// Same as [`GeneratorConfig::new()`].
    pub fn builder() -> GeneratorConfig {
        GeneratorConfig::new()
    }

    pub(crate) fn from_parts(
        alphabet: Alphabet,
        default_size: Size,
        source: Arc<dyn RandomByteSource>,
    ) -> Self {
        debug!(
            "New generator, alphabet len: {}, power of two: {}, default size: {}, source: {:?}",
            alphabet.len(),
            alphabet.is_power_of_two(),
            default_size,
            source
        );

        Generator {
            alphabet,
            default_size,
            source,
        }
    }

    /// The alphabet IDs are drawn from.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// The size used by [`Generator::generate()`].
    pub fn default_size(&self) -> Size {
        self.default_size
    }

    /// The shared random byte source.
    pub fn random_source(&self) -> &Arc<dyn RandomByteSource> {
        &self.source
    }

    /// Generate an ID of the default size.
    ///
    /// Fails if the random byte source fails, or if the default size is too
    /// large to allocate for.
    pub fn generate(&self) -> Result<String, NanoIdError> {
        self.generate_sized(self.default_size)
    }

    /// Generate an ID of `size` symbols.
    ///
    /// `size` is anything convertible to a [`Size`], such as an integer.
    /// Zero or negative sizes fail with [`NanoIdError::InvalidInput`], as do
    /// sizes too large to allocate buffers for.
    ///
    /// ```
    /// # use nanoid_gen::{Generator, NanoIdError};
    /// let gen = Generator::new();
    ///
    /// assert_eq!(gen.generate_with_size(5).unwrap().len(), 5);
    /// assert!(matches!(gen.generate_with_size(0), Err(NanoIdError::InvalidInput(_))));
    /// ```
    pub fn generate_with_size<S>(&self, size: S) -> Result<String, NanoIdError>
    where
        S: TryInto<Size>,
        InvalidInput: From<S::Error>,
    {
        let size: Size = size.try_into().map_err(InvalidInput::from)?;
        self.generate_sized(size)
    }

    fn generate_sized(&self, size: Size) -> Result<String, NanoIdError> {
        if self.alphabet.is_power_of_two() {
            self.generate_masked(size)
        } else {
            self.generate_rejecting(size)
        }
    }

    /// One byte per symbol. Masking the low bits of a uniform byte gives a
    /// uniform index when the alphabet length is a power of two.
    fn generate_masked(&self, size: Size) -> Result<String, NanoIdError> {
        let mask = self.alphabet.len() - 1;

        let mut bytes = byte_buffer(size.get())?;
        self.source.fill_bytes(&mut bytes)?;

        let id = bytes
            .iter()
            .map(|b| self.alphabet.symbol(*b as usize & mask))
            .collect();

        Ok(id)
    }

    /// Rejection sampling for any other alphabet length.
    ///
    /// Bytes are scanned from the end of each batch down to, but not
    /// including, index 0. Output for a seeded source depends on this order.
    fn generate_rejecting(&self, size: Size) -> Result<String, NanoIdError> {
        let len = self.alphabet.len();
        let mask = rejection_mask(len);
        let step = batch_step(mask, size.get(), len);

        // step is always >= 2, so each batch has at least one usable byte.
        let mut bytes = byte_buffer(step)?;

        let mut id = String::new();
        id.try_reserve_exact(size.get())
            .map_err(|_| InvalidInput::SizeOutOfRange)?;
        let mut count = 0;

        loop {
            self.source.fill_bytes(&mut bytes)?;

            for b in bytes[1..].iter().rev() {
                let index = (b & mask) as usize;

                if index < len {
                    id.push(self.alphabet.symbol(index));
                    count += 1;

                    if count == size.get() {
                        return Ok(id);
                    }
                }
            }

            trace!(
                "Batch of {} bytes gave {}/{} symbols, drawing another",
                step,
                count,
                size
            );
        }
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

/// Smallest all-ones mask covering `len - 1`.
///
/// Equals `(2 << floor(log2(len - 1))) - 1` for `len` in `3..=256`.
fn rejection_mask(len: usize) -> u8 {
    let bits = usize::BITS - (len - 1).leading_zeros();
    ((1_usize << bits) - 1) as u8
}

/// Zeroed buffer of `len` bytes, or an error instead of aborting when the
/// allocation cannot be made.
fn byte_buffer(len: usize) -> Result<Vec<u8>, InvalidInput> {
    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(len)
        .map_err(|_| InvalidInput::SizeOutOfRange)?;
    bytes.resize(len, 0);
    Ok(bytes)
}

/// Bytes drawn per rejection round: `ceil(1.6 * mask * size / len)`.
fn batch_step(mask: u8, size: usize, len: usize) -> usize {
    (STEP_FACTOR * mask as f64 * size as f64 / len as f64).ceil() as usize
}
