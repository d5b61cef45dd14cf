use std::sync::Mutex;

use super::{RandomByteSource, SourceError};

/// Fast, seedable, non-cryptographic source backed by [`fastrand`].
///
/// Good for fixtures, load tests and anything where IDs need not be
/// unguessable. Do not use it for tokens or keys.
///
/// ```
/// # use nanoid_gen::source::{FastRandom, RandomByteSource};
/// let a = FastRandom::with_seed(7).draw(8).unwrap();
/// let b = FastRandom::with_seed(7).draw(8).unwrap();
/// assert_eq!(a, b);
/// ```
#[derive(Debug)]
pub struct FastRandom {
    rng: Mutex<fastrand::Rng>,
}

impl FastRandom {
    /// Creates a source seeded from fastrand's global generator.
    pub fn new() -> Self {
        Self::from_rng(fastrand::Rng::new())
    }

    /// Creates a source with a fixed seed. Same seed, same bytes.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(fastrand::Rng::with_seed(seed))
    }

    fn from_rng(rng: fastrand::Rng) -> Self {
        FastRandom {
            rng: Mutex::new(rng),
        }
    }
}

impl Default for FastRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomByteSource for FastRandom {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), SourceError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| SourceError::Other(format!("Failed to lock fastrand: {}", e)))?;
        rng.fill(dest);
        Ok(())
    }
}
