use rand::RngCore;

use super::{RandomByteSource, SourceError};

/// Cryptographically strong source backed by rand's thread local generator.
///
/// The generator is a ChaCha based CSPRNG seeded, and periodically reseeded,
/// from the operating system. Each thread gets its own instance so this type
/// carries no state and is free to share.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl ThreadRandom {
    /// Creates a new thread rng source.
    pub fn new() -> Self {
        ThreadRandom
    }
}

impl RandomByteSource for ThreadRandom {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), SourceError> {
        rand::rng().fill_bytes(dest);
        Ok(())
    }
}
