use super::{RandomByteSource, SourceError};

/// Cryptographically strong source backed by OpenSSL's `RAND_bytes`.
///
/// OpenSSL failures, such as an unseeded DRBG, surface as
/// [`SourceError::OpenSsl`].
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenSslRandom;

impl OpenSslRandom {
    /// Creates a new OpenSSL source.
    pub fn new() -> Self {
        OpenSslRandom
    }
}

impl RandomByteSource for OpenSslRandom {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), SourceError> {
        if dest.is_empty() {
            return Ok(());
        }
        openssl::rand::rand_bytes(dest)?;
        Ok(())
    }
}
