//! Random byte sources for pluggable entropy.
//!
//! The [`Generator`][crate::Generator] never looks at the statistical quality
//! of the bytes it is handed. It only asks a [`RandomByteSource`] for a number
//! of bytes, possibly several times per ID. Swapping the source is how tests
//! get deterministic output and how deployments pick their entropy backend.
//!
//! Implementors of a byte source only need to depend on this module.

use std::fmt;
use std::io;
use std::sync::Arc;

use thiserror::Error;

mod fast;
pub use fast::FastRandom;

mod mt;
pub use mt::Mt19937Random;

#[cfg(feature = "openssl")]
mod ossl;
#[cfg(feature = "openssl")]
pub use ossl::OpenSslRandom;

mod thread;
pub use thread::ThreadRandom;

/// Errors raised by a [`RandomByteSource`].
///
/// The generator passes these on untouched.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    /// Some error from the OpenSSL random generator.
    #[cfg(feature = "openssl")]
    #[error("openssl: {0}")]
    OpenSsl(#[from] openssl::error::ErrorStack),

    /// IO errors for custom sources that read an entropy device, such as
    /// `/dev/urandom` or a hardware RNG. The bundled sources never raise it,
    /// but `?` on an [`io::Error`] inside `fill_bytes` lands here.
    #[error("{0}")]
    Io(#[from] io::Error),

    /// A custom source failed in some other way.
    #[error("{0}")]
    Other(String),
}

/// Supplies uniformly random bytes on demand.
///
/// A source must be re-invokable any number of times. Rejection sampling in
/// the generator can call it repeatedly for a single ID. Each call should
/// return a fresh sample.
///
/// Sources are shared between threads through an `Arc`, which is why
/// `fill_bytes` takes `&self`. Stateful sources use interior mutability.
pub trait RandomByteSource: fmt::Debug + Send + Sync {
    /// Fill `dest` entirely with random bytes.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), SourceError>;

    /// Draw `count` random bytes into a new vector.
    fn draw(&self, count: usize) -> Result<Vec<u8>, SourceError> {
        let mut bytes = vec![0; count];
        self.fill_bytes(&mut bytes)?;
        Ok(bytes)
    }
}

impl<T: RandomByteSource + ?Sized> RandomByteSource for Arc<T> {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), SourceError> {
        (**self).fill_bytes(dest)
    }
}

impl<T: RandomByteSource + ?Sized> RandomByteSource for &T {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), SourceError> {
        (**self).fill_bytes(dest)
    }
}

/// Create the default cryptographically strong source based on enabled
/// feature flags.
///
/// Priority order: openssl, rand's thread rng.
#[allow(unreachable_code, clippy::needless_return)]
pub fn from_feature_flags() -> Arc<dyn RandomByteSource> {
    #[cfg(feature = "openssl")]
    return Arc::new(OpenSslRandom::new());

    Arc::new(ThreadRandom::new())
}
