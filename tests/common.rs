#![allow(unused)]
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};

use nanoid_gen::source::{RandomByteSource, SourceError};
use nanoid_gen::{Generator, GeneratorConfig};

/// Source that only ever hands out one byte value.
#[derive(Debug)]
pub struct Constant(pub u8);

impl RandomByteSource for Constant {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), SourceError> {
        dest.fill(self.0);
        Ok(())
    }
}

/// Wraps another source and counts bytes and calls.
#[derive(Debug)]
pub struct Metered<S> {
    pub inner: S,
    pub calls: AtomicUsize,
    pub bytes: AtomicUsize,
}

impl<S> Metered<S> {
    pub fn new(inner: S) -> Self {
        Metered {
            inner,
            calls: AtomicUsize::new(0),
            bytes: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    pub fn bytes(&self) -> usize {
        self.bytes.load(Ordering::Relaxed)
    }
}

impl<S: RandomByteSource> RandomByteSource for Metered<S> {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), SourceError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.bytes.fetch_add(dest.len(), Ordering::Relaxed);
        self.inner.fill_bytes(dest)
    }
}

/// Build a generator for `alphabet` with the given source.
pub fn generator(alphabet: &str, source: Arc<dyn RandomByteSource>) -> Generator {
    GeneratorConfig::new()
        .set_alphabet(alphabet)
        .set_random_source(source)
        .build()
        .expect("valid alphabet")
}

/// An alphabet of `len` unique, non-ASCII chars.
pub fn wide_alphabet(len: usize) -> String {
    (0..len as u32)
        .map(|i| char::from_u32(0x100 + i).expect("valid char"))
        .collect()
}

pub fn init_log() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    static START: Once = Once::new();

    START.call_once(|| {
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(env_filter)
            .init();
    });
}
