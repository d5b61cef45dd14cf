use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;
use crate::generator::Generator;
use crate::size::Size;
use crate::source::{self, RandomByteSource};
use crate::NanoIdError;

/// Customized config for creating a [`Generator`] instance.
///
/// Every field is independently overridable. Anything left unset falls back
/// to the defaults: [`DEFAULT_ALPHABET`][crate::DEFAULT_ALPHABET], size 21 and
/// [`source::from_feature_flags()`].
///
/// ```
/// use nanoid_gen::GeneratorConfig;
///
/// let gen = GeneratorConfig::new()
///     .set_alphabet("0123456789abcdef")
///     .set_default_size(32)
///     .build()
///     .unwrap();
///
/// assert_eq!(gen.generate().unwrap().len(), 32);
/// ```
///
/// Validation of the alphabet and size happens in [`GeneratorConfig::build()`].
///
/// Configs implement [`Clone`] to help create multiple `Generator` instances,
/// and serde traits so the alphabet and size can come from a config file. The
/// random source is not serialized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    alphabet: Option<String>,
    default_size: Option<i64>,
    #[serde(skip)]
    random_source: Option<Arc<dyn RandomByteSource>>,
}

impl GeneratorConfig {
    /// Creates a new default config.
    pub fn new() -> Self {
        GeneratorConfig::default()
    }

    /// The alphabet, if explicitly set.
    pub fn alphabet(&self) -> Option<&str> {
        self.alphabet.as_deref()
    }

    /// Set the symbols IDs are drawn from.
    ///
    /// Must be 2 to 256 unique characters. Checked when building.
    pub fn set_alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.alphabet = Some(alphabet.into());
        self
    }

    /// The default size, if explicitly set.
    pub fn default_size(&self) -> Option<i64> {
        self.default_size
    }

    /// Set the ID length used by [`Generator::generate()`].
    ///
    /// Must be positive. Checked when building.
    ///
    /// Defaults to 21.
    pub fn set_default_size(mut self, size: i64) -> Self {
        self.default_size = Some(size);
        self
    }

    /// The random byte source, if explicitly set.
    ///
    /// When `None`, [`source::from_feature_flags()`] is used when building.
    pub fn random_source(&self) -> Option<&Arc<dyn RandomByteSource>> {
        self.random_source.as_ref()
    }

    /// Set the random byte source.
    ///
    /// The source is shared, not owned. Cloning the config or the built
    /// generator hands out further references to the same source.
    pub fn set_random_source(mut self, source: Arc<dyn RandomByteSource>) -> Self {
        self.random_source = Some(source);
        self
    }

    /// Validate and create a [`Generator`] from this config.
    ///
    /// Fails with [`NanoIdError::InvalidInput`] if the alphabet or default
    /// size is invalid.
    pub fn build(self) -> Result<Generator, NanoIdError> {
        let alphabet = match &self.alphabet {
            Some(v) => Alphabet::new(v)?,
            None => Alphabet::default(),
        };

        let default_size = match self.default_size {
            Some(v) => Size::new(v)?,
            None => Size::DEFAULT,
        };

        let source = self
            .random_source
            .unwrap_or_else(source::from_feature_flags);

        Ok(Generator::from_parts(alphabet, default_size, source))
    }
}
