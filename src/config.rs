//! Fingerprint configuration.
//!
//! ## Sources
//!
//! | Source | Fields |
//! |--------|--------|
//! | Defaults | length 12, 64-symbol default alphabet |
//! | Environment | `HASHISH_LENGTH`, `HASHISH_ALPHABET` |
//! | JSON file | `{"length": 16, "alphabet": "..."}`, both optional |
//!
//! Sources are layered with [`FingerprintConfig::apply`]; later layers win.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::{Alphabet, AlphabetError};
use crate::DEFAULT_LENGTH;

/// Environment variable holding the output length.
pub const ENV_LENGTH: &str = "HASHISH_LENGTH";

/// Environment variable holding the alphabet text.
pub const ENV_ALPHABET: &str = "HASHISH_ALPHABET";

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Length is not a non-negative integer.
    #[error("Invalid length {value:?}: expected a non-negative integer")]
    InvalidLength {
        /// The rejected text.
        value: String,
    },

    /// Alphabet failed validation.
    #[error("Invalid alphabet: {0}")]
    Alphabet(#[from] AlphabetError),

    /// Config file could not be read.
    #[error("Cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for this schema.
    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Output length and alphabet used for fingerprinting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FingerprintConfig {
    /// Number of symbols in each fingerprint.
    pub length: usize,
    /// Symbols the fingerprint is rendered with.
    pub alphabet: Alphabet,
}

impl Default for FingerprintConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            alphabet: Alphabet::default(),
        }
    }
}

impl FingerprintConfig {
    /// Set the output length.
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Set the alphabet.
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().apply(ConfigOverrides::from_env()?)
    }

    /// Defaults overlaid with a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::default().apply(ConfigOverrides::from_json_file(path)?)
    }

    /// Overlay every field `overrides` sets.
    pub fn apply(mut self, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        if let Some(length) = overrides.length {
            self.length = length;
        }
        if let Some(symbols) = overrides.alphabet {
            self.alphabet = Alphabet::new(&symbols)?;
        }
        Ok(self)
    }
}

/// A partial configuration layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    /// Output length, if set.
    pub length: Option<usize>,
    /// Alphabet text, if set. Validated when applied.
    pub alphabet: Option<String>,
}

impl ConfigOverrides {
    /// Read `HASHISH_LENGTH` / `HASHISH_ALPHABET`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the environment variables through `lookup`.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let length = match get(ENV_LENGTH) {
            Some(raw) => Some(parse_length(&raw)?),
            None => None,
        };

        Ok(Self {
            length,
            alphabet: get(ENV_ALPHABET),
        })
    }

    /// Load a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let overrides = serde_json::from_str(&text)?;
        tracing::debug!(path = %path.as_ref().display(), "loaded config file");
        Ok(overrides)
    }
}

/// Parse a length from text.
pub fn parse_length(raw: &str) -> Result<usize, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidLength {
        value: raw.to_string(),
    })
}
