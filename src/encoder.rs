//! Fingerprint encoder: canonicalize, mix, project.
//!
//! ```text
//! Value → canonicalize → mix (4 × u32 lanes) → project × length → Fingerprint
//! ```
//!
//! Every call owns its lane state; nothing is shared between calls, so all
//! functions here are safe to call from any number of threads.

use serde::Serialize;

use crate::canonical::canonicalize;
use crate::config::FingerprintConfig;
use crate::mixer::{mix_str, project, LaneState};
use crate::types::{Alphabet, AlphabetError, Fingerprint, Value};
use crate::DEFAULT_LENGTH;

/// Errors from the fingerprinting entry points.
#[derive(Debug, thiserror::Error)]
pub enum FingerprintError {
    /// The supplied alphabet is unusable.
    #[error("Invalid alphabet: {0}")]
    Alphabet(#[from] AlphabetError),

    /// A serde value could not be converted into a [`Value`].
    #[error("Value cannot be serialized: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Structured-data text could not be parsed.
    #[error("Invalid structured input: {0}")]
    Parse(#[source] serde_json::Error),

    /// Numeric input text is not a number.
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),
}

/// Fingerprint a value with an explicit length and alphabet.
pub fn fingerprint(value: &Value, length: usize, alphabet: &Alphabet) -> Fingerprint {
    fingerprint_canonical(&canonicalize(value), length, alphabet)
}

/// Fingerprint a value with the default length and alphabet.
pub fn fingerprint_default(value: &Value) -> Fingerprint {
    fingerprint(value, DEFAULT_LENGTH, &Alphabet::default())
}

/// Fingerprint a value with caller-supplied alphabet text.
///
/// # Errors
/// Fails before any hashing if `symbols` is not a valid [`Alphabet`].
pub fn fingerprint_with_symbols(
    value: &Value,
    length: usize,
    symbols: &str,
) -> Result<Fingerprint, FingerprintError> {
    let alphabet = Alphabet::new(symbols)?;
    Ok(fingerprint(value, length, &alphabet))
}

/// Fingerprint any serde-serializable value.
pub fn fingerprint_serialize<T: Serialize + ?Sized>(
    value: &T,
    length: usize,
    alphabet: &Alphabet,
) -> Result<Fingerprint, FingerprintError> {
    Ok(fingerprint(&Value::from_serialize(value)?, length, alphabet))
}

/// Fingerprint an already-canonical sequence.
pub fn fingerprint_canonical(canonical: &str, length: usize, alphabet: &Alphabet) -> Fingerprint {
    let state = mix_str(canonical);
    tracing::trace!(
        canonical_bytes = canonical.len(),
        length = length,
        "fingerprint mixed"
    );
    encode(&state, length, alphabet)
}

/// Project `length` symbols out of a final lane state.
pub fn encode(state: &LaneState, length: usize, alphabet: &Alphabet) -> Fingerprint {
    // `project` yields 0..=63 and a valid alphabet indexes at least 64 symbols.
    let symbols = alphabet.indexed();
    let encoded: String = (0..length).map(|i| symbols[project(state, i)]).collect();
    Fingerprint::new(encoded)
}

/// Reusable fingerprinting handle bound to one configuration.
#[derive(Debug, Clone, Default)]
pub struct Fingerprinter {
    config: FingerprintConfig,
}

impl Fingerprinter {
    /// Create a fingerprinter for `config`.
    pub fn new(config: FingerprintConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &FingerprintConfig {
        &self.config
    }

    /// Fingerprint a value.
    pub fn fingerprint(&self, value: &Value) -> Fingerprint {
        fingerprint(value, self.config.length, &self.config.alphabet)
    }

    /// Fingerprint any serde-serializable value.
    pub fn fingerprint_serialize<T: Serialize + ?Sized>(
        &self,
        value: &T,
    ) -> Result<Fingerprint, FingerprintError> {
        fingerprint_serialize(value, self.config.length, &self.config.alphabet)
    }
}
