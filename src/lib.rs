//! # hashish
//!
//! Deterministic short fingerprints for structured values.
//!
//! hashish answers one question:
//!
//! > Given a structured value, what short, shareable identifier is derived from its content?
//!
//! ## Core Contract
//!
//! 1. Canonicalize the value into one deterministic text (mapping keys sorted)
//! 2. Mix that text into four 32-bit lanes
//! 3. Project the lanes into `length` symbols of a 64-symbol alphabet
//!
//! ## Architecture
//!
//! ```text
//! Value → canonicalize → mix_str → encode → Fingerprint
//!                                    ↑
//!                           FingerprintConfig (length, Alphabet)
//! ```
//!
//! ## Determinism Guarantees
//!
//! - Same value + same length + same alphabet → identical fingerprint
//! - Mapping insertion order never matters; sequence order always does
//! - Text is mixed per UTF-16 code unit, so output matches the reference
//!   encoder on every platform
//!
//! Fingerprints are not a security primitive: there is no resistance to
//! deliberate collisions.
//!
//! ## Example
//!
//! ```rust
//! use hashish::{fingerprint_default, Value};
//!
//! let fp = fingerprint_default(&Value::from("hashish"));
//! assert_eq!(fp.as_str(), "wQOTrN2dlYN6");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod types;
pub mod canonical;
pub mod mixer;
pub mod encoder;
pub mod config;
pub mod profile;

// Re-exports
pub use types::{Alphabet, AlphabetError, Fingerprint, Value};
pub use canonical::{canonicalize, canonicalize_serialize, to_canonical_bytes};
pub use mixer::{LaneState, PROJECTION_PERIOD};
pub use encoder::{
    fingerprint, fingerprint_canonical, fingerprint_default, fingerprint_serialize,
    fingerprint_with_symbols, Fingerprinter, FingerprintError,
};
pub use config::{ConfigError, ConfigOverrides, FingerprintConfig};
pub use profile::{format_bytes, CollisionTier, FingerprintProfile, InputKind};

/// Default fingerprint length in symbols.
pub const DEFAULT_LENGTH: usize = 12;

/// Default alphabet: `0-9`, `A-Z`, `_`, `a-z`, `~`.
pub const DEFAULT_ALPHABET: &str =
    "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_abcdefghijklmnopqrstuvwxyz~";

/// Number of alphabet positions a 6-bit projection can address.
pub const ALPHABET_INDEX_SPACE: usize = 64;

/// Version of the canonical text format.
/// Increment on any change that alters canonical output for an existing value.
pub const CANONICAL_FORMAT_VERSION: &str = "1.0.0";
