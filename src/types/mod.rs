//! Core types for hashish.

pub mod value;
pub mod alphabet;
pub mod fingerprint;

pub use value::Value;
pub use alphabet::{Alphabet, AlphabetError};
pub use fingerprint::Fingerprint;
