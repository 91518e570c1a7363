//! Output symbol alphabets.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{ALPHABET_INDEX_SPACE, DEFAULT_ALPHABET};

/// Errors raised while building or indexing an [`Alphabet`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlphabetError {
    /// Fewer than 64 symbols were supplied.
    #[error("Alphabet must contain at least {required} symbols, got {len}")]
    TooShort {
        /// Number of symbols supplied.
        len: usize,
        /// Minimum number of symbols.
        required: usize,
    },

    /// The same symbol appears twice.
    #[error("Alphabet symbol {symbol:?} appears at positions {first} and {second}")]
    DuplicateSymbol {
        /// The repeated symbol.
        symbol: char,
        /// Position of the first occurrence.
        first: usize,
        /// Position of the repeat.
        second: usize,
    },

    /// An index outside the alphabet was requested.
    #[error("Alphabet index {index} out of range for {len} symbols")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of symbols in the alphabet.
        len: usize,
    },
}

/// An ordered set of at least 64 distinct symbols.
///
/// Only the first 64 symbols are ever indexed by the encoder. Validation
/// happens once at construction so encoding never has to wrap or guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet from its symbols in order.
    ///
    /// # Errors
    /// [`AlphabetError::TooShort`] below 64 symbols,
    /// [`AlphabetError::DuplicateSymbol`] if any symbol repeats.
    pub fn new(symbols: impl AsRef<str>) -> Result<Self, AlphabetError> {
        let symbols: Vec<char> = symbols.as_ref().chars().collect();

        if symbols.len() < ALPHABET_INDEX_SPACE {
            return Err(AlphabetError::TooShort {
                len: symbols.len(),
                required: ALPHABET_INDEX_SPACE,
            });
        }

        let mut seen: HashMap<char, usize> = HashMap::with_capacity(symbols.len());
        for (position, &symbol) in symbols.iter().enumerate() {
            if let Some(&first) = seen.get(&symbol) {
                return Err(AlphabetError::DuplicateSymbol {
                    symbol,
                    first,
                    second: position,
                });
            }
            seen.insert(symbol, position);
        }

        Ok(Self { symbols })
    }

    /// Symbol at `index`, bounds-checked.
    pub fn symbol(&self, index: usize) -> Result<char, AlphabetError> {
        self.symbols
            .get(index)
            .copied()
            .ok_or(AlphabetError::IndexOutOfRange {
                index,
                len: self.symbols.len(),
            })
    }

    /// Number of symbols, including any past the indexed 64.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`; a valid alphabet has at least 64 symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbols the encoder can emit.
    pub fn indexed(&self) -> &[char] {
        &self.symbols[..ALPHABET_INDEX_SPACE]
    }

    /// Returns `true` if `symbol` is one of the indexed symbols.
    pub fn contains(&self, symbol: char) -> bool {
        self.indexed().contains(&symbol)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_ALPHABET.chars().collect(),
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Alphabet {
    type Err = AlphabetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Alphabet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Alphabet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::new(&text).map_err(serde::de::Error::custom)
    }
}
