//! Fingerprint profiles: the fingerprint plus what it cost to make.
//!
//! A profile reports elapsed time, canonical size in UTF-8 bytes and a
//! rough collision tier for the chosen length. It is display metadata;
//! none of it feeds back into the fingerprint.

use std::fmt;
use std::time::{Duration, Instant};

use serde::{Serialize, Serializer};

use crate::canonical::canonicalize;
use crate::config::FingerprintConfig;
use crate::encoder::{fingerprint_canonical, FingerprintError};
use crate::types::{Fingerprint, Value};
use crate::CANONICAL_FORMAT_VERSION;

const BYTE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// How raw input text should be read into a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum InputKind {
    /// Structured-data text expected to hold a mapping.
    Object,
    /// Structured-data text expected to hold a sequence.
    Array,
    /// Text taken verbatim as a string.
    #[default]
    String,
    /// A complete decimal number; trailing garbage is rejected.
    Number,
}

impl InputKind {
    /// Read `raw` as this kind of input.
    ///
    /// Object and array text are parsed as structured data without checking
    /// which container the text actually holds.
    pub fn parse(self, raw: &str) -> Result<Value, FingerprintError> {
        match self {
            InputKind::Object | InputKind::Array => Value::parse_json(raw),
            InputKind::String => Ok(Value::String(raw.to_string())),
            InputKind::Number => raw
                .trim()
                .parse::<f64>()
                .map(Value::Number)
                .map_err(|_| FingerprintError::InvalidNumber(raw.to_string())),
        }
    }

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            InputKind::Object => "object",
            InputKind::Array => "array",
            InputKind::String => "string",
            InputKind::Number => "number",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rough collision likelihood for a fingerprint length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CollisionTier {
    /// Fewer than 16 symbols.
    Low,
    /// 16 to 23 symbols.
    VeryLow,
    /// 24 symbols or more.
    Negligible,
}

impl CollisionTier {
    /// Tier for a fingerprint of `length` symbols.
    pub fn for_length(length: usize) -> Self {
        match length {
            0..=15 => CollisionTier::Low,
            16..=23 => CollisionTier::VeryLow,
            _ => CollisionTier::Negligible,
        }
    }
}

impl fmt::Display for CollisionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            CollisionTier::Low => "< 0.0001%",
            CollisionTier::VeryLow => "< 0.00000001%",
            CollisionTier::Negligible => "≈ 0%",
        };
        f.write_str(text)
    }
}

impl Serialize for CollisionTier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Format a byte count as `Bytes`, `KB`, `MB` or `GB` with at most two
/// decimals, e.g. `0 Bytes`, `1.5 KB`.
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit_index = 0;
    let mut unit: u64 = 1;
    while unit_index + 1 < BYTE_UNITS.len() && bytes >= unit * 1024 {
        unit *= 1024;
        unit_index += 1;
    }

    // Hundredths, rounding halves up.
    let hundredths = (u128::from(bytes) * 100 + u128::from(unit) / 2) / u128::from(unit);
    let whole = hundredths / 100;
    let frac = hundredths % 100;

    let number = match frac {
        0 => whole.to_string(),
        f if f % 10 == 0 => format!("{}.{}", whole, f / 10),
        f => format!("{}.{:02}", whole, f),
    };
    format!("{} {}", number, BYTE_UNITS[unit_index])
}

/// A fingerprint together with its measurements.
#[derive(Debug, Clone, Serialize)]
pub struct FingerprintProfile {
    /// The fingerprint.
    pub fingerprint: Fingerprint,
    /// Variant of the input value.
    pub value_kind: &'static str,
    /// Requested length.
    pub length: usize,
    /// UTF-8 length of the canonical sequence.
    pub canonical_bytes: usize,
    /// `canonical_bytes` formatted for display.
    pub size: String,
    /// Wall time spent canonicalizing and hashing.
    #[serde(serialize_with = "serialize_micros", rename = "elapsed_us")]
    pub elapsed: Duration,
    /// Collision tier for `length`.
    pub collision: CollisionTier,
    /// Canonical format the fingerprint was computed under.
    pub format_version: &'static str,
}

impl FingerprintProfile {
    /// Fingerprint `value` under `config`, timing the work.
    pub fn measure(value: &Value, config: &FingerprintConfig) -> Self {
        let start = Instant::now();
        let canonical = canonicalize(value);
        let fingerprint = fingerprint_canonical(&canonical, config.length, &config.alphabet);
        let elapsed = start.elapsed();

        tracing::debug!(
            value_kind = value.kind(),
            canonical_bytes = canonical.len(),
            length = config.length,
            elapsed_us = elapsed.as_micros() as u64,
            "fingerprint profiled"
        );

        Self {
            fingerprint,
            value_kind: value.kind(),
            length: config.length,
            canonical_bytes: canonical.len(),
            size: format_bytes(canonical.len() as u64),
            elapsed,
            collision: CollisionTier::for_length(config.length),
            format_version: CANONICAL_FORMAT_VERSION,
        }
    }

    /// Elapsed time as `≈ 0.123ms`.
    pub fn elapsed_display(&self) -> String {
        format!("≈ {:.3}ms", self.elapsed.as_secs_f64() * 1000.0)
    }
}

fn serialize_micros<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(elapsed.as_micros() as u64)
}
