//! Canonical serialization for deterministic hashing.
//!
//! This module turns a [`Value`] into the one textual form that is fed to
//! the mixer.
//!
//! ## Determinism Guarantees
//!
//! - Stable key order: mapping keys are emitted in ascending code-point order
//! - Stable sequence order: sequences are emitted in index order
//! - Stable number format: shortest round-trip digits, no locale, non-finite → `null`
//! - No whitespace between tokens
//!
//! ```text
//! {"b":2,"a":1}  →  {"a":1,"b":2}
//! ```

use num_bigint::BigUint;
use serde::Serialize;

use crate::encoder::FingerprintError;
use crate::types::Value;

/// Largest decimal exponent still written without exponential notation.
const MAX_FIXED_EXPONENT: i32 = 21;

/// Smallest decimal exponent still written without exponential notation.
const MIN_FIXED_EXPONENT: i32 = -6;

/// Canonicalize a value into its deterministic textual form.
pub fn canonicalize(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

/// Canonicalize a value and return its UTF-8 bytes.
pub fn to_canonical_bytes(value: &Value) -> Vec<u8> {
    canonicalize(value).into_bytes()
}

/// Canonicalize any serde-serializable value.
pub fn canonicalize_serialize<T: Serialize + ?Sized>(value: &T) -> Result<String, FingerprintError> {
    Ok(canonicalize(&Value::from_serialize(value)?))
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(n) => write_number(out, *n),
        Value::String(s) => write_string(out, s),
        Value::Sequence(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(out, item);
            }
            out.push(']');
        }
        Value::Mapping(map) => {
            // BTreeMap<String, _> iterates in byte order, which for UTF-8 is code-point order.
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(out, key);
                out.push(':');
                write_value(out, item);
            }
            out.push('}');
        }
    }
}

fn write_string(out: &mut String, s: &str) {
    let literal = serde_json::to_string(s).expect("Canonical serialization failed");
    out.push_str(&literal);
}

/// Write a double the way a structured-data literal encoder does.
fn write_number(out: &mut String, n: f64) {
    if !n.is_finite() {
        out.push_str("null");
        return;
    }
    if n == 0.0 {
        // Covers -0.0 as well.
        out.push('0');
        return;
    }
    if n < 0.0 {
        out.push('-');
    }

    let (digits, exponent) = shortest_digits(n.abs());
    let k = digits.len() as i32;
    let n = exponent;

    if k <= n && n <= MAX_FIXED_EXPONENT {
        out.push_str(&digits);
        out.extend(std::iter::repeat('0').take((n - k) as usize));
    } else if 0 < n && n <= MAX_FIXED_EXPONENT {
        let (int_part, frac_part) = digits.split_at(n as usize);
        out.push_str(int_part);
        out.push('.');
        out.push_str(frac_part);
    } else if MIN_FIXED_EXPONENT < n && n <= 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat('0').take((-n) as usize));
        out.push_str(&digits);
    } else {
        let (lead, rest) = digits.split_at(1);
        out.push_str(lead);
        if !rest.is_empty() {
            out.push('.');
            out.push_str(rest);
        }
        let e = n - 1;
        out.push('e');
        out.push(if e >= 0 { '+' } else { '-' });
        out.push_str(&e.abs().to_string());
    }
}

/// Shortest round-trip decimal digits of a positive finite double, and the
/// exponent `n` such that the value is `0.d1d2..dk × 10^n`.
fn shortest_digits(n: f64) -> (String, i32) {
    // `{:e}` without precision yields the shortest digits that round-trip.
    let formatted = format!("{:e}", n);
    let (mantissa, exp) = formatted.split_once('e').unwrap_or((formatted.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exp: i32 = exp.parse().unwrap_or(0);
    let n_exp = exp + 1;
    (break_tie_to_even(n, digits, n_exp), n_exp)
}

/// Among two equally close shortest digit strings, keep the even one.
///
/// `{:e}` may return either neighbour when `x` sits exactly halfway between
/// two `k`-digit decimals; the literal format requires the even last digit.
fn break_tie_to_even(x: f64, digits: String, n: i32) -> String {
    let Ok(s) = digits.parse::<u64>() else {
        return digits;
    };
    if s % 2 == 0 {
        return digits;
    }

    let p = n - digits.len() as i32;
    for neighbour in [s - 1, s + 1] {
        let candidate = neighbour.to_string();
        if candidate.len() != digits.len() {
            continue;
        }
        let round_trips = format!("{}e{}", candidate, p).parse::<f64>() == Ok(x);
        if round_trips && is_midpoint(x, s + neighbour, p) {
            return candidate;
        }
    }
    digits
}

/// Exact test of `2·x == q·10^p` for a positive finite double `x`.
fn is_midpoint(x: f64, q: u64, p: i32) -> bool {
    let bits = x.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    // x = m · 2^e
    let (m, e) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased - 1075)
    };

    let mut lhs = BigUint::from(m);
    let mut rhs = BigUint::from(q);

    let twos = e + 1 - p;
    if twos >= 0 {
        lhs <<= twos as usize;
    } else {
        rhs <<= (-twos) as usize;
    }

    let fives = BigUint::from(5u32).pow(p.unsigned_abs());
    if p >= 0 {
        rhs *= fives;
    } else {
        lhs *= fives;
    }

    lhs == rhs
}
