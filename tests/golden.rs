//! Golden tests for hashish.
//!
//! Expected fingerprints were produced by the reference encoder; any
//! difference here means the canonical text or the lane arithmetic drifted.

use hashish::{
    canonicalize, fingerprint, fingerprint_canonical, fingerprint_default, Alphabet,
    Fingerprinter, FingerprintConfig, Value,
};

// ─────────────────────────────────────────────────────────────────────────────
// Test Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn json(text: &str) -> Value {
    Value::parse_json(text).unwrap()
}

/// (label, value, canonical text, fingerprint at 12, fingerprint at 24)
fn golden_cases() -> Vec<(&'static str, Value, &'static str, &'static str, &'static str)> {
    vec![
        ("string", Value::from("hashish"), r#""hashish""#, "wQOTrN2dlYN6", "wQOTrN2dlYN60IPo7JBRwQOT"),
        ("object", json(r#"{"a":1,"b":"two"}"#), r#"{"a":1,"b":"two"}"#, "0x9TZb9fU4EM", "0x9TZb9fU4EMmWlo871J0x9T"),
        ("object_three", json(r#"{"a":1,"b":"three"}"#), r#"{"a":1,"b":"three"}"#, "1jG9Ep4FrIYx", "1jG9Ep4FrIYxoKccOavu1jG9"),
        ("array", json("[1,2,3]"), "[1,2,3]", "EYgcwKO~Rv7w", "EYgcwKO~Rv7wPKeO9_DpEYgc"),
        ("number", Value::from(1337), "1337", "CYOBOH4P3qXF", "CYOBOH4P3qXFUijtmhoPCYOB"),
        ("null", Value::Null, "null", "ESD4MWiboqgm", "ESD4MWiboqgmPdQA93H0ESD4"),
        ("true", Value::Bool(true), "true", "1ORGK2S2_9WH", "1ORGK2S2_9WHY9lFGB3Y1ORG"),
        ("empty_string", Value::from(""), r#""""#, "PiqsMhgup6PA", "PiqsMhgup6PAYpaIJaj6Piqs"),
        ("fraction", Value::from(1.5), "1.5", "DPO7VB2yuULe", "DPO7VB2yuULe9sz99wo0DPO7"),
        ("negative_fraction", Value::from(-0.25), "-0.25", "BoACxOLcY~ew", "BoACxOLcY~ewJx7PPbumBoAC"),
        ("large_exponent", Value::from(1e21), "1e+21", "RADTrGeimZFf", "RADTrGeimZFfAUgJJmPwRADT"),
        ("small_exponent", Value::from(1e-7), "1e-7", "dYECyHlYdq2N", "dYECyHlYdq2N2iQtLhHHdYEC"),
        ("nan", Value::from(f64::NAN), "null", "ESD4MWiboqgm", "ESD4MWiboqgmPdQA93H0ESD4"),
        ("astral_text", Value::from("héllo 🌍"), "\"héllo 🌍\"", "4tX2y49JfR8V", "4tX2y49JfR8VLR4ydV_d4tX2"),
        (
            "commit_message",
            Value::from("feat: Implemented the good stuff"),
            r#""feat: Implemented the good stuff""#,
            "d6baDspegUaF",
            "d6baDspegUaFRs9uTtCSd6ba",
        ),
        (
            "mixed_array",
            json(r#"["kief", "trichomes", "resin", 420]"#),
            r#"["kief","trichomes","resin",420]"#,
            "xF5Tiydhky3W",
            "xF5Tiydhky3WtjF37mtJxF5T",
        ),
    ]
}

fn session_document() -> Value {
    json(
        r#"{
            "user": {"firstName": "Smokey", "lastName": "Robinson"},
            "session": {"location": "Amsterdam", "isTokenBaked": true, "sessionId": "420-abc-69-xyz"},
            "preferences": ["Sativa", "Indica", "Hybrid"]
        }"#,
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// REFERENCE COMPATIBILITY TESTS
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_golden_canonical_text() {
    for (label, value, canonical, _, _) in golden_cases() {
        assert_eq!(canonicalize(&value), canonical, "canonical text differs for {}", label);
    }
}

#[test]
fn test_golden_fingerprints_default_length() {
    for (label, value, _, expected, _) in golden_cases() {
        assert_eq!(fingerprint_default(&value).as_str(), expected, "fingerprint differs for {}", label);
    }
}

#[test]
fn test_golden_fingerprints_length_24() {
    let alphabet = Alphabet::default();
    for (label, value, _, _, expected) in golden_cases() {
        assert_eq!(fingerprint(&value, 24, &alphabet).as_str(), expected, "fingerprint differs for {}", label);
    }
}

#[test]
fn test_golden_nested_document() {
    let value = session_document();
    assert_eq!(
        canonicalize(&value),
        concat!(
            r#"{"preferences":["Sativa","Indica","Hybrid"],"#,
            r#""session":{"isTokenBaked":true,"location":"Amsterdam","sessionId":"420-abc-69-xyz"},"#,
            r#""user":{"firstName":"Smokey","lastName":"Robinson"}}"#
        )
    );
    assert_eq!(fingerprint_default(&value).as_str(), "RoBL6VThqRgb");
    assert_eq!(
        fingerprint(&value, 32, &Alphabet::default()).as_str(),
        "RoBL6VThqRgbiOLmg6e2RoBL6VThqRgb"
    );
}

#[test]
fn test_golden_empty_sequence_input() {
    assert_eq!(fingerprint_canonical("", 12, &Alphabet::default()).as_str(), "cGDvU5jKovnc");
}

// ─────────────────────────────────────────────────────────────────────────────
// NUMBER LITERAL TESTS
// ─────────────────────────────────────────────────────────────────────────────

/// (f64 bits, literal the reference encoder writes for that double)
const NUMBER_LITERALS: &[(u64, &str)] = &[
    // Exactly halfway between two shortest digit strings: even digit wins.
    (0x430d41c1eee4ce72, "1029384439634382.2"),
    (0xc31b48388d57da31, "-1919808024475276.2"),
    (0x4314e08500000001, "1469090342371328.2"),
    (0x431fef2100000003, "2247162322747392.8"),
    (0x431ac51d00000001, "1883769434800128.2"),
    (0x431e217908000003, "2120263252574208.8"),
    // Subnormals and the normal boundary.
    (0x0000000000000001, "5e-324"),
    (0x0000000000000002, "1e-323"),
    (0x0000000000003039, "6.099e-320"),
    (0x000fffffffffffff, "2.225073858507201e-308"),
    (0x0010000000000000, "2.2250738585072014e-308"),
    // Extremes and notation switches.
    (0x7fefffffffffffff, "1.7976931348623157e+308"),
    (0xfe41eb2d66005835, "-1.5e+300"),
    (0x444b1ae4d6e2ef4f, "999999999999999900000"),
    (0x444b1ae4d6e2ef50, "1e+21"),
    (0x44dfe185ca57c517, "6.02214076e+23"),
    (0x3eb0c6f7a0b5ed8d, "0.000001"),
    (0x3e7ad7f29abcaf48, "1e-7"),
    (0x3c36b082c2148b8e, "1.23e-18"),
    (0x17ada415bb976d51, "1.2688930825053271e-194"),
    (0x2d58318fdd40ad32, "2.969216268832906e-90"),
    // Ordinary doubles.
    (0x3fd3333333333334, "0.30000000000000004"),
    (0x3fd5555555555555, "0.3333333333333333"),
    (0x4011666666666666, "4.35"),
    (0x4340000000000000, "9007199254740992"),
    (0x4340000000000001, "9007199254740994"),
];

/// (structured-data text, literal the reference writes after parsing it)
const PARSED_LITERALS: &[(&str, &str)] = &[
    ("2.96921626883290602e-90", "2.969216268832906e-90"),
    ("1.2688930825053271e-194", "1.2688930825053271e-194"),
    ("0.30000000000000000444089209850062616169452667236328125", "0.3"),
    ("123456789012345678901234567890", "1.2345678901234568e+29"),
    ("9007199254740993", "9007199254740992"),
    ("1.00000000000000011102230246251565404236316680908203125", "1"),
    ("2.4703282292062327e-324", "0"),
    ("2.4703282292062328e-324", "5e-324"),
    ("7.2057594037927933e16", "72057594037927940"),
    ("1e-400", "0"),
    ("-0.0", "0"),
];

#[test]
fn test_number_literals_match_reference() {
    for &(bits, expected) in NUMBER_LITERALS {
        let value = Value::Number(f64::from_bits(bits));
        assert_eq!(canonicalize(&value), expected, "literal differs for bits {:#018x}", bits);
    }
}

#[test]
fn test_parsed_literals_match_reference() {
    for &(text, expected) in PARSED_LITERALS {
        assert_eq!(canonicalize(&json(text)), expected, "literal differs for input {}", text);

        // Inside a container the same double must come out.
        let wrapped = json(&format!("[{}]", text));
        assert_eq!(canonicalize(&wrapped), format!("[{}]", expected), "array literal differs for {}", text);
    }
}

#[test]
fn test_halfway_number_fingerprint_matches_reference() {
    let value = json("1029384439634382.25");
    assert_eq!(canonicalize(&value), "1029384439634382.2");
    assert_eq!(
        fingerprint_default(&value),
        fingerprint_canonical("1029384439634382.2", 12, &Alphabet::default())
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// DETERMINISM TESTS
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_same_value_same_fingerprint_100_runs() {
    let value = session_document();
    let first = fingerprint_default(&value);

    for i in 1..100 {
        assert_eq!(
            fingerprint_default(&value),
            first,
            "Fingerprint must be deterministic (run {} differs from run 0)",
            i
        );
    }

    eprintln!("Deterministic fingerprint: {}", first);
}

#[test]
fn test_key_insertion_order_irrelevant() {
    let forward = Value::mapping([("a", Value::from(1)), ("b", Value::from(2))]);
    let backward = Value::mapping([("b", Value::from(2)), ("a", Value::from(1))]);

    assert_eq!(canonicalize(&forward), r#"{"a":1,"b":2}"#);
    assert_eq!(canonicalize(&backward), r#"{"a":1,"b":2}"#);
    assert_eq!(fingerprint_default(&forward), fingerprint_default(&backward));
}

#[test]
fn test_sequence_reorder_changes_fingerprint() {
    let forward = json(r#"["a","b"]"#);
    let backward = json(r#"["b","a"]"#);
    assert_ne!(canonicalize(&forward), canonicalize(&backward));
    assert_ne!(fingerprint_default(&forward), fingerprint_default(&backward));
}

#[test]
fn test_threads_agree() {
    let value = session_document();
    let expected = fingerprint_default(&value);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let value = value.clone();
            std::thread::spawn(move || fingerprint_default(&value))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_fingerprinter_matches_free_function() {
    let fingerprinter = Fingerprinter::new(FingerprintConfig::default().with_length(20));
    let value = session_document();
    assert_eq!(
        fingerprinter.fingerprint(&value),
        fingerprint(&value, 20, &Alphabet::default())
    );
}
