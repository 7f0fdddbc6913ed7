//! Golden tests: fixed inputs against recorded outputs.
//!
//! Cases live in tests/golden/cases.json so they can be shared with other
//! front ends.
//!
//! Run: cargo test -p reo-mi --test golden

use std::path::PathBuf;

use reo_mi::ReoHandle;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Cases {
    encode: Vec<EncodeCase>,
    classify: Vec<ClassifyCase>,
    #[cfg_attr(not(feature = "numbers"), allow(dead_code))]
    numbers: Vec<NumberCase>,
}

#[derive(Debug, Deserialize)]
struct EncodeCase {
    scheme: String,
    input: String,
    /// Absent for schemes whose output is private-use glyphs.
    output: Option<String>,
    decoded: String,
}

#[derive(Debug, Deserialize)]
struct ClassifyCase {
    text: String,
    strict: bool,
    valid: bool,
}

#[derive(Debug, Deserialize)]
#[cfg_attr(not(feature = "numbers"), allow(dead_code))]
struct NumberCase {
    input: String,
    output: String,
}

fn load_cases() -> Cases {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/golden/cases.json");
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden file {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse golden file {}: {}", path.display(), e))
}

fn handle() -> ReoHandle {
    ReoHandle::embedded().unwrap_or_else(|e| panic!("failed to load embedded resources: {e}"))
}

#[test]
fn golden_encode() {
    let handle = handle();
    let cases = load_cases();
    assert!(!cases.encode.is_empty());

    let mut failures = Vec::new();
    for case in &cases.encode {
        let encoded = handle.encode(&case.scheme, &case.input).unwrap();
        match &case.output {
            Some(expected) if &encoded != expected => failures.push(format!(
                "{} encode {:?}: expected {:?}, got {:?}",
                case.scheme, case.input, expected, encoded
            )),
            None if encoded == case.input => failures.push(format!(
                "{} encode {:?}: output unchanged",
                case.scheme, case.input
            )),
            _ => {}
        }
        let decoded = handle.decode(&case.scheme, &encoded).unwrap();
        if decoded != case.decoded {
            failures.push(format!(
                "{} decode {:?}: expected {:?}, got {:?}",
                case.scheme, encoded, case.decoded, decoded
            ));
        }
    }
    assert!(failures.is_empty(), "golden encode mismatches:\n{}", failures.join("\n"));
}

#[test]
fn golden_classify() {
    let mut handle = handle();
    let cases = load_cases();

    // once through the cache, once without
    for pass in 0..2 {
        if pass == 1 {
            handle.set_cache_size(None);
        }
        let mut failures = Vec::new();
        for case in &cases.classify {
            let valid = handle.is_maori(&case.text, case.strict, false);
            if valid != case.valid {
                let trace = handle.classify(
                    &case.text,
                    reo_mi::ClassifyOptions {
                        strict: case.strict,
                        verbose: true,
                    },
                );
                failures.push(format!(
                    "{:?} strict={}: expected {}, got {} ({})",
                    case.text,
                    case.strict,
                    case.valid,
                    valid,
                    trace.trace.join("; ")
                ));
            }
        }
        assert!(
            failures.is_empty(),
            "golden classify mismatches (pass {pass}):\n{}",
            failures.join("\n")
        );
    }
}

#[cfg(feature = "numbers")]
#[test]
fn golden_numbers() {
    let cases = load_cases();
    for case in &cases.numbers {
        assert_eq!(
            reo_mi::numbers::convert_numbers(&case.input),
            case.output,
            "{}",
            case.input
        );
    }
}
