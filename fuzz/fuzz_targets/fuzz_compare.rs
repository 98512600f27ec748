#![no_main]
// SPDX-License-Identifier: MIT OR Apache-2.0
//! libFuzzer target for compare
//!
//! Tests:
//! - No panics on arbitrary text pairs
//! - Self-comparison of decodable documents is empty
//! - `is_equal` agrees with `compare`
//! - Short-circuit diagnostics never mix with structural ones

use jsoncompare::{DiagnosticKind, compare, is_equal};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Quadratic array matching; keep inputs small
    if data.len() > 4_096 || data.len() < 2 {
        return;
    }

    let mid = data.len() / 2;
    let Ok(first) = std::str::from_utf8(&data[..mid]) else {
        return;
    };
    let Ok(second) = std::str::from_utf8(&data[mid..]) else {
        return;
    };

    let diagnostics = compare(first, second);

    // === Verify: is_equal agrees with compare ===
    assert_eq!(is_equal(first, second), diagnostics.is_empty());

    // === Verify: terminal diagnostics stand alone ===
    if diagnostics.iter().any(|d| d.kind().is_terminal()) {
        assert!(diagnostics.iter().all(|d| d.kind().is_terminal()));
        assert!(diagnostics.len() <= 2);
    }

    // === Verify: mismatches are reported once per path ===
    let mut mismatch_paths: Vec<&str> = diagnostics
        .iter()
        .filter(|d| {
            matches!(
                d.kind(),
                DiagnosticKind::TypeMismatch | DiagnosticKind::ValueMismatch
            )
        })
        .map(|d| d.path().as_str())
        .collect();
    let total = mismatch_paths.len();
    mismatch_paths.sort_unstable();
    mismatch_paths.dedup();
    assert_eq!(total, mismatch_paths.len());

    // === Verify: self-comparison is empty ===
    if serde_json::from_str::<serde_json::Value>(first).is_ok() {
        assert!(compare(first, first).is_empty());
    }
});
