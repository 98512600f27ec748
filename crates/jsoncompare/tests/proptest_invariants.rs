// SPDX-License-Identifier: MIT OR Apache-2.0
//! Property tests for comparison invariants.

use jsoncompare::{Diagnostic, DiagnosticKind, Side, compare, is_equal};
use proptest::prelude::*;
use serde_json::{Map, Value};
use std::collections::HashSet;

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1000_i64..1000).prop_map(Value::from),
        "[a-z]{0,6}".prop_map(Value::String),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
            prop::collection::btree_map("[a-e]{1,3}", inner, 0..5)
                .prop_map(|m| Value::Object(m.into_iter().collect::<Map<String, Value>>())),
        ]
    })
}

fn arb_object() -> impl Strategy<Value = Value> {
    prop::collection::btree_map("[a-e]{1,3}", arb_value(), 0..6)
        .prop_map(|m| Value::Object(m.into_iter().collect()))
}

fn mirrored(diagnostics: &[Diagnostic]) -> Vec<(Side, DiagnosticKind, String)> {
    diagnostics
        .iter()
        .map(|d| (d.side().other(), d.kind(), d.path().to_string()))
        .collect()
}

proptest! {
    #[test]
    fn prop_reflexive(value in arb_object()) {
        prop_assert!(is_equal(value.clone(), value.clone()));
        prop_assert!(compare(value.clone(), value).is_empty());
    }

    #[test]
    fn prop_text_and_value_agree(value in arb_object()) {
        let text = value.to_string();
        prop_assert!(is_equal(text.as_str(), value.clone()));
        prop_assert!(compare(text, value).is_empty());
    }

    #[test]
    fn prop_is_equal_matches_compare(first in arb_object(), second in arb_object()) {
        prop_assert_eq!(
            is_equal(first.clone(), second.clone()),
            compare(first, second).is_empty()
        );
    }

    #[test]
    fn prop_equality_symmetric(first in arb_object(), second in arb_object()) {
        prop_assert_eq!(
            is_equal(first.clone(), second.clone()),
            is_equal(second, first)
        );
    }

    #[test]
    fn prop_no_duplicate_mismatches(first in arb_object(), second in arb_object()) {
        let diagnostics = compare(first, second);
        let mut seen = HashSet::new();
        for d in &diagnostics {
            match d.kind() {
                DiagnosticKind::TypeMismatch | DiagnosticKind::ValueMismatch => {
                    prop_assert!(seen.insert((d.kind(), d.path().to_string())));
                    prop_assert_eq!(d.side(), Side::Json1);
                }
                DiagnosticKind::MissingArrayItem => {
                    let key = format!("{}:{}", d.side(), d.path());
                    prop_assert!(seen.insert((d.kind(), key)));
                }
                _ => {}
            }
        }
    }

    #[test]
    fn prop_missing_fields_mirror_on_swap(first in arb_object(), second in arb_object()) {
        let forward = compare(first.clone(), second.clone());
        let backward = compare(second, first);
        let keep = |list: Vec<(Side, DiagnosticKind, String)>| -> HashSet<_> {
            list.into_iter()
                .filter(|(_, kind, _)| {
                    matches!(kind, DiagnosticKind::MissingField | DiagnosticKind::MissingArrayItem)
                })
                .collect()
        };
        let forward_keys: HashSet<_> = keep(mirrored(&forward));
        let backward_keys: HashSet<_> = keep(
            backward
                .iter()
                .map(|d| (d.side(), d.kind(), d.path().to_string()))
                .collect(),
        );
        prop_assert_eq!(forward_keys, backward_keys);
    }

    #[test]
    fn prop_added_key_reported_once(value in arb_object(), extra in arb_value()) {
        let mut extended = value.clone();
        if let Value::Object(map) = &mut extended {
            map.insert("zz_extra".to_string(), extra);
        }
        let diagnostics = compare(value, extended);
        prop_assert_eq!(diagnostics.len(), 1);
        prop_assert_eq!(
            diagnostics[0].render(),
            "JSON2: \"zz_extra\" not found in JSON1."
        );
    }
}
