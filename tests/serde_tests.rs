#![cfg(feature = "serde")]

//! Integration tests for serde support in lenskit.
//!
//! `Value` maps may use any value as a key, which JSON objects cannot
//! represent, so maps are only checked for the expected failure.

use lenskit::prelude::*;
use rstest::rstest;

// =============================================================================
// Value Integration Tests
// =============================================================================

/// Tests that scalar and sequence values survive a JSON round trip.
#[rstest]
#[case(Value::Nil)]
#[case(Value::from(true))]
#[case(Value::from(-7))]
#[case(atom("ok"))]
#[case(Value::from("text"))]
#[case(Value::list([1, 2, 3]))]
#[case(Value::tuple([atom("ok"), Value::from(1)]))]
#[case(Value::set([atom("a"), atom("b")]))]
fn test_value_json_roundtrip(#[case] value: Value) {
    let json = serde_json::to_string(&value).unwrap();
    let restored: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value, restored);
}

/// Tests that nested tuples and sets survive a JSON round trip.
#[rstest]
fn test_value_nested_structures() {
    let value = Value::list([
        Value::tuple([atom("user"), Value::list([atom("admin")])]),
        Value::set([Value::from(1), Value::from(2)]),
    ]);

    let json = serde_json::to_string(&value).unwrap();
    let restored: Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value, restored);
}

/// Tests that maps with atom keys cannot be written as JSON objects.
#[rstest]
fn test_value_with_atom_keys_does_not_serialize_to_json_object() {
    let value = Value::map([(atom("a"), 1)]);
    assert!(serde_json::to_string(&value).is_err());
}

// =============================================================================
// Traversal Integration Tests
// =============================================================================

/// Tests that data rebuilt by a traversal serializes.
#[rstest]
fn test_updated_value_serializes() {
    let data = Value::list([Value::tuple([atom("count"), Value::from(1)])]);
    let updated = all()
        .compose(at(1))
        .map(data, |count| Value::Int(count.as_int().unwrap_or(0) + 1))
        .unwrap();

    let json = serde_json::to_string(&updated).unwrap();
    let restored: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, Value::list([Value::tuple([atom("count"), Value::from(2)])]));
}
