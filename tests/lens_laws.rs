//! Property-based tests for traversal laws.
//!
//! Traversal Laws:
//!
//! 1. **Identity Law**: Mapping the identity function yields the original.
//!    ```text
//!    traversal.map(data, |x| x) == Ok(data)
//!    ```
//!
//! 2. **Associativity Law**: Grouping of sequential composition is irrelevant.
//!    ```text
//!    seq(seq(a, b), c).get_and_map(data, f) == seq(a, seq(b, c)).get_and_map(data, f)
//!    ```
//!
//! 3. **Invocation Law**: One result per visit, in visit order.
//!
//! 4. **Threading Law**: `both` applies its second traversal to the data
//!    rebuilt by its first.
//!    ```text
//!    both(a, b).map(data, f) == b.map(a.map(data, f)?, f)
//!    ```

#![forbid(unsafe_code)]

use lenskit::prelude::*;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn leaf_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Nil),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        prop::sample::select(vec!["a", "b", "c"]).prop_map(atom),
        "[a-z]{0,6}".prop_map(Value::Str),
    ]
}

fn value_strategy() -> impl Strategy<Value = Value> {
    leaf_strategy().prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::List),
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Tuple),
            prop::collection::btree_map(
                prop::sample::select(vec!["a", "b", "c", "d"]).prop_map(atom),
                inner,
                0..4
            )
            .prop_map(Value::Map),
        ]
    })
}

fn map_strategy() -> impl Strategy<Value = Value> {
    prop::collection::btree_map(
        prop::sample::select(vec!["a", "b", "c", "d"]).prop_map(atom),
        value_strategy(),
        0..4,
    )
    .prop_map(Value::Map)
}

fn int_list_strategy() -> impl Strategy<Value = Value> {
    prop::collection::vec(any::<i64>(), 0..12).prop_map(Value::list)
}

fn erase<T>(traversal: T) -> Lens<Value>
where
    T: Traversal<Value> + Send + Sync + 'static,
{
    traversal.boxed()
}

fn lens_strategy() -> impl Strategy<Value = Lens<Value>> {
    let names = || prop::sample::select(vec!["a", "b", "c", "d"]);
    prop_oneof![
        Just(erase(root())),
        Just(erase(empty())),
        Just(erase(all())),
        Just(erase(all().filter(is_even))),
        Just(erase(all().reject(is_even))),
        names().prop_map(|name| erase(key_optional(atom(name)))),
        names().prop_map(|name| erase(key(atom(name)))),
        (0usize..3).prop_map(|index| erase(at(index))),
    ]
}

fn bump(value: Value) -> Value {
    match value {
        Value::Int(number) => Value::Int(number.wrapping_add(2)),
        other => other,
    }
}

fn is_even(value: &Value) -> bool {
    value.as_int().is_some_and(|number| number % 2 == 0)
}

// =============================================================================
// Identity Law
// =============================================================================

proptest! {
    /// Identity Law: mapping the identity through root returns the data.
    #[test]
    fn prop_root_identity_law(data in value_strategy()) {
        prop_assert_eq!(root().map(data.clone(), |x| x), Ok(data));
    }

    /// Identity Law for all over lists.
    #[test]
    fn prop_all_identity_law(elements in prop::collection::vec(value_strategy(), 0..8)) {
        let data = Value::List(elements);
        prop_assert_eq!(all().map(data.clone(), |x| x), Ok(data));
    }

    /// Identity Law for an optional key, whether or not the key is present.
    #[test]
    fn prop_key_optional_identity_law(data in map_strategy()) {
        let lens = key_optional(atom("a"));
        prop_assert_eq!(lens.map(data.clone(), |x| x), Ok(data));
    }

    /// Identity Law for collecting map entries back into a map.
    #[test]
    fn prop_into_map_identity_law(data in map_strategy()) {
        let lens = all().into_container(Value::empty_map());
        prop_assert_eq!(lens.map(data.clone(), |x| x), Ok(data));
    }
}

// =============================================================================
// Associativity Law
// =============================================================================

proptest! {
    /// Associativity Law: grouping of seq does not change results or data.
    #[test]
    fn prop_seq_associativity_law(
        data in value_strategy(),
        first in lens_strategy(),
        second in lens_strategy(),
        third in lens_strategy()
    ) {
        let left = seq(seq(first.clone(), second.clone()), third.clone());
        let right = seq(first, seq(second, third));

        let function = |focus: Value| (focus.clone(), bump(focus));
        prop_assert_eq!(
            left.get_and_map(data.clone(), function),
            right.get_and_map(data, function)
        );
    }

    /// compose is the same as seq.
    #[test]
    fn prop_method_and_free_seq_agree_law(
        data in value_strategy(),
        first in lens_strategy(),
        second in lens_strategy()
    ) {
        prop_assert_eq!(
            first.clone().compose(second.clone()).to_list(data.clone()),
            seq(first, second).to_list(data)
        );
    }

    /// root is a left and right unit of seq.
    #[test]
    fn prop_root_is_seq_unit_law(data in value_strategy()) {
        let lens = key_optional(atom("b"));
        let expected = lens.get_and_map(data.clone(), |focus| (focus.clone(), bump(focus)));
        prop_assert_eq!(
            seq(root(), lens.clone()).get_and_map(data.clone(), |focus| (focus.clone(), bump(focus))),
            expected.clone()
        );
        prop_assert_eq!(
            seq(lens, root()).get_and_map(data, |focus| (focus.clone(), bump(focus))),
            expected
        );
    }
}

// =============================================================================
// Invocation Law
// =============================================================================

proptest! {
    /// Invocation Law: one result per call, in call order.
    #[test]
    fn prop_results_match_invocations_law(data in int_list_strategy()) {
        let mut invocations = Vec::new();
        let (results, _) = all()
            .get_and_map(data.clone(), |focus| {
                invocations.push(focus.clone());
                (focus.clone(), bump(focus))
            })
            .unwrap();
        prop_assert_eq!(&results, &invocations);
        prop_assert_eq!(results.len(), data.length().unwrap());
    }

    /// filter and reject split the foci between them.
    #[test]
    fn prop_filter_reject_partition_law(data in int_list_strategy()) {
        let kept = all().filter(is_even).to_list(data.clone()).unwrap();
        let dropped = all().reject(is_even).to_list(data.clone()).unwrap();

        prop_assert!(kept.iter().all(is_even));
        prop_assert!(!dropped.iter().any(is_even));
        prop_assert_eq!(kept.len() + dropped.len(), data.length().unwrap());
    }

    /// Updating through filter then reject is the same as updating through all.
    #[test]
    fn prop_filter_then_reject_equals_all_law(data in int_list_strategy()) {
        // bump preserves parity, so the two passes touch disjoint foci.
        let first = all().filter(is_even).map(data.clone(), bump).unwrap();
        let second = all().reject(is_even).map(first, bump);
        prop_assert_eq!(second, all().map(data, bump));
    }

    /// multiple concatenates the foci of its traversals.
    #[test]
    fn prop_multiple_concatenates_law(data in map_strategy()) {
        let lens: Lens<Value> = keys([atom("a"), atom("b")]);
        let mut expected = key(atom("a")).to_list(data.clone()).unwrap();
        expected.extend(key(atom("b")).to_list(data.clone()).unwrap());
        prop_assert_eq!(lens.to_list(data), Ok(expected));
    }
}

// =============================================================================
// Threading Law
// =============================================================================

proptest! {
    /// Threading Law: both runs its second traversal on the data rebuilt by the first.
    #[test]
    fn prop_both_threading_law(elements in prop::collection::vec(any::<i64>(), 1..12)) {
        let data = Value::list(elements);
        let combined = both(at(0), all()).map(data.clone(), bump);
        let threaded = at(0)
            .map(data, bump)
            .and_then(|intermediate| all().map(intermediate, bump));
        prop_assert_eq!(combined, threaded);
    }

    /// Writing through a gap grows the list by one, clamping the position.
    #[test]
    fn prop_gap_inserts_one_element_law(
        data in int_list_strategy(),
        position in 0usize..16,
        item in any::<i64>()
    ) {
        let length = data.length().unwrap();
        let updated = before(position).map(data, |_| Value::Int(item)).unwrap();
        prop_assert_eq!(updated.length().unwrap(), length + 1);
        prop_assert_eq!(updated.fetch_by_index(position.min(length)), Ok(Value::Int(item)));
    }
}
