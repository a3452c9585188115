//! Property-based tests for list operations
//!
//! Generated values never include NaN floats, so every generated list is
//! equal to itself.

use mixed_list::{ListError, MixedList, Value};
use proptest::prelude::*;

/// Generate a single element of any scalar kind
fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        (-1.0e6f64..1.0e6).prop_map(Value::Float),
        "[a-zA-Z0-9 ]{0,8}".prop_map(Value::String),
    ]
}

/// Generate element vectors, with one level of nesting
fn items_strategy(size: std::ops::Range<usize>) -> impl Strategy<Value = Vec<Value>> {
    let element = prop_oneof![
        4 => value_strategy(),
        1 => prop::collection::vec(value_strategy(), 0..4).prop_map(Value::List),
    ];
    prop::collection::vec(element, size)
}

/// Generate a non-empty list together with a valid index into it
fn list_and_index() -> impl Strategy<Value = (Vec<Value>, usize)> {
    items_strategy(1..20).prop_flat_map(|items| {
        let len = items.len();
        (Just(items), 0..len)
    })
}

proptest! {
    #[test]
    fn test_appends_grow_size_in_order(items in items_strategy(0..30)) {
        let mut list = MixedList::new();
        for item in &items {
            list.append(item.clone());
        }
        prop_assert_eq!(list.size(), items.len());
        prop_assert_eq!(list.as_slice(), items.as_slice());
    }

    #[test]
    fn test_pop_then_insert_restores((items, index) in list_and_index()) {
        let original = MixedList::from(items);
        let mut list = original.copy();

        let popped = list.pop(index as isize).unwrap();
        prop_assert_eq!(list.size(), original.size() - 1);
        list.insert(index as isize, popped).unwrap();

        prop_assert!(list.equals(&original));
    }

    #[test]
    fn test_pop_out_of_range_leaves_list(items in items_strategy(1..20)) {
        let original = MixedList::from(items);
        let mut list = original.copy();
        let len = list.size() as isize;

        prop_assert_eq!(
            list.pop(-1),
            Err(ListError::IndexOutOfBounds { index: -1, len: original.size() })
        );
        prop_assert_eq!(
            list.pop(len),
            Err(ListError::IndexOutOfBounds { index: len, len: original.size() })
        );
        prop_assert!(list.equals(&original));
    }

    #[test]
    fn test_insert_past_end_leaves_list(items in items_strategy(0..20), extra in 1isize..5) {
        let original = MixedList::from(items);
        let mut list = original.copy();
        let index = list.size() as isize + extra;

        prop_assert!(list.insert(index, Value::Null).unwrap_err().is_out_of_bounds());
        prop_assert!(list.equals(&original));
    }

    #[test]
    fn test_reverse_twice_is_identity(items in items_strategy(0..30)) {
        let original = MixedList::from(items);
        let mut list = original.copy();
        list.reverse();
        list.reverse();
        prop_assert!(list.equals(&original));
    }

    #[test]
    fn test_reverse_mirrors_positions(items in items_strategy(1..30)) {
        let original = MixedList::from(items);
        let mut list = original.copy();
        list.reverse();
        let last = original.size() - 1;
        for i in 0..original.size() {
            prop_assert_eq!(&list[i], &original[last - i]);
        }
    }

    #[test]
    fn test_copy_equals_original(items in items_strategy(0..30)) {
        let list = MixedList::from(items);
        prop_assert!(list.equals(&list.copy()));
        prop_assert!(list.equals_ignore_case(&list.copy()));
    }

    #[test]
    fn test_different_lengths_never_equal(items in items_strategy(0..20), extra in value_strategy()) {
        let list = MixedList::from(items);
        let mut longer = list.copy();
        longer.append(extra);
        prop_assert!(!list.equals(&longer));
        prop_assert!(!list.equals_ignore_case(&longer));
        prop_assert!(!longer.equals(&list));
    }

    #[test]
    fn test_uppercased_strings_equal_ignoring_case(items in items_strategy(0..20)) {
        let list = MixedList::from(items);
        let shouted: MixedList = list
            .iter()
            .map(|v| match v {
                Value::String(s) => Value::String(s.to_uppercase()),
                other => other.clone(),
            })
            .collect();
        prop_assert!(list.equals_ignore_case(&shouted));
    }

    #[test]
    fn test_missing_value_not_found(items in items_strategy(0..8), needle in value_strategy()) {
        let list = MixedList::from(items);
        prop_assume!(!list.iter().any(|v| v == &needle));

        prop_assert_eq!(list.index_of(&needle), Err(ListError::NotFound(needle.clone())));
        prop_assert!(!list.has(&needle));
    }

    #[test]
    fn test_index_of_finds_first_occurrence((items, index) in list_and_index()) {
        let list = MixedList::from(items);
        let needle = list[index].clone();
        let found = list.index_of(&needle).unwrap();

        prop_assert!(found <= index);
        prop_assert_eq!(&list[found], &needle);
        prop_assert!(list.has(&needle));
    }

    #[test]
    fn test_clear_is_idempotent(items in items_strategy(0..20)) {
        let mut list = MixedList::from(items);
        list.clear();
        prop_assert_eq!(list.size(), 0);
        list.clear();
        prop_assert!(list.equals(&MixedList::new()));
    }
}
