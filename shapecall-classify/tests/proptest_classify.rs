//! Property-based tests: uniform containers classify to their element kind.

use proptest::prelude::*;
use shapecall_classify::*;
use shapecall_types::{Mapping, Value};

fn scalar_of(kind: ElementKind) -> BoxedStrategy<Value> {
    match kind {
        ElementKind::Integer => any::<i64>().prop_map(Value::Integer).boxed(),
        ElementKind::Boolean => any::<bool>().prop_map(Value::Boolean).boxed(),
        ElementKind::FloatingPoint => any::<f64>().prop_map(Value::Double).boxed(),
        ElementKind::String => ".{0,8}".prop_map(Value::String).boxed(),
    }
}

fn any_kind() -> impl Strategy<Value = ElementKind> {
    prop::sample::select(ElementKind::CHECK_ORDER.to_vec())
}

fn any_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::Integer),
        any::<bool>().prop_map(Value::Boolean),
        any::<f64>().prop_map(Value::Double),
        ".{0,8}".prop_map(Value::String),
        Just(Value::Nil),
    ]
}

proptest! {
    #[test]
    fn uniform_lists_classify_to_their_kind(
        (kind, items) in any_kind().prop_flat_map(|k| (Just(k), prop::collection::vec(scalar_of(k), 1..16)))
    ) {
        let shape = classify(&Value::List(items)).expect("uniform list classifies");
        prop_assert_eq!(shape, ShapeDescriptor::new(ContainerKind::Sequence, kind));
    }

    #[test]
    fn uniform_dicts_classify_to_their_kind(
        (kind, entries) in any_kind().prop_flat_map(|k| {
            (Just(k), prop::collection::btree_map("[a-z]{1,6}", scalar_of(k), 1..16))
        })
    ) {
        let map: Mapping = entries;
        let shape = classify(&Value::Dict(map)).expect("uniform dict classifies");
        prop_assert_eq!(shape, ShapeDescriptor::new(ContainerKind::Mapping, kind));
    }

    #[test]
    fn boolean_lists_never_classify_as_integer(items in prop::collection::vec(any::<bool>(), 1..16)) {
        let value = Value::list(items);
        let shape = classify(&value).expect("bool list classifies");
        prop_assert_eq!(shape.element, ElementKind::Boolean);
    }

    #[test]
    fn scalars_are_never_containers(value in any_scalar()) {
        prop_assert!(!is_sequence(&value));
        prop_assert!(!is_mapping(&value));
        let is_value_type_error = matches!(
            classify(&value),
            Err(ClassifyError::UnsupportedValueType { .. })
        );
        prop_assert!(is_value_type_error);
    }

    #[test]
    fn any_classified_list_is_uniform(items in prop::collection::vec(any_scalar(), 0..8)) {
        if let Ok(shape) = classify(&Value::List(items.clone())) {
            prop_assert!(items.iter().all(|item| shape.element.matches(item)));
        } else {
            let first_kind_for_all = ElementKind::CHECK_ORDER
                .into_iter()
                .find(|k| !items.is_empty() && items.iter().all(|item| k.matches(item)));
            prop_assert!(first_kind_for_all.is_none());
        }
    }
}
