use hako_check::{Category, Check, Value};
use proptest::prelude::*;

fn scalar_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::Int),
        any::<f64>().prop_map(Value::Float),
        "[a-z]{0,8}".prop_map(Value::Str),
        proptest::collection::vec(any::<u8>(), 0..16).prop_map(Value::Bytes),
        any::<bool>().prop_map(Value::Bool),
        Just(Value::Null),
    ]
}

fn category_pool() -> Vec<Category> {
    vec![
        Category::Int,
        Category::Float,
        Category::Str,
        Category::Bytes,
        Category::Bool,
        Category::Null,
    ]
}

fn category_subset() -> impl Strategy<Value = Vec<Category>> {
    let pool = category_pool();
    let len = pool.len();
    proptest::sample::subsequence(pool, 0..=len)
}

proptest! {
    #[test]
    fn allow_is_set_membership(value in scalar_value(), set in category_subset()) {
        let outcome = Check::new().allow(set.clone()).validate("v", &value);
        let expected_ok = set.is_empty() || set.contains(&value.category());
        prop_assert_eq!(outcome.is_ok(), expected_ok);
    }

    #[test]
    fn deny_is_set_exclusion(value in scalar_value(), set in category_subset()) {
        let outcome = Check::new().deny(set.clone()).validate("v", &value);
        let expected_ok = set.is_empty() || !set.contains(&value.category());
        prop_assert_eq!(outcome.is_ok(), expected_ok);
    }

    #[test]
    fn element_allow_quantifies_over_all_elements(
        items in proptest::collection::vec(scalar_value(), 0..12),
        set in category_subset(),
    ) {
        let expected_ok =
            set.is_empty() || items.iter().all(|el| set.contains(&el.category()));
        let value = Value::Seq(items);
        let outcome = Check::new().element_allow(set).validate("v", &value);
        prop_assert_eq!(outcome.is_ok(), expected_ok);
    }

    #[test]
    fn empty_iterable_satisfies_element_checks(set in category_subset()) {
        let value = Value::Seq(Vec::new());
        let outcome = Check::new()
            .element_allow(set.clone())
            .element_deny(set)
            .validate("v", &value);
        prop_assert!(outcome.is_ok());
    }

    #[test]
    fn size_tracks_the_predicate(
        items in proptest::collection::vec(scalar_value(), 0..12),
        wanted in 0usize..12,
    ) {
        let actual = items.len();
        let value = Value::Seq(items);
        let outcome = Check::new().size(move |n| n == wanted).validate("v", &value);
        prop_assert_eq!(outcome.is_ok(), actual == wanted);
    }

    #[test]
    fn validation_is_idempotent(value in scalar_value(), set in category_subset()) {
        let check = Check::new().allow(set);
        let first = check.validate("v", &value);
        let second = check.validate("v", &value);
        prop_assert_eq!(first, second);
    }
}
