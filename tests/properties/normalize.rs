//! Property tests for option normalization and comma-separated answers.

use proptest::prelude::*;

use exoframe::{normalize, split_comma_list, RawValues};

fn raw_values() -> impl Strategy<Value = RawValues> {
    prop_oneof![
        Just(RawValues::Absent),
        any::<String>().prop_map(RawValues::Single),
        proptest::collection::vec(proptest::option::of(any::<String>()), 0..8)
            .prop_map(RawValues::Many),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: normalizing an already-normalized list changes nothing.
    #[test]
    fn property_normalize_is_idempotent(raw in raw_values()) {
        let once = normalize(raw);
        let twice = normalize(once.clone());
        prop_assert_eq!(twice, once);
    }

    /// PROPERTY: a list normalizes to its present entries, in order.
    #[test]
    fn property_normalize_drops_only_missing_entries(
        values in proptest::collection::vec(proptest::option::of("[a-z0-9:]{0,6}"), 0..8)
    ) {
        let expected: Vec<String> = values.iter().flatten().cloned().collect();
        prop_assert_eq!(normalize(values), expected);
    }

    /// PROPERTY: split entries are trimmed and never empty.
    #[test]
    fn property_split_entries_are_trimmed(text in "[a-z0-9:=, ]{0,24}") {
        match split_comma_list(&text) {
            Some(items) => {
                prop_assert!(!items.is_empty());
                for item in &items {
                    prop_assert!(!item.is_empty());
                    prop_assert_eq!(item.trim(), item.as_str());
                    prop_assert!(!item.contains(','));
                }
            }
            None => prop_assert!(text.split(',').all(|s| s.trim().is_empty())),
        }
    }
}
