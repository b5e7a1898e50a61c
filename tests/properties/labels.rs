//! Property tests for `key=value` label parsing.

use proptest::prelude::*;

use exoframe::{parse_labels, Label};

fn raw_label() -> impl Strategy<Value = String> {
    // Mostly label-shaped strings, with enough '=' noise to hit the edge cases.
    prop_oneof![
        proptest::string::string_regex("[a-z=]{0,8}").unwrap(),
        proptest::string::string_regex("[A-Za-z0-9_.-]{0,6}=[A-Za-z0-9=_.-]{0,6}").unwrap(),
        any::<String>(),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: survivors always have a non-empty key and value.
    #[test]
    fn property_surviving_labels_are_complete(
        raw in proptest::collection::vec(raw_label(), 0..12)
    ) {
        let labels = parse_labels(&raw);

        prop_assert!(labels.len() <= raw.len());
        for label in &labels {
            prop_assert!(!label.key.is_empty());
            prop_assert!(!label.value.is_empty());
            prop_assert!(!label.key.contains('='), "key must stop at the first '=': {:?}", label);
        }
    }

    /// PROPERTY: parsing splits on the first '=' and keeps the rest verbatim.
    #[test]
    fn property_value_keeps_everything_after_first_equals(
        key in "[A-Za-z0-9_.-]{1,8}",
        value in "[A-Za-z0-9=_. -]{1,12}",
    ) {
        let raw = format!("{}={}", key, value);
        prop_assert_eq!(
            Label::parse(&raw),
            Some(Label { key: key.clone(), value: value.clone() })
        );
    }

    /// PROPERTY: order of the well-formed inputs is preserved.
    #[test]
    fn property_parse_preserves_order(
        keys in proptest::collection::vec("[a-z]{1,4}", 1..6)
    ) {
        let raw: Vec<String> = keys.iter().enumerate().map(|(i, k)| format!("{}={}", k, i)).collect();
        let parsed: Vec<String> = parse_labels(&raw).into_iter().map(|l| l.key).collect();
        prop_assert_eq!(parsed, keys);
    }
}
