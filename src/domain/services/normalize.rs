//! Value normalization for repeatable CLI options.
//!
//! An option like `--ports` can arrive missing, once, or many times (and
//! config files may give a string or a list). Everything downstream wants a
//! plain ordered list.

use serde::Deserialize;

/// Raw shape of a repeatable option before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawValues {
    #[default]
    Absent,
    Single(String),
    Many(Vec<Option<String>>),
}

impl From<Option<String>> for RawValues {
    fn from(value: Option<String>) -> Self {
        value.map_or(RawValues::Absent, RawValues::Single)
    }
}

impl From<String> for RawValues {
    fn from(value: String) -> Self {
        RawValues::Single(value)
    }
}

impl From<&str> for RawValues {
    fn from(value: &str) -> Self {
        RawValues::Single(value.to_string())
    }
}

impl From<Vec<Option<String>>> for RawValues {
    fn from(values: Vec<Option<String>>) -> Self {
        RawValues::Many(values)
    }
}

impl From<Vec<String>> for RawValues {
    fn from(values: Vec<String>) -> Self {
        RawValues::Many(values.into_iter().map(Some).collect())
    }
}

impl From<&[String]> for RawValues {
    fn from(values: &[String]) -> Self {
        RawValues::Many(values.iter().cloned().map(Some).collect())
    }
}

/// Flatten raw option values into a dense list, keeping order.
pub fn normalize(input: impl Into<RawValues>) -> Vec<String> {
    match input.into() {
        RawValues::Absent => Vec::new(),
        RawValues::Single(value) => vec![value],
        RawValues::Many(values) => values.into_iter().flatten().collect(),
    }
}

/// Split a free-text answer like `"80:80, 443:443"` into its entries.
///
/// Returns `None` when nothing usable was typed, which callers treat as
/// "keep the current value".
pub fn split_comma_list(text: &str) -> Option<Vec<String>> {
    let items: Vec<String> = text
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}
