//! Label Entity
//!
//! Key/value metadata attached to a deployed service.

use serde::{Deserialize, Serialize};

/// A `key=value` label.
///
/// Both `key` and `value` are non-empty. Raw strings that do not satisfy this
/// never become a `Label`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub key: String,
    pub value: String,
}

impl Label {
    /// Parse a raw `key=value` string.
    ///
    /// Splits on the first `=` only, so `a=b=c` yields key `a` and value `b=c`.
    /// Nothing is trimmed. Returns `None` when there is no `=` or either side
    /// is empty.
    pub fn parse(raw: &str) -> Option<Self> {
        let (key, value) = raw.split_once('=')?;
        if key.is_empty() || value.is_empty() {
            return None;
        }
        Some(Self {
            key: key.to_string(),
            value: value.to_string(),
        })
    }
}

/// Parse a sequence of raw label strings, silently dropping malformed entries.
pub fn parse_labels<I, S>(raw: I) -> Vec<Label>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .filter_map(|s| Label::parse(s.as_ref()))
        .collect()
}
