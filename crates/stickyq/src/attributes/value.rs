//! Raw attribute values and their boolean normalization.
//!
//! The store does not enforce a type for the pinned flag, so reads see whatever
//! was written: a string, a boolean, a number, or nothing at all. This module
//! owns the single rule that turns those into a `bool`.

use serde::{Deserialize, Serialize};

/// Canonical stored encoding of `true`.
pub const TRUE_ENCODING: &str = "1";

/// Canonical stored encoding of `false`.
pub const FALSE_ENCODING: &str = "0";

/// Text encodings that mean "not pinned" when present.
///
/// Absence of the value is the third falsy encoding.
pub const FALSY_TEXT_ENCODINGS: [&str; 2] = ["", FALSE_ENCODING];

/// A raw value as read from or written to the item store.
///
/// Untagged on the wire: `"1"`, `true` and `1` are all valid stored values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl RawValue {
    /// The canonical representation written for a boolean.
    pub fn canonical(value: bool) -> Self {
        let text = if value { TRUE_ENCODING } else { FALSE_ENCODING };
        RawValue::Text(text.to_string())
    }

    /// Whether this stored value means "pinned".
    ///
    /// - Text: false for `""` and `"0"`, true for anything else
    /// - Bool: the boolean itself
    /// - Int: false for `0`
    pub fn is_truthy(&self) -> bool {
        match self {
            RawValue::Bool(v) => *v,
            RawValue::Int(v) => *v != 0,
            RawValue::Text(s) => !FALSY_TEXT_ENCODINGS.contains(&s.as_str()),
        }
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Bool(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

/// Normalize a possibly-absent raw value into the pinned flag.
pub fn normalize(raw: Option<&RawValue>) -> bool {
    raw.is_some_and(RawValue::is_truthy)
}
