//! Request parameters driving the augmenter.
//!
//! Parsing is lenient on purpose: a value that is not recognizably boolean is
//! treated as if the parameter were not sent. Listings never fail because of a
//! bad `pinned` or `pinnedFirst` value.

use crate::attributes::{collection_param, PINNED_FIRST_PARAM, PINNED_PARAM};

/// A boolean that remembers whether it was provided at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TriState {
    True,
    False,
    #[default]
    Absent,
}

impl TriState {
    pub fn as_option(self) -> Option<bool> {
        match self {
            TriState::True => Some(true),
            TriState::False => Some(false),
            TriState::Absent => None,
        }
    }

    pub fn is_absent(self) -> bool {
        self == TriState::Absent
    }
}

impl From<Option<bool>> for TriState {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => TriState::True,
            Some(false) => TriState::False,
            None => TriState::Absent,
        }
    }
}

impl From<bool> for TriState {
    fn from(value: bool) -> Self {
        Some(value).into()
    }
}

/// Parse a boolean-ish string.
///
/// - `"1"`, `"true"`, `"on"`, `"yes"` → `Some(true)`
/// - `"0"`, `"false"`, `"off"`, `"no"`, `""` → `Some(false)`
/// - anything else → `None`
///
/// Case-insensitive, surrounding whitespace ignored.
pub fn parse_bool_ish(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" | "" => Some(false),
        _ => None,
    }
}

/// The two listing parameters, parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestParams {
    pub pinned: TriState,
    pub pinned_first: bool,
}

impl RequestParams {
    pub fn new(pinned: impl Into<TriState>, pinned_first: bool) -> Self {
        Self {
            pinned: pinned.into(),
            pinned_first,
        }
    }

    /// Parse from raw parameter values.
    ///
    /// `pinned_first` is on only for a recognizably true value.
    pub fn parse(pinned: Option<&str>, pinned_first: Option<&str>) -> Self {
        Self {
            pinned: pinned.and_then(parse_bool_ish).into(),
            pinned_first: pinned_first.and_then(parse_bool_ish).unwrap_or(false),
        }
    }

    /// Parse from query-string pairs, ignoring unrelated keys.
    ///
    /// Accepts the canonical names and their aliases (`sticky`,
    /// `sticky_first`). When both a name and its alias are present the
    /// canonical name wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut pinned: Option<(bool, String)> = None;
        let mut pinned_first: Option<(bool, String)> = None;

        for (key, value) in pairs {
            let key = key.as_ref();
            let Some(param) = collection_param(key) else {
                continue;
            };
            let canonical = param.name == key;
            let slot = match param.name {
                PINNED_PARAM => &mut pinned,
                PINNED_FIRST_PARAM => &mut pinned_first,
                _ => continue,
            };
            let keep_existing = matches!(slot, Some((true, _))) && !canonical;
            if !keep_existing {
                *slot = Some((canonical, value.as_ref().to_string()));
            }
        }

        Self::parse(
            pinned.as_ref().map(|(_, v)| v.as_str()),
            pinned_first.as_ref().map(|(_, v)| v.as_str()),
        )
    }

    /// Whether these params leave a query unchanged.
    pub fn is_noop(&self) -> bool {
        self.pinned.is_absent() && !self.pinned_first
    }
}
