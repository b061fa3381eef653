//! Sort specifications.
//!
//! Callers may send a single `(key, direction)` or an ordered list of them. The
//! two forms are equivalent: [`SortSpec::entries`] always yields a slice where
//! the first entry is the primary key.

use super::filter::FilterClause;
use serde::{Deserialize, Serialize};
use std::slice;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    #[serde(alias = "asc")]
    Asc,
    #[default]
    #[serde(alias = "desc")]
    Desc,
}

/// What a sort entry orders by.
///
/// `Field` is an item attribute such as `date` or `title`. `Clause` orders by
/// whether an item matches a named clause, which is how the pinned-first key
/// works. A field that happens to share a clause's name is still a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SortKey {
    Field(String),
    Clause { name: String, clause: FilterClause },
}

impl SortKey {
    pub fn field(name: impl Into<String>) -> Self {
        SortKey::Field(name.into())
    }

    pub fn clause_name(&self) -> Option<&str> {
        match self {
            SortKey::Clause { name, .. } => Some(name),
            SortKey::Field(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortEntry {
    pub key: SortKey,
    #[serde(default)]
    pub direction: Direction,
}

impl SortEntry {
    pub fn new(key: SortKey, direction: Direction) -> Self {
        Self { key, direction }
    }

    pub fn field(name: impl Into<String>, direction: Direction) -> Self {
        Self::new(SortKey::field(name), direction)
    }
}

/// Ordering requested by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SortSpec {
    Ordered(Vec<SortEntry>),
    Scalar(SortEntry),
}

impl SortSpec {
    /// Entries in precedence order.
    pub fn entries(&self) -> &[SortEntry] {
        match self {
            SortSpec::Ordered(entries) => entries,
            SortSpec::Scalar(entry) => slice::from_ref(entry),
        }
    }

    pub fn primary(&self) -> Option<&SortEntry> {
        self.entries().first()
    }

    /// Whether both specs order items the same way, regardless of form.
    pub fn is_equivalent(&self, other: &SortSpec) -> bool {
        self.entries() == other.entries()
    }
}

impl From<SortEntry> for SortSpec {
    fn from(entry: SortEntry) -> Self {
        SortSpec::Scalar(entry)
    }
}

impl From<Vec<SortEntry>> for SortSpec {
    fn from(entries: Vec<SortEntry>) -> Self {
        SortSpec::Ordered(entries)
    }
}
