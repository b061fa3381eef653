//! # Query Layer
//!
//! A [`QuerySpecification`] is the unit a caller builds per request, hands to
//! [`QueryAugmenter::augment`], and then passes to the external query executor.
//! It is never retained.
//!
//! - [`filter`]: clauses and relation trees
//! - [`sort`]: scalar or ordered sort specs
//! - [`params`]: the `pinned` / `pinnedFirst` request parameters
//! - [`augment`]: the augmenter itself

pub mod augment;
pub mod filter;
pub mod params;
pub mod sort;

pub use augment::{
    pinned_clause, pinned_first_entry, unpinned_group, QueryAugmenter, PINNED_CLAUSE_NAME,
};
pub use filter::{Compare, FilterClause, FilterNode, FilterTree, Relation};
pub use params::{parse_bool_ish, RequestParams, TriState};
pub use sort::{Direction, SortEntry, SortKey, SortSpec};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Filters and ordering for one listing request.
///
/// Executor arguments the augmenter has no opinion on (paging, search terms,
/// and so on) ride along untouched in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuerySpecification {
    #[serde(default)]
    pub filters: FilterTree,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortSpec>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl QuerySpecification {
    pub fn new(filters: FilterTree, sort: Option<SortSpec>) -> Self {
        Self {
            filters,
            sort,
            extra: Map::new(),
        }
    }

    pub fn with_filter(mut self, node: impl Into<FilterNode>) -> Self {
        self.filters.children.push(node.into());
        self
    }

    pub fn with_sort(mut self, sort: impl Into<SortSpec>) -> Self {
        self.sort = Some(sort.into());
        self
    }
}
