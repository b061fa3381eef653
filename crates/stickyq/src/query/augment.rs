//! # Query Augmentation
//!
//! [`QueryAugmenter::augment`] takes the caller's query and the parsed request
//! parameters and returns a new query the executor can run as-is.
//!
//! ## Filtering (`pinned`)
//!
//! - `true`: append `PINNED_KEY = "1"`.
//! - `false`: append `OR[ NOT EXISTS PINNED_KEY, PINNED_KEY = "", PINNED_KEY = "0" ]`.
//!   Storage does not enforce a type, so "not pinned" has three encodings and
//!   a single inequality would miss items that never had the key written.
//! - absent: nothing.
//!
//! Appended nodes are always conjuncts of the caller's filters. A tree with no
//! relation becomes an explicit `AND`; an `OR` tree is nested whole inside a new
//! `AND` so its disjunction is kept intact.
//!
//! ## Ordering (`pinnedFirst`)
//!
//! A synthetic key, ordering by match of `PINNED_KEY = "1"` descending, becomes
//! the primary sort key. The caller's keys follow in their original order. With
//! no caller sort, the configured default (normally `date DESC`) is used as the
//! secondary key. The synthetic key orders only; it never filters.
//!
//! ## Guarantees
//!
//! - The input is never mutated.
//! - Applying the same params twice yields no duplicate clauses and at most one
//!   synthetic sort key.
//! - No failure mode: malformed parameters were already reduced to "absent".

use super::filter::{FilterClause, FilterNode, FilterTree, Relation};
use super::params::{RequestParams, TriState};
use super::sort::{Direction, SortEntry, SortKey, SortSpec};
use super::QuerySpecification;
use crate::attributes::{FALSY_TEXT_ENCODINGS, PINNED_KEY, TRUE_ENCODING};
use crate::config::StickyConfig;
use tracing::debug;

/// Name of the clause the synthetic pinned-first sort key orders by.
pub const PINNED_CLAUSE_NAME: &str = "sticky_clause";

/// `PINNED_KEY = "1"`
pub fn pinned_clause() -> FilterClause {
    FilterClause::equals(PINNED_KEY, TRUE_ENCODING)
}

/// Disjunction matching every "not pinned" encoding, absence first.
pub fn unpinned_group() -> FilterTree {
    let mut children = vec![FilterNode::Clause(FilterClause::not_exists(PINNED_KEY))];
    children.extend(
        FALSY_TEXT_ENCODINGS
            .iter()
            .map(|encoding| FilterNode::Clause(FilterClause::equals(PINNED_KEY, *encoding))),
    );
    FilterTree::or(children)
}

/// The synthetic primary sort entry: pinned before unpinned.
pub fn pinned_first_entry() -> SortEntry {
    SortEntry::new(
        SortKey::Clause {
            name: PINNED_CLAUSE_NAME.to_string(),
            clause: pinned_clause(),
        },
        Direction::Desc,
    )
}

fn is_synthetic(entry: &SortEntry) -> bool {
    entry.key.clause_name() == Some(PINNED_CLAUSE_NAME)
}

/// Stateless query rewriter. One instance serves every content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryAugmenter {
    default_sort: SortEntry,
}

impl Default for QueryAugmenter {
    fn default() -> Self {
        Self::new(SortEntry::field("date", Direction::Desc))
    }
}

impl QueryAugmenter {
    /// `default_sort` stands in for the caller's sort when none was given.
    pub fn new(default_sort: SortEntry) -> Self {
        Self { default_sort }
    }

    pub fn from_config(config: &StickyConfig) -> Self {
        Self::new(config.default_sort())
    }

    pub fn default_sort(&self) -> &SortEntry {
        &self.default_sort
    }

    /// Return `base` extended with the filtering and ordering `params` ask for.
    pub fn augment(&self, base: &QuerySpecification, params: &RequestParams) -> QuerySpecification {
        let mut augmented = base.clone();

        if let Some(node) = pinned_filter(params.pinned) {
            augmented.filters = conjoin(augmented.filters, node);
        }

        if params.pinned_first {
            augmented.sort = Some(self.pinned_first_sort(base.sort.as_ref()));
        }

        debug!(
            pinned = ?params.pinned.as_option(),
            pinned_first = params.pinned_first,
            filters = augmented.filters.len(),
            "augmented query"
        );
        augmented
    }

    fn pinned_first_sort(&self, base: Option<&SortSpec>) -> SortSpec {
        let mut entries = vec![pinned_first_entry()];
        if let Some(spec) = base {
            entries.extend(spec.entries().iter().filter(|e| !is_synthetic(e)).cloned());
        }
        if entries.len() == 1 {
            entries.push(self.default_sort.clone());
        }
        SortSpec::Ordered(entries)
    }
}

fn pinned_filter(pinned: TriState) -> Option<FilterNode> {
    match pinned {
        TriState::True => Some(FilterNode::Clause(pinned_clause())),
        TriState::False => Some(FilterNode::Group(unpinned_group())),
        TriState::Absent => None,
    }
}

/// Add `node` as a conjunct of `tree`, unless it already is one.
fn conjoin(tree: FilterTree, node: FilterNode) -> FilterTree {
    if tree.has_conjunct(&node) {
        return tree;
    }

    match tree.relation {
        Some(Relation::Or) if tree.len() > 1 => FilterTree::and(vec![FilterNode::Group(tree), node]),
        _ => {
            let mut children = tree.children;
            children.push(node);
            FilterTree::and(children)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::RawValue;
    use crate::query::filter::Compare;
    use std::collections::HashMap;

    type Item = HashMap<&'static str, RawValue>;

    // Minimal evaluator, enough to check what the executor would match.
    fn matches(node: &FilterNode, item: &Item) -> bool {
        match node {
            FilterNode::Clause(c) => {
                let stored = item.get(c.key.as_str()).map(|v| match v {
                    RawValue::Text(s) => s.clone(),
                    RawValue::Bool(b) => if *b { "1".into() } else { "".into() },
                    RawValue::Int(i) => i.to_string(),
                });
                match c.compare {
                    Compare::Equals => stored.as_ref() == c.value.as_ref(),
                    Compare::NotEquals => stored.is_some() && stored.as_ref() != c.value.as_ref(),
                    Compare::Exists => stored.is_some(),
                    Compare::NotExists => stored.is_none(),
                }
            }
            FilterNode::Group(tree) => tree_matches(tree, item),
        }
    }

    fn tree_matches(tree: &FilterTree, item: &Item) -> bool {
        match tree.effective_relation() {
            Relation::And => tree.children.iter().all(|n| matches(n, item)),
            Relation::Or => tree.children.iter().any(|n| matches(n, item)),
        }
    }

    fn item(pinned: Option<&str>) -> Item {
        let mut item = Item::new();
        item.insert("category", RawValue::from("news"));
        if let Some(v) = pinned {
            item.insert(PINNED_KEY, RawValue::from(v));
        }
        item
    }

    fn category_news() -> FilterNode {
        FilterNode::Clause(FilterClause::equals("category", "news"))
    }

    #[test]
    fn absent_params_leave_query_unchanged() {
        let base = QuerySpecification::default()
            .with_filter(category_news())
            .with_sort(SortEntry::field("title", Direction::Asc));
        let out = QueryAugmenter::default().augment(&base, &RequestParams::default());
        assert_eq!(out, base);
    }

    #[test]
    fn pinned_true_appends_equality_clause() {
        let out = QueryAugmenter::default()
            .augment(&QuerySpecification::default(), &RequestParams::new(true, false));
        assert_eq!(
            out.filters,
            FilterTree::and(vec![FilterNode::Clause(FilterClause::equals(PINNED_KEY, "1"))])
        );
    }

    #[test]
    fn pinned_true_composes_with_existing_filters() {
        let base = QuerySpecification::default().with_filter(category_news());
        let out = QueryAugmenter::default().augment(&base, &RequestParams::new(true, false));
        assert_eq!(
            out.filters,
            FilterTree::and(vec![category_news(), FilterNode::Clause(pinned_clause())])
        );
    }

    #[test]
    fn pinned_false_builds_three_way_disjunction() {
        let out = QueryAugmenter::default()
            .augment(&QuerySpecification::default(), &RequestParams::new(false, false));

        let group = match &out.filters.children[..] {
            [FilterNode::Group(group)] => group,
            other => panic!("Expected single OR group, got {other:?}"),
        };
        assert_eq!(group.relation, Some(Relation::Or));
        assert_eq!(
            group.children,
            vec![
                FilterNode::Clause(FilterClause::not_exists(PINNED_KEY)),
                FilterNode::Clause(FilterClause::equals(PINNED_KEY, "")),
                FilterNode::Clause(FilterClause::equals(PINNED_KEY, "0")),
            ]
        );
    }

    #[test]
    fn pinned_false_matches_every_falsy_encoding() {
        let out = QueryAugmenter::default()
            .augment(&QuerySpecification::default(), &RequestParams::new(false, false));

        assert!(tree_matches(&out.filters, &item(None)));
        assert!(tree_matches(&out.filters, &item(Some(""))));
        assert!(tree_matches(&out.filters, &item(Some("0"))));
        assert!(!tree_matches(&out.filters, &item(Some("1"))));
    }

    #[test]
    fn pinned_true_matches_only_pinned() {
        let out = QueryAugmenter::default()
            .augment(&QuerySpecification::default(), &RequestParams::new(true, false));

        assert!(tree_matches(&out.filters, &item(Some("1"))));
        assert!(!tree_matches(&out.filters, &item(None)));
        assert!(!tree_matches(&out.filters, &item(Some(""))));
        assert!(!tree_matches(&out.filters, &item(Some("0"))));
    }

    #[test]
    fn or_base_is_nested_not_extended() {
        let base = QuerySpecification::new(
            FilterTree::or(vec![
                category_news(),
                FilterNode::Clause(FilterClause::equals("category", "blog")),
            ]),
            None,
        );
        let out = QueryAugmenter::default().augment(&base, &RequestParams::new(true, false));

        assert_eq!(out.filters.relation, Some(Relation::And));
        assert_eq!(
            out.filters.children,
            vec![
                FilterNode::Group(base.filters.clone()),
                FilterNode::Clause(pinned_clause())
            ]
        );

        // A blog item that is not pinned must not slip through the OR.
        let mut blog = Item::new();
        blog.insert("category", RawValue::from("blog"));
        assert!(!tree_matches(&out.filters, &blog));
    }

    #[test]
    fn explicit_and_base_is_extended_in_place() {
        let base = QuerySpecification::new(FilterTree::and(vec![category_news()]), None);
        let out = QueryAugmenter::default().augment(&base, &RequestParams::new(false, false));
        assert_eq!(out.filters.len(), 2);
        assert_eq!(out.filters.children[0], category_news());
    }

    #[test]
    fn filter_augmentation_is_idempotent() {
        let base = QuerySpecification::default().with_filter(category_news());
        let aug = QueryAugmenter::default();

        for params in [RequestParams::new(true, true), RequestParams::new(false, true)] {
            let once = aug.augment(&base, &params);
            let twice = aug.augment(&once, &params);

            assert_eq!(twice.filters, once.filters);
            let pinned_keys = twice
                .filters
                .clauses()
                .into_iter()
                .filter(|c| c.key == PINNED_KEY)
                .count();
            let expected = if params.pinned == TriState::True { 1 } else { 3 };
            assert_eq!(pinned_keys, expected);
        }
    }

    #[test]
    fn or_base_augmentation_is_idempotent() {
        let base = QuerySpecification::new(
            FilterTree::or(vec![
                category_news(),
                FilterNode::Clause(FilterClause::equals("category", "blog")),
            ]),
            None,
        );
        let aug = QueryAugmenter::default();
        let params = RequestParams::new(true, false);
        let once = aug.augment(&base, &params);
        assert_eq!(aug.augment(&once, &params), once);
    }

    #[test]
    fn base_is_not_mutated() {
        let base = QuerySpecification::default()
            .with_filter(category_news())
            .with_sort(SortEntry::field("date", Direction::Desc));
        let snapshot = base.clone();
        let _ = QueryAugmenter::default().augment(&base, &RequestParams::new(false, true));
        assert_eq!(base, snapshot);
    }

    #[test]
    fn pinned_first_keeps_single_key_as_secondary() {
        let base = QuerySpecification::default().with_sort(vec![SortEntry::field("date", Direction::Desc)]);
        let out = QueryAugmenter::default().augment(&base, &RequestParams::new(TriState::Absent, true));
        assert_eq!(
            out.sort.unwrap().entries(),
            &[pinned_first_entry(), SortEntry::field("date", Direction::Desc)]
        );
    }

    #[test]
    fn pinned_first_treats_scalar_like_single_entry_list() {
        let aug = QueryAugmenter::default();
        let params = RequestParams::new(TriState::Absent, true);
        let scalar = QuerySpecification::default().with_sort(SortEntry::field("title", Direction::Asc));
        let listed =
            QuerySpecification::default().with_sort(vec![SortEntry::field("title", Direction::Asc)]);

        assert_eq!(aug.augment(&scalar, &params).sort, aug.augment(&listed, &params).sort);
    }

    #[test]
    fn pinned_first_prepends_to_multi_key_sort() {
        let base = QuerySpecification::default().with_sort(vec![
            SortEntry::field("title", Direction::Asc),
            SortEntry::field("date", Direction::Desc),
        ]);
        let out = QueryAugmenter::default().augment(&base, &RequestParams::new(TriState::Absent, true));
        assert_eq!(
            out.sort.unwrap().entries(),
            &[
                pinned_first_entry(),
                SortEntry::field("title", Direction::Asc),
                SortEntry::field("date", Direction::Desc),
            ]
        );
    }

    #[test]
    fn pinned_first_without_sort_uses_default() {
        let out = QueryAugmenter::default()
            .augment(&QuerySpecification::default(), &RequestParams::new(TriState::Absent, true));
        assert_eq!(
            out.sort.unwrap().entries(),
            &[pinned_first_entry(), SortEntry::field("date", Direction::Desc)]
        );
    }

    #[test]
    fn pinned_first_with_empty_list_uses_default() {
        let base = QuerySpecification::default().with_sort(Vec::<SortEntry>::new());
        let aug = QueryAugmenter::new(SortEntry::field("modified", Direction::Asc));
        let out = aug.augment(&base, &RequestParams::new(TriState::Absent, true));
        assert_eq!(
            out.sort.unwrap().entries(),
            &[pinned_first_entry(), SortEntry::field("modified", Direction::Asc)]
        );
    }

    #[test]
    fn pinned_first_with_only_synthetic_base_uses_default() {
        let aug = QueryAugmenter::default();
        let params = RequestParams::new(TriState::Absent, true);
        let scalar = QuerySpecification::default().with_sort(pinned_first_entry());
        let listed = QuerySpecification::default().with_sort(vec![pinned_first_entry()]);

        for base in [scalar, listed] {
            assert_eq!(
                aug.augment(&base, &params).sort.unwrap().entries(),
                &[pinned_first_entry(), SortEntry::field("date", Direction::Desc)]
            );
        }
    }

    #[test]
    fn pinned_first_does_not_filter() {
        let base = QuerySpecification::default().with_filter(category_news());
        let out = QueryAugmenter::default().augment(&base, &RequestParams::new(TriState::Absent, true));
        assert_eq!(out.filters, base.filters);
        assert!(tree_matches(&out.filters, &item(None)));
    }

    #[test]
    fn pinned_first_is_idempotent() {
        let aug = QueryAugmenter::default();
        let params = RequestParams::new(TriState::Absent, true);
        let base = QuerySpecification::default().with_sort(SortEntry::field("date", Direction::Desc));
        let once = aug.augment(&base, &params);
        let twice = aug.augment(&once, &params);
        assert_eq!(twice.sort, once.sort);
        let synthetic = twice.sort.unwrap().entries().iter().filter(|e| is_synthetic(e)).count();
        assert_eq!(synthetic, 1);
    }

    #[test]
    fn synthetic_key_later_in_caller_sort_is_moved_to_front() {
        let base = QuerySpecification::default().with_sort(vec![
            SortEntry::field("title", Direction::Asc),
            pinned_first_entry(),
        ]);
        let out = QueryAugmenter::default().augment(&base, &RequestParams::new(TriState::Absent, true));
        assert_eq!(
            out.sort.unwrap().entries(),
            &[pinned_first_entry(), SortEntry::field("title", Direction::Asc)]
        );
    }

    #[test]
    fn caller_field_named_like_synthetic_clause_is_kept() {
        let base = QuerySpecification::default()
            .with_sort(SortEntry::field(PINNED_CLAUSE_NAME, Direction::Asc));
        let out = QueryAugmenter::default().augment(&base, &RequestParams::new(TriState::Absent, true));
        assert_eq!(
            out.sort.unwrap().entries(),
            &[pinned_first_entry(), SortEntry::field(PINNED_CLAUSE_NAME, Direction::Asc)]
        );
    }

    #[test]
    fn filter_and_sort_together() {
        let base = QuerySpecification::default().with_filter(category_news());
        let out = QueryAugmenter::default().augment(&base, &RequestParams::new(true, true));
        assert_eq!(out.filters.len(), 2);
        assert_eq!(out.sort.unwrap().primary(), Some(&pinned_first_entry()));
    }

    #[test]
    fn extra_arguments_survive() {
        let mut base = QuerySpecification::default();
        base.extra.insert("per_page".into(), 5.into());
        let out = QueryAugmenter::default().augment(&base, &RequestParams::new(true, true));
        assert_eq!(out.extra, base.extra);
    }
}
