//! Filter clauses and filter trees.
//!
//! A [`FilterTree`] is what the query executor evaluates: an ordered list of
//! clauses and nested trees joined by one [`Relation`]. A tree without an
//! explicit relation joins its children with `AND`.

use serde::{Deserialize, Serialize};

/// How the children of a [`FilterTree`] are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Relation {
    #[default]
    And,
    Or,
}

/// Comparison applied by a [`FilterClause`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Compare {
    #[default]
    #[serde(rename = "=")]
    Equals,
    #[serde(rename = "!=")]
    NotEquals,
    #[serde(rename = "EXISTS")]
    Exists,
    #[serde(rename = "NOT EXISTS")]
    NotExists,
}

/// A predicate over one item attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterClause {
    pub key: String,
    /// Unused by `EXISTS` / `NOT EXISTS`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default)]
    pub compare: Compare,
}

impl FilterClause {
    pub fn new(key: impl Into<String>, value: Option<String>, compare: Compare) -> Self {
        Self {
            key: key.into(),
            value,
            compare,
        }
    }

    pub fn equals(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(key, Some(value.into()), Compare::Equals)
    }

    pub fn not_equals(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(key, Some(value.into()), Compare::NotEquals)
    }

    pub fn exists(key: impl Into<String>) -> Self {
        Self::new(key, None, Compare::Exists)
    }

    pub fn not_exists(key: impl Into<String>) -> Self {
        Self::new(key, None, Compare::NotExists)
    }
}

/// A node in a filter tree: a single clause or a nested group.
///
/// Untagged on the wire; an object with a `key` is a clause, an object with
/// `children` is a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterNode {
    Clause(FilterClause),
    Group(FilterTree),
}

impl From<FilterClause> for FilterNode {
    fn from(clause: FilterClause) -> Self {
        FilterNode::Clause(clause)
    }
}

impl From<FilterTree> for FilterNode {
    fn from(tree: FilterTree) -> Self {
        FilterNode::Group(tree)
    }
}

/// Ordered children joined by a relation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterTree {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<Relation>,
    #[serde(default)]
    pub children: Vec<FilterNode>,
}

impl FilterTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_relation(relation: Relation, children: Vec<FilterNode>) -> Self {
        Self {
            relation: Some(relation),
            children,
        }
    }

    pub fn and(children: Vec<FilterNode>) -> Self {
        Self::with_relation(Relation::And, children)
    }

    pub fn or(children: Vec<FilterNode>) -> Self {
        Self::with_relation(Relation::Or, children)
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// The relation in force, `AND` when none is set.
    pub fn effective_relation(&self) -> Relation {
        self.relation.unwrap_or_default()
    }

    /// Whether `node` is already one of this tree's top-level conjuncts.
    ///
    /// Only meaningful for `AND` trees; an `OR` tree has no conjuncts.
    pub fn has_conjunct(&self, node: &FilterNode) -> bool {
        self.effective_relation() == Relation::And && self.children.contains(node)
    }

    /// All clauses in the tree, depth-first.
    pub fn clauses(&self) -> Vec<&FilterClause> {
        let mut out = Vec::new();
        collect_clauses(self, &mut out);
        out
    }
}

fn collect_clauses<'a>(tree: &'a FilterTree, out: &mut Vec<&'a FilterClause>) {
    for child in &tree.children {
        match child {
            FilterNode::Clause(clause) => out.push(clause),
            FilterNode::Group(group) => collect_clauses(group, out),
        }
    }
}
