//! Attribute and collection-parameter schema.
//!
//! Stickyq does not register anything with an API itself. It publishes what a
//! schema-registration layer needs to declare: the stored key, the field name
//! exposed to API consumers, its type and default, and the two listing
//! parameters that drive [`crate::query::QueryAugmenter`].

use super::PINNED_KEY;
use serde::Serialize;

/// Name of the field exposed to API consumers for the pinned flag.
pub const PINNED_FIELD: &str = "sticky";

/// Collection parameter restricting results to pinned (`true`) or unpinned (`false`) items.
pub const PINNED_PARAM: &str = "pinned";

/// Collection parameter ordering pinned items first.
pub const PINNED_FIRST_PARAM: &str = "pinnedFirst";

/// Contexts in which the field is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaContext {
    View,
    Edit,
}

/// Declared value type of a field or parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    Boolean,
}

/// Schema of the pinned attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeSchema {
    /// Key under which the value is stored per item
    pub meta_key: &'static str,
    /// Field name in API responses
    pub field: &'static str,
    #[serde(rename = "type")]
    pub kind: SchemaType,
    pub description: &'static str,
    pub default: bool,
    /// One value per item, not a list
    pub single: bool,
    pub context: &'static [SchemaContext],
}

/// Schema of one collection (listing) parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionParam {
    pub name: &'static str,
    #[serde(skip)]
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    #[serde(rename = "type")]
    pub kind: SchemaType,
    /// `None` means "absent", distinct from an explicit `false`
    pub default: Option<bool>,
}

impl CollectionParam {
    const fn boolean(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            aliases: &[],
            description,
            kind: SchemaType::Boolean,
            default: None,
        }
    }

    const fn aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    const fn default_value(mut self, value: bool) -> Self {
        self.default = Some(value);
        self
    }

    /// Whether `key` names this parameter, by name or alias.
    pub fn accepts(&self, key: &str) -> bool {
        self.name == key || self.aliases.contains(&key)
    }
}

pub const PINNED_ATTRIBUTE: AttributeSchema = AttributeSchema {
    meta_key: PINNED_KEY,
    field: PINNED_FIELD,
    kind: SchemaType::Boolean,
    description: "Pin this item to the top of listings",
    default: false,
    single: true,
    context: &[SchemaContext::View, SchemaContext::Edit],
};

/// Listing parameters understood by the augmenter.
pub const COLLECTION_PARAMS: &[CollectionParam] = &[
    CollectionParam::boolean(
        PINNED_PARAM,
        "Limit results to pinned items (true) or exclude them (false)",
    )
    .aliases(&["sticky"]),
    CollectionParam::boolean(PINNED_FIRST_PARAM, "Order pinned items before the rest")
        .aliases(&["sticky_first"])
        .default_value(false),
];

/// The pinned attribute's schema.
pub fn attribute_schema() -> &'static AttributeSchema {
    &PINNED_ATTRIBUTE
}

/// Look up a collection parameter by name or alias.
pub fn collection_param(key: &str) -> Option<&'static CollectionParam> {
    COLLECTION_PARAMS.iter().find(|param| param.accepts(key))
}
