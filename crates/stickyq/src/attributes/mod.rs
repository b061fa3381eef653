//! # Pinned Attribute
//!
//! The pinned flag is a per-item boolean with default `false`, stored under
//! [`PINNED_KEY`]. Storage does not enforce its type, so three raw states all
//! mean "not pinned":
//!
//! | Raw value | Pinned |
//! |-----------|--------|
//! | absent    | false  |
//! | `""`      | false  |
//! | `"0"`     | false  |
//! | `"1"`     | true   |
//! | `true`    | true   |
//!
//! - **Values** ([`RawValue`], [`normalize`]): the normalization rule, shared
//!   with the query layer as constants.
//! - **Accessor** ([`AttributeAccessor`]): get/set against a store.
//! - **Schema** ([`attribute_schema`], [`COLLECTION_PARAMS`]): what a schema
//!   registration layer needs to publish the attribute and its parameters.

mod accessor;
mod spec;
mod value;

/// Stable key under which the pinned flag is stored for each item.
pub const PINNED_KEY: &str = "_cpt_is_sticky";

pub use accessor::AttributeAccessor;
pub use spec::{
    attribute_schema, collection_param, AttributeSchema, CollectionParam, SchemaContext,
    SchemaType, COLLECTION_PARAMS, PINNED_ATTRIBUTE, PINNED_FIELD, PINNED_FIRST_PARAM,
    PINNED_PARAM,
};
pub use value::{normalize, RawValue, FALSE_ENCODING, FALSY_TEXT_ENCODINGS, TRUE_ENCODING};
