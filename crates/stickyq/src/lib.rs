//! # Stickyq Architecture
//!
//! Stickyq adds a "pinned" (sticky) flag to items served by a content listing API
//! and rewrites listing queries so pinned items can be filtered on, or surfaced
//! first, without losing the caller's own filters and ordering.
//!
//! It is a **library first**: the `stickyq` binary is a thin client over it, and
//! nothing in here knows about HTTP, terminals or process exits.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Registry (registry.rs)                                     │
//! │  - Configured content types → one augmenter + accessor      │
//! │  - Edit-time write path (apply_edit)                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Query Layer (query/)                                       │
//! │  - QuerySpecification: filter tree + sort spec              │
//! │  - RequestParams: lenient parsing of pinned / pinnedFirst   │
//! │  - QueryAugmenter: pure, never fails, never mutates input   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Attribute Layer (attributes/)                              │
//! │  - PINNED_KEY, raw value normalization, schema              │
//! │  - AttributeAccessor: get / set against a MetaStore         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - MetaStore trait                                          │
//! │  - InMemoryStore (testing), JsonFileStore (CLI)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Three Falsy Encodings
//!
//! The flag is not type-enforced in storage. An item is "not pinned" when the
//! value is missing, stored as `""`, or stored as `"0"`. Reads normalize all
//! three to `false`, and `pinned=false` queries match all three through a
//! disjunction (see [`query::augment`]).
//!
//! ## Module Overview
//!
//! - [`attributes`]: Pinned key, raw values, accessor, schema
//! - [`query`]: Filter trees, sort specs, request params, the augmenter
//! - [`store`]: Storage abstraction and implementations
//! - [`registry`]: Content-type fan-out and the edit-time write path
//! - [`config`]: Configuration management
//! - [`model`]: Item identifiers
//! - [`error`]: Error types

pub mod attributes;
pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod registry;
pub mod store;

#[cfg(test)]
pub(crate) mod test_utils;
