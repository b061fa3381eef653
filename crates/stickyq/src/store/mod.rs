//! # Storage Layer
//!
//! Items and their persistence belong to an external item store. Stickyq only
//! needs per-item attribute reads and writes, expressed by the [`MetaStore`]
//! trait so the accessor can run against any backend.
//!
//! ## Semantics
//!
//! - A read of a key that was never written returns `Ok(None)`, not an error.
//! - A write failure is reported as [`crate::error::StickyError::Write`] and
//!   must reach the caller unchanged.
//! - No locking beyond the backend's own: concurrent writes to the same item
//!   are last-write-wins.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: For testing and embedding.
//! - [`fs::JsonFileStore`]: A single JSON document on disk, used by the CLI.
//!
//! ## Storage Layout (JsonFileStore)
//!
//! ```text
//! items.json
//! {
//!   "<item uuid>": { "_cpt_is_sticky": "1", ... },
//!   ...
//! }
//! ```

use crate::attributes::RawValue;
use crate::error::Result;
use crate::model::ItemId;

pub mod fs;
pub mod memory;

/// Abstract interface for per-item attribute storage.
///
/// Methods take `&self`; implementations use interior mutability so readers
/// and writers can share one store.
pub trait MetaStore {
    /// Read the raw value stored under `key` for an item.
    /// Returns `Ok(None)` when nothing is stored.
    fn read_meta(&self, id: &ItemId, key: &str) -> Result<Option<RawValue>>;

    /// Store `value` under `key` for an item, replacing any previous value.
    fn write_meta(&self, id: &ItemId, key: &str, value: RawValue) -> Result<()>;
}

impl<S: MetaStore + ?Sized> MetaStore for &S {
    fn read_meta(&self, id: &ItemId, key: &str) -> Result<Option<RawValue>> {
        (**self).read_meta(id, key)
    }

    fn write_meta(&self, id: &ItemId, key: &str, value: RawValue) -> Result<()> {
        (**self).write_meta(id, key, value)
    }
}
