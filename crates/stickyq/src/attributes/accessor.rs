//! Per-item get/set of the pinned flag.

use super::value::{normalize, RawValue};
use super::PINNED_KEY;
use crate::error::Result;
use crate::model::ItemId;
use crate::store::MetaStore;
use tracing::{debug, warn};

/// Reads and writes the pinned flag against a [`MetaStore`].
///
/// Holds no state besides the store: no caching, every `get` is a fresh read.
/// Callers must verify edit authorization before calling [`set`](Self::set).
pub struct AttributeAccessor<S: MetaStore> {
    store: S,
}

impl<S: MetaStore> AttributeAccessor<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether the item is pinned.
    ///
    /// Absent, `""` and `"0"` all read as `false`.
    pub fn get(&self, id: &ItemId) -> Result<bool> {
        let raw = self.store.read_meta(id, PINNED_KEY)?;
        Ok(normalize(raw.as_ref()))
    }

    /// Write the canonical encoding of `value`.
    ///
    /// Re-setting the current value leaves the store in the same state.
    pub fn set(&self, id: &ItemId, value: bool) -> Result<()> {
        debug!(item = %id, pinned = value, "writing pinned flag");
        self.store
            .write_meta(id, PINNED_KEY, RawValue::canonical(value))
            .inspect_err(|e| warn!(item = %id, error = %e, "pinned flag write failed"))
    }
}
