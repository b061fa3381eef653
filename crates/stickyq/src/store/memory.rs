use super::MetaStore;
use crate::attributes::RawValue;
use crate::error::{Result, StickyError};
use crate::model::ItemId;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

/// In-memory attribute store.
///
/// Guarded by a `RwLock` so concurrent readers never block each other.
#[derive(Default)]
pub struct InMemoryStore {
    meta: RwLock<HashMap<ItemId, HashMap<String, RawValue>>>,
    simulate_write_error: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.store(simulate, Ordering::SeqCst);
    }

    /// Seed a raw value directly, bypassing the canonical encoding.
    ///
    /// Useful for reproducing values written by other tools.
    pub fn insert_raw(&self, id: ItemId, key: &str, value: RawValue) {
        self.meta
            .write()
            .entry(id)
            .or_default()
            .insert(key.to_string(), value);
    }

    /// Remove a stored value, leaving the key absent.
    pub fn remove(&self, id: &ItemId, key: &str) -> Option<RawValue> {
        self.meta.write().get_mut(id).and_then(|m| m.remove(key))
    }
}

impl MetaStore for InMemoryStore {
    fn read_meta(&self, id: &ItemId, key: &str) -> Result<Option<RawValue>> {
        let meta = self.meta.read();
        Ok(meta.get(id).and_then(|m| m.get(key)).cloned())
    }

    fn write_meta(&self, id: &ItemId, key: &str, value: RawValue) -> Result<()> {
        if self.simulate_write_error.load(Ordering::SeqCst) {
            return Err(StickyError::Write {
                key: key.to_string(),
                reason: "Simulated write error".to_string(),
            });
        }
        self.insert_raw(*id, key, value);
        Ok(())
    }
}
