use super::MetaStore;
use crate::attributes::RawValue;
use crate::error::{Result, StickyError};
use crate::model::ItemId;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

type MetaIndex = BTreeMap<ItemId, BTreeMap<String, RawValue>>;

/// Attribute store backed by one JSON document.
///
/// Every read goes to disk so the result always reflects the file's current
/// content. Writes are serialized within the process and land atomically
/// (write to a temp file, then rename).
///
/// A write reloads and rewrites the whole index. Nothing locks the file across
/// processes, so two processes writing at the same time can lose one of the
/// writes even when they touch different items. Share a single store instance
/// when concurrent writers matter.
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<MetaIndex> {
        if !self.path.exists() {
            return Ok(MetaIndex::new());
        }
        let content = fs::read_to_string(&self.path).map_err(StickyError::Io)?;
        if content.trim().is_empty() {
            return Ok(MetaIndex::new());
        }
        let index: MetaIndex =
            serde_json::from_str(&content).map_err(StickyError::Serialization)?;
        Ok(index)
    }

    fn save(&self, index: &MetaIndex) -> std::io::Result<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }

        let content = serde_json::to_string_pretty(index)?;
        let tmp_file = dir.join(format!(".items-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content)?;
        fs::rename(&tmp_file, &self.path).inspect_err(|_| {
            let _ = fs::remove_file(&tmp_file);
        })
    }
}

impl MetaStore for JsonFileStore {
    fn read_meta(&self, id: &ItemId, key: &str) -> Result<Option<RawValue>> {
        let index = self.load()?;
        Ok(index.get(id).and_then(|m| m.get(key)).cloned())
    }

    fn write_meta(&self, id: &ItemId, key: &str, value: RawValue) -> Result<()> {
        let _guard = self.write_lock.lock();
        let mut index = self.load()?;
        index
            .entry(*id)
            .or_default()
            .insert(key.to_string(), value);

        self.save(&index).map_err(|e| StickyError::Write {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }
}
