use chrono::{DateTime, Utc};

use crate::storage::{FileStore, KeyValueStore};

/// Data directory used when neither `--dir` nor `SOI_DIR` is given
pub const DEFAULT_DATA_DIR: &str = ".soi";

/// Slots present on disk with their last write time, sorted by key
pub fn saved_slots(store: &FileStore) -> Vec<(String, DateTime<Utc>)> {
    let keys = match store.keys() {
        Ok(keys) => keys,
        Err(e) => {
            tracing::warn!(error = %e, "could not list saved slots");
            return Vec::new();
        }
    };

    keys.into_iter()
        .filter_map(|key| {
            let modified = store.modified(&key)?;
            Some((key, modified))
        })
        .collect()
}

/// Most recent write to any saved slot
pub fn last_saved(slots: &[(String, DateTime<Utc>)]) -> Option<DateTime<Utc>> {
    slots.iter().map(|(_, modified)| *modified).max()
}
