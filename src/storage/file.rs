use chrono::{DateTime, Utc};
use regex::Regex;
use std::fs;
use std::io;
use std::path::PathBuf;

use super::{KeyValueStore, StorageError};

const SLOT_EXTENSION: &str = "json";

/// Slots stored as `<key>.json` files inside one directory.
///
/// The directory is created on first write. Each write goes to a temp file
/// that is then renamed over the slot, so readers never see a partial value.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    pub fn slot_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        if !is_valid_key(key) {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{}.{}", key, SLOT_EXTENSION)))
    }

    /// Last write time of a slot, if it exists
    pub fn modified(&self, key: &str) -> Option<DateTime<Utc>> {
        let path = self.slot_path(key).ok()?;
        let modified = fs::metadata(path).and_then(|m| m.modified()).ok()?;
        Some(DateTime::<Utc>::from(modified))
    }
}

/// Keys are lowercase words joined by dashes, e.g. "completion-grid"
pub fn is_valid_key(key: &str) -> bool {
    let re = Regex::new(r"^[a-z][a-z0-9-]*$").unwrap();
    re.is_match(key)
}

/// Extract the key from a slot filename, ignoring temp files and strangers
fn key_from_filename(filename: &str) -> Option<String> {
    let re = Regex::new(r"^([a-z][a-z0-9-]*)\.json$").unwrap();
    let caps = re.captures(filename)?;
    Some(caps[1].to_string())
}

fn io_error(key: &str, source: io::Error) -> StorageError {
    StorageError::Io {
        key: key.to_string(),
        source,
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(key, e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key)?;
        fs::create_dir_all(&self.dir).map_err(|e| io_error(key, e))?;

        let tmp_path = path.with_extension(format!("{}.tmp", SLOT_EXTENSION));
        fs::write(&tmp_path, value).map_err(|e| io_error(key, e))?;
        fs::rename(&tmp_path, &path).map_err(|e| io_error(key, e))?;

        tracing::debug!(key, path = %path.display(), bytes = value.len(), "slot written");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool, StorageError> {
        let path = self.slot_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(io_error(key, e)),
        }
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        if !self.dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut keys: Vec<String> = fs::read_dir(&self.dir)
            .map_err(|e| io_error("*", e))?
            .filter_map(|e| e.ok())
            .filter_map(|e| key_from_filename(&e.file_name().to_string_lossy()))
            .collect();
        keys.sort();

        Ok(keys)
    }
}
