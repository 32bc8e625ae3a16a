//! Durable string-keyed slots holding serialized progress.

pub mod file;
#[cfg(test)]
pub mod memory;

use std::io;

use thiserror::Error;

pub use file::FileStore;
#[cfg(test)]
pub use memory::MemoryStore;

/// Slot holding the serialized completion grid
pub const GRID_KEY: &str = "completion-grid";

/// Slot holding the serialized weekly reflections
pub const REFLECTIONS_KEY: &str = "reflection-notes";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("invalid slot key '{0}'")]
    InvalidKey(String),
    #[error("I/O error on slot '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },
    #[error("could not encode slot '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A set of whole-value slots. Every `set` replaces the previous value entirely.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Returns true if the slot existed
    fn remove(&mut self, key: &str) -> Result<bool, StorageError>;

    fn keys(&self) -> Result<Vec<String>, StorageError>;
}
