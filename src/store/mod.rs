//! Key-value persistence for the little bits of state actions keep
//!
//! Two things live here: decaying-odds chance counters and episode caches.
//! Both are read-then-written without locking; one voice pipeline runs one
//! command at a time.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::path::PathBuf;

/// Error type for store access
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid store key: {0:?}")]
    InvalidKey(String),
}

/// String values addressed by `/`-separated keys.
pub trait KeyValueStore: Send + Sync {
    /// Value for `key`, or `None` if it was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Create or overwrite `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
