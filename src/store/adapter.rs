use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::store::errors::{Result, StoreError};

/// Key-value persistent store backed by one JSON file per key
///
/// This is the sole I/O boundary of the data layer. A read of an absent
/// key returns `Ok(None)` rather than an error; write failures surface as
/// [`StoreError::Io`] so callers can tell a full disk from bad data.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at the given directory, creating it if needed
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
            key: dir.display().to_string(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// Read the JSON value stored under a key, or `None` when absent
    pub fn read(&self, key: &str) -> Result<Option<Value>> {
        let path = self.path_for(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("No stored data under key '{}'", key);
                return Ok(None);
            }
            Err(source) => {
                return Err(StoreError::Io {
                    key: key.to_string(),
                    source,
                })
            }
        };

        let value = serde_json::from_str(&raw).map_err(|source| StoreError::Malformed {
            key: key.to_string(),
            source,
        })?;
        Ok(Some(value))
    }

    /// Write a JSON value under a key, replacing any previous value
    pub fn write(&self, key: &str, value: &Value) -> Result<()> {
        let json = serde_json::to_string_pretty(value).map_err(|source| StoreError::Malformed {
            key: key.to_string(),
            source,
        })?;
        fs::write(self.path_for(key), json).map_err(|source| StoreError::Io {
            key: key.to_string(),
            source,
        })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();
        assert!(store.read("rs_properties").unwrap().is_none());
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();
        let value = json!([{"id": "1", "title": "Studio"}]);
        store.write("rs_properties", &value).unwrap();
        assert_eq!(store.read("rs_properties").unwrap(), Some(value));
    }

    #[test]
    fn garbage_on_disk_is_a_malformed_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path()).unwrap();
        std::fs::write(dir.path().join("rs_events.json"), "not json{").unwrap();
        match store.read("rs_events") {
            Err(StoreError::Malformed { key, .. }) => assert_eq!(key, "rs_events"),
            other => panic!("expected malformed error, got {:?}", other.map(|_| ())),
        }
    }
}
