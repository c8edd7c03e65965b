//! JSON file storage implementation.
//!
//! The whole key space lives in one JSON object, `storage.json`, inside the
//! data directory. The file is read once on open and rewritten in full on
//! every write.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use super::{KeyValueStore, Result};

const FILE_NAME: &str = "storage.json";

/// File-based key-value storage.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open the store in `root`, creating the directory if needed.
    ///
    /// A missing file is an empty store. A file that cannot be parsed is
    /// logged and treated as empty; it is replaced on the next write.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        fs::create_dir_all(root)?;
        let path = root.join(FILE_NAME);

        let entries = match fs::read(&path) {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "discarding unreadable storage file");
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        debug!(path = %path.display(), keys = entries.len(), "opened storage");
        Ok(Self { path, entries })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.entries)?;
        // Write a sibling then rename so a crash never leaves half a file.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json.as_bytes())?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }

    fn set_many(&mut self, entries: Vec<(&str, String)>) -> Result<()> {
        for (key, value) in entries {
            self.entries.insert(key.to_string(), value);
        }
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("nested")).unwrap();
        assert_eq!(store.get("completedLessons").unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = JsonFileStore::open(dir.path()).unwrap();
            store.set("completedLessons", "[1,2]".into()).unwrap();
            store.set("currentLesson", "3".into()).unwrap();
        }
        let store = JsonFileStore::open(dir.path()).unwrap();
        assert_eq!(store.get("completedLessons").unwrap().as_deref(), Some("[1,2]"));
        assert_eq!(store.get("currentLesson").unwrap().as_deref(), Some("3"));
    }

    #[test]
    fn test_set_many_writes_all_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::open(dir.path()).unwrap();
        store
            .set_many(vec![("completedLessons", "[1]".into()), ("currentLesson", "2".into())])
            .unwrap();

        let reopened = JsonFileStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get("completedLessons").unwrap().as_deref(), Some("[1]"));
        assert_eq!(reopened.get("currentLesson").unwrap().as_deref(), Some("2"));
        assert!(!dir.path().join("storage.json.tmp").exists());
    }

    #[test]
    fn test_remove_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::open(dir.path()).unwrap();
        store.set("a", "1".into()).unwrap();
        store.remove("a").unwrap();
        store.remove("never-set").unwrap();

        let store = JsonFileStore::open(dir.path()).unwrap();
        assert_eq!(store.get("a").unwrap(), None);
    }

    #[test]
    fn test_corrupt_file_is_treated_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(FILE_NAME), "{not json").unwrap();

        let mut store = JsonFileStore::open(dir.path()).unwrap();
        assert_eq!(store.get("currentLesson").unwrap(), None);

        store.set("currentLesson", "1".into()).unwrap();
        let reopened = JsonFileStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get("currentLesson").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn test_non_utf8_file_is_treated_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(FILE_NAME), [0xff, 0xfe, 0x00]).unwrap();

        let mut store = JsonFileStore::open(dir.path()).unwrap();
        assert_eq!(store.get("completedLessons").unwrap(), None);

        store.set("completedLessons", "[1]".into()).unwrap();
        let reopened = JsonFileStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get("completedLessons").unwrap().as_deref(), Some("[1]"));
    }
}
