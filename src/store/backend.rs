//! Key/value media the store writes through.
//!
//! Values are the serialized text of a collection, the same shape a
//! browser's local storage keeps. `MemoryBackend` lives for the process;
//! `FileBackend` mirrors its map into a single JSON file on every write.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::Result;

pub trait StorageBackend {
    /// Raw value stored under `key`, if any.
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: String) -> Result<()>;
    /// Drop every key.
    fn clear(&mut self) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct MemoryBackend {
    items: BTreeMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: String) -> Result<()> {
        self.items.insert(key.to_string(), value);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.items.clear();
        Ok(())
    }
}

/// A JSON object on disk mapping storage keys to their stored text.
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl FileBackend {
    /// Open the store file at `path`.
    ///
    /// A missing file is an empty store. A file that does not parse is moved
    /// aside to `<path>.corrupt` and the store starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let items = match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str::<BTreeMap<String, String>>(&text) {
                Ok(items) => items,
                Err(e) => {
                    let aside = corrupt_path(&path);
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "store file is unreadable, moving it aside"
                    );
                    fs::rename(&path, &aside)?;
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        tracing::debug!(path = %path.display(), keys = items.len(), "opened store file");
        Ok(Self { path, items })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Write next to the target and rename so a crash never leaves half a file.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(&self.items)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn corrupt_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".corrupt");
    PathBuf::from(name)
}

impl StorageBackend for FileBackend {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: String) -> Result<()> {
        self.items.insert(key.to_string(), value);
        self.flush()
    }

    fn clear(&mut self) -> Result<()> {
        self.items.clear();
        self.flush()
    }
}
