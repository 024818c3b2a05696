//! A small JSON key-value store backed by a single file.
//!
//! The file holds one JSON object; each key maps to an opaque document.
//! A missing file reads as an empty store.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tempfile::NamedTempFile;

/// A file-backed map of string keys to JSON documents.
pub struct KvStore {
    path: PathBuf,
}

impl KvStore {
    /// Open the store at `path`. Nothing is read until a key is accessed.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the document under `key`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, String> {
        let mut entries = self.read_all()?;
        match entries.remove(key) {
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| format!("cannot decode '{key}' in {}: {e}", self.path.display())),
            None => Ok(None),
        }
    }

    /// Encode `value` and store it under `key`, replacing any previous document.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), String> {
        let mut entries = self.read_all()?;
        let doc = serde_json::to_value(value)
            .map_err(|e| format!("cannot encode '{key}': {e}"))?;
        entries.insert(key.to_string(), doc);
        self.write_all(&entries)
    }

    /// Delete `key`. Returns whether it was present.
    pub fn remove(&self, key: &str) -> Result<bool, String> {
        let mut entries = self.read_all()?;
        if entries.remove(key).is_none() {
            return Ok(false);
        }
        self.write_all(&entries)?;
        Ok(true)
    }

    fn read_all(&self) -> Result<Map<String, Value>, String> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let text = fs::read_to_string(&self.path)
            .map_err(|e| format!("cannot read {}: {e}", self.path.display()))?;
        if text.trim().is_empty() {
            return Ok(Map::new());
        }
        serde_json::from_str(&text)
            .map_err(|e| format!("cannot parse {}: {e}", self.path.display()))
    }

    fn write_all(&self, entries: &Map<String, Value>) -> Result<(), String> {
        let mut text = serde_json::to_string_pretty(entries)
            .map_err(|e| format!("cannot encode store: {e}"))?;
        text.push('\n');

        // The old file stays in place until the rename.
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let write_err = |e: std::io::Error| format!("cannot write {}: {e}", self.path.display());
        let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
        tmp.write_all(text.as_bytes()).map_err(write_err)?;
        tmp.persist(&self.path).map_err(|e| write_err(e.error))?;
        tracing::debug!(path = %self.path.display(), keys = entries.len(), "store written");
        Ok(())
    }
}
