//! Key-value record store.
//!
//! Every feature area keeps one JSON-serialized list under its own string
//! key. There is no atomicity across keys and no schema versioning; a
//! crash between read and write of the same key loses the update.

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Storage keys, one per feature area
pub mod keys {
    pub const TRANSACTIONS: &str = "transactions";
    pub const CATEGORIES: &str = "categories";
    pub const INCOME: &str = "income";
    pub const SUBSCRIPTIONS: &str = "subscriptions";
    pub const BUDGETS: &str = "budgets";
    pub const CLASSIFICATIONS: &str = "classifications";
    pub const GOALS: &str = "goals";
    pub const RECURRING: &str = "recurring";
    pub const PROFILES: &str = "profiles";
    pub const REPORTS: &str = "reports";
}

/// Minimal key-value capability: string keys, JSON string values
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Data directory: `$PAISA_HOME` when set, else `~/.paisa`
pub fn paisa_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("PAISA_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".paisa"))
}

/// File-backed store: one `<key>.json` file per key under a data dir
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
        Ok(Self { dir })
    }

    /// Open the store under the default data directory
    pub fn open_default() -> Result<Self> {
        Self::new(paisa_home()?.join("data"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KvStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let raw =
            fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
        Ok(Some(raw))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        fs::write(&path, value).with_context(|| format!("write {}", path.display()))
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(&path).with_context(|| format!("remove {}", path.display()))?;
        }
        Ok(())
    }
}

/// In-memory store for tests
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}

/// Read a stored list; a missing key or unparseable value reads as empty
pub fn read_list<T: DeserializeOwned>(store: &dyn KvStore, key: &str) -> Vec<T> {
    match store.get(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                eprintln!("paisa-store: ignoring corrupt data under '{key}': {e}");
                Vec::new()
            }
        },
        Ok(None) => Vec::new(),
        Err(e) => {
            eprintln!("paisa-store: read of '{key}' failed: {e}");
            Vec::new()
        }
    }
}

/// Serialize and write a whole list under its key
pub fn write_list<T: Serialize>(store: &dyn KvStore, key: &str, items: &[T]) -> Result<()> {
    let json = serde_json::to_string_pretty(items).context("serialize records")?;
    store.set(key, &json)
}
