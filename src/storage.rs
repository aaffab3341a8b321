//! Opaque snapshot storage, the persistence collaborator.
//!
//! The core never inspects blob structure; it only needs named slots that
//! survive restarts. `current` holds the latest save and `last` the one
//! before it (see [`crate::constants`]).

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::Context as _;

/// Key-value store for opaque snapshot blobs.
pub trait SnapshotStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn put(&mut self, key: &str, blob: &str) -> anyhow::Result<()>;
}

/// In-memory store for tests and headless embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemoryStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn put(&mut self, key: &str, blob: &str) -> anyhow::Result<()> {
        self.slots.insert(key.to_string(), blob.to_string());
        Ok(())
    }
}

/// File-backed store, one `<key>.json` file per slot.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Store rooted at the platform data directory.
    pub fn new() -> anyhow::Result<Self> {
        let root = dirs::data_dir()
            .context("no platform data directory")?
            .join("metromap");
        Self::at(root)
    }

    /// Store rooted at an explicit directory, created if missing.
    pub fn at(root: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)
            .with_context(|| format!("creating snapshot directory {}", root.display()))?;
        Ok(Self { root })
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl SnapshotStore for FileStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let path = self.slot_path(key);
        match fs::read_to_string(&path) {
            Ok(blob) => Ok(Some(blob)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).with_context(|| format!("reading {}", path.display())),
        }
    }

    fn put(&mut self, key: &str, blob: &str) -> anyhow::Result<()> {
        let path = self.slot_path(key);
        fs::write(&path, blob).with_context(|| format!("writing {}", path.display()))?;
        tracing::debug!(slot = key, path = %path.display(), "snapshot saved");
        Ok(())
    }
}
