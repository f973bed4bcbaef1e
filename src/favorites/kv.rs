//! String-keyed storage backends.

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use fs2::FileExt;
use parking_lot::Mutex;

use super::StoreError;

/// Minimal get/set store. A missing key is `Ok(None)`, not an error.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError>;
}

/// In-memory store. Clones share the same map.
#[derive(Clone, Default)]
pub struct MemoryKeyValueStore {
    entries: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    pub fn with_entry(key: &str, value: impl Into<String>) -> Self {
        let store = Self::new();
        store.entries.lock().insert(key.to_string(), value.into());
        store
    }

    /// Synchronous read, for inspection in tests and diagnostics.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.peek(key))
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.lock().insert(key.to_string(), value);
        Ok(())
    }
}

/// All keys kept in one JSON object on disk.
///
/// Writes hold an exclusive lock on a sibling `.lock` file and replace the data
/// file atomically (write-to-temp + rename). A data file that no longer parses
/// is moved to `<path>.corrupt` by the next write. File work runs on the
/// blocking pool.
///
/// ```json
/// {
///   "country-favorites": "{\"CAN\":{\"countryId\":\"CAN\",\"note\":\"\"}}"
/// }
/// ```
#[derive(Clone)]
pub struct FileKeyValueStore {
    path: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn run<T, F>(&self, op: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&Path) -> Result<T, StoreError> + Send + 'static,
    {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || op(&path))
            .await
            .map_err(|e| StoreError::Task(e.to_string()))?
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let key = key.to_string();
        self.run(move |path| Ok(read_entries(path)?.remove(&key)))
            .await
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let key = key.to_string();
        self.run(move |path| {
            let _lock = lock_exclusive(path)?;
            let mut entries = match read_entries(path) {
                Err(StoreError::Json(e)) => {
                    tracing::warn!(error = %e, "Storage file is corrupt, starting over");
                    quarantine(path)?;
                    BTreeMap::new()
                }
                other => other?,
            };
            entries.insert(key, value);
            write_entries(path, &entries)
        })
        .await
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError + '_ {
    move |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn read_entries(path: &Path) -> Result<BTreeMap<String, String>, StoreError> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let content = fs::read_to_string(path).map_err(io_error(path))?;
    if content.trim().is_empty() {
        return Ok(BTreeMap::new());
    }
    Ok(serde_json::from_str(&content)?)
}

/// Moves an unreadable data file to `<path>.corrupt` so later writes can succeed.
fn quarantine(path: &Path) -> Result<(), StoreError> {
    let mut target = path.as_os_str().to_owned();
    target.push(".corrupt");
    let target = PathBuf::from(target);
    fs::rename(path, &target).map_err(io_error(path))?;
    tracing::warn!(moved_to = %target.display(), "Corrupt storage file set aside");
    Ok(())
}

fn write_entries(path: &Path, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(entries)?;
    let tmp = path.with_extension(format!("{}.tmp", uuid::Uuid::new_v4().simple()));

    fs::write(&tmp, json).map_err(io_error(&tmp))?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(io_error(path)(e));
    }

    tracing::debug!(path = %path.display(), keys = entries.len(), "Storage written");
    Ok(())
}

/// Unlocks on drop.
struct LockGuard(File);

impl Drop for LockGuard {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.0);
    }
}

fn lock_exclusive(path: &Path) -> Result<LockGuard, StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error(parent))?;
    }

    let lock_path = path.with_extension("lock");
    let file = OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .open(&lock_path)
        .map_err(io_error(&lock_path))?;

    file.lock_exclusive().map_err(|source| StoreError::Lock {
        path: lock_path.clone(),
        source,
    })?;

    Ok(LockGuard(file))
}
