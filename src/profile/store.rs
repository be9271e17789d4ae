//! Profile persistence — `KvStorage` backends and the `ProfileStore`.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::RwLock;

use crate::error::StorageError;

use super::model::BirthProfile;

/// Storage key for the persisted profile blob.
pub const PROFILE_KEY: &str = "user-birth-info";

/// Backend-agnostic key-value storage.
///
/// Call sites never touch the storage medium directly; this is the one seam
/// that gets swapped for an in-memory double in tests.
#[async_trait]
pub trait KvStorage: Send + Sync {
    /// Get the raw value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, overwriting any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value stored under `key`. Removing a missing key is fine.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Erase all persisted state (logout semantics).
    async fn clear(&self) -> Result<(), StorageError>;
}

/// File-backed storage: one JSON file per key under a data directory.
pub struct FileStorage {
    base_path: PathBuf,
}

impl FileStorage {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{key}.json"))
    }
}

#[async_trait]
impl KvStorage for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path).await?))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.base_path).await?;
        fs::write(self.path_for(key), value).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(&path).await?;
        }
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        if !self.base_path.exists() {
            return Ok(());
        }
        let mut entries = fs::read_dir(&self.base_path).await?;
        while let Some(entry) = entries.next_entry().await? {
            if entry.file_type().await?.is_file() {
                fs::remove_file(entry.path()).await?;
            }
        }
        Ok(())
    }
}

/// In-memory storage — the test double.
#[derive(Default)]
pub struct MemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KvStorage for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        self.entries.write().await.clear();
        Ok(())
    }
}

/// Durable persistence of exactly one `BirthProfile`, addressed by the fixed
/// key `user-birth-info`.
///
/// No operation fails outward: a missing or unparseable payload reads as the
/// empty profile, and writes are best-effort (failures are logged at warn).
/// The record is small and idempotently reconstructible from the next merge,
/// so no crash-consistency guarantees are made.
pub struct ProfileStore {
    storage: Arc<dyn KvStorage>,
}

impl ProfileStore {
    pub fn new(storage: Arc<dyn KvStorage>) -> Self {
        Self { storage }
    }

    /// The currently persisted partial-or-complete profile, or the empty
    /// profile if none exists or the payload fails to parse.
    pub async fn read(&self) -> BirthProfile {
        let raw = match self.storage.get(PROFILE_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return BirthProfile::default(),
            Err(e) => {
                tracing::warn!("Failed to read profile, treating as empty: {}", e);
                return BirthProfile::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(profile) => profile,
            Err(e) => {
                tracing::warn!("Persisted profile failed to parse, treating as empty: {}", e);
                BirthProfile::default()
            }
        }
    }

    /// Shallow-merge `patch` over the persisted profile and write the result
    /// back (full overwrite of the record).
    pub async fn merge(&self, patch: BirthProfile) {
        let mut current = self.read().await;
        current.merge(patch);

        let raw = match serde_json::to_string(&current) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Failed to serialize profile: {}", e);
                return;
            }
        };
        if let Err(e) = self.storage.set(PROFILE_KEY, &raw).await {
            tracing::warn!("Failed to persist profile: {}", e);
        }
    }

    /// True iff all five required fields are present and non-empty.
    pub fn is_complete(profile: &BirthProfile) -> bool {
        profile.is_complete()
    }

    /// Unconditionally erase all persisted state (logout).
    pub async fn clear(&self) {
        if let Err(e) = self.storage.clear().await {
            tracing::warn!("Failed to clear storage: {}", e);
        }
    }
}
