use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::{TimeZone, Utc};

use crate::domain::{AppError, CacheEntry, CacheMetadata, SourceIdentity};
use crate::ports::{CacheStore, ConfigFilesystem};

use super::memory_filesystem::MemoryFilesystem;

/// Cache store keeping metadata in memory and extractions in a `MemoryFilesystem`.
#[derive(Clone)]
pub struct MemoryCacheStore {
    fs: MemoryFilesystem,
    root: PathBuf,
    entries: Arc<Mutex<BTreeMap<String, CacheEntry>>>,
    fail_saves: bool,
    pub saves: Arc<Mutex<Vec<(String, String)>>>,
}

impl MemoryCacheStore {
    pub fn new(fs: &MemoryFilesystem, root: impl Into<PathBuf>) -> Self {
        Self {
            fs: fs.clone(),
            root: root.into(),
            entries: Arc::new(Mutex::new(BTreeMap::new())),
            fail_saves: false,
            saves: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn failing_saves(mut self) -> Self {
        self.fail_saves = true;
        self
    }

    /// Seed an entry whose extraction holds `files`.
    pub fn seed(&self, identity: &SourceIdentity, etag: &str, files: &[(&str, &str)]) -> PathBuf {
        let path = self.root.join(identity.cache_key());
        self.fs.add_dir(&path);
        for (relative, content) in files {
            self.fs.add_file(path.join(relative), content);
        }
        self.insert(identity, etag, path.clone());
        path
    }

    pub fn entry(&self, key: &str) -> Option<CacheEntry> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn insert(&self, identity: &SourceIdentity, etag: &str, path: PathBuf) -> CacheEntry {
        let entry = CacheEntry {
            key: identity.cache_key(),
            metadata: CacheMetadata {
                owner: identity.owner.clone(),
                repo: identity.repo.clone(),
                branch: identity.branch.clone(),
                etag: etag.to_string(),
                cached_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
                commit_sha: None,
            },
            extracted_path: path,
        };
        self.entries.lock().unwrap().insert(entry.key.clone(), entry.clone());
        entry
    }
}

impl CacheStore for MemoryCacheStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn lookup(&self, identity: &SourceIdentity) -> Option<CacheEntry> {
        let entry = self.entry(&identity.cache_key())?;
        self.fs.is_dir(&entry.extracted_path).then_some(entry)
    }

    fn save(
        &self,
        identity: &SourceIdentity,
        extracted_path: &Path,
        etag: &str,
        _commit_sha: Option<&str>,
    ) -> Result<CacheEntry, AppError> {
        self.saves.lock().unwrap().push((identity.cache_key(), etag.to_string()));
        if self.fail_saves {
            return Err(AppError::Cache("disk full".to_string()));
        }
        let path = self.root.join(identity.cache_key());
        self.fs.remove_dir_all(&path)?;
        self.fs.copy_dir_all(extracted_path, &path)?;
        Ok(self.insert(identity, etag, path))
    }

    fn purge_entry(&self, key: &str) {
        if let Some(entry) = self.entries.lock().unwrap().remove(key) {
            let _ = self.fs.remove_dir_all(&entry.extracted_path);
        }
    }

    fn purge_all(&self) -> usize {
        let keys: Vec<String> = self.entries.lock().unwrap().keys().cloned().collect();
        for key in &keys {
            self.purge_entry(key);
        }
        keys.len()
    }

    fn list_all(&self) -> Vec<CacheEntry> {
        self.entries.lock().unwrap().values().cloned().collect()
    }
}
