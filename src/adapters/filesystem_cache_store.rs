//! On-disk cache of extracted repository archives.
//!
//! Layout under the cache root, per source identity:
//! - `{key}.json`: metadata (owner, repo, branch, etag, cachedAt, commitSha)
//! - `{key}/`: copy of the extracted archive

use std::fs;
use std::path::{Path, PathBuf};

use crate::adapters::local_filesystem::copy_tree;
use crate::domain::cache::MetadataFile;
use crate::domain::{AppError, CacheEntry, CacheMetadata, SourceIdentity};
use crate::ports::{CacheStore, Clock, SystemClock};

/// Name of the cache directory under the platform cache home.
pub const CACHE_DIR_NAME: &str = "teleprompter";

const METADATA_EXTENSION: &str = "json";

/// Cache store rooted at a fixed directory.
#[derive(Debug, Clone)]
pub struct FilesystemCacheStore<C: Clock = SystemClock> {
    root: PathBuf,
    clock: C,
}

impl FilesystemCacheStore<SystemClock> {
    pub fn new(root: PathBuf) -> Self {
        Self { root, clock: SystemClock }
    }
}

impl<C: Clock> FilesystemCacheStore<C> {
    pub fn with_clock(root: PathBuf, clock: C) -> Self {
        Self { root, clock }
    }

    fn metadata_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.{}", key, METADATA_EXTENSION))
    }

    fn extracted_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    fn read_metadata(path: &Path) -> Result<MetadataFile, AppError> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| AppError::Cache(format!("unreadable metadata {}: {}", path.display(), e)))
    }

    fn remove_path(path: &Path) {
        let result = if path.is_dir() { fs::remove_dir_all(path) } else { fs::remove_file(path) };
        if let Err(err) = result {
            if path.exists() {
                tracing::debug!("failed to remove {}: {}", path.display(), err);
            }
        }
    }
}

/// Resolve the cache root from the environment and platform conventions.
///
/// Precedence: explicit override, `$XDG_CACHE_HOME/teleprompter`, then the
/// platform cache directory.
pub fn resolve_cache_root(override_dir: Option<&Path>) -> Result<PathBuf, AppError> {
    if let Some(dir) = override_dir {
        return Ok(dir.to_path_buf());
    }

    if let Some(xdg) = std::env::var_os("XDG_CACHE_HOME").filter(|value| !value.is_empty()) {
        return Ok(PathBuf::from(xdg).join(CACHE_DIR_NAME));
    }

    let base = dirs::cache_dir()
        .ok_or_else(|| AppError::Cache("could not determine a cache directory".to_string()))?;
    Ok(base.join(CACHE_DIR_NAME))
}

impl<C: Clock> CacheStore for FilesystemCacheStore<C> {
    fn root(&self) -> &Path {
        &self.root
    }

    fn lookup(&self, identity: &SourceIdentity) -> Option<CacheEntry> {
        let key = identity.cache_key();
        let metadata_path = self.metadata_path(&key);
        let extracted_path = self.extracted_path(&key);

        if !metadata_path.exists() {
            return None;
        }

        if !extracted_path.is_dir() {
            tracing::debug!("removing orphaned cache metadata for {}", key);
            Self::remove_path(&metadata_path);
            return None;
        }

        let file = match Self::read_metadata(&metadata_path) {
            Ok(file) => file,
            Err(err) => {
                tracing::debug!("ignoring cache entry {}: {}", key, err);
                return None;
            }
        };

        let Some(metadata) = file.into_metadata(Some(identity)) else {
            tracing::debug!("purging corrupt cache entry {}", key);
            self.purge_entry(&key);
            return None;
        };

        Some(CacheEntry { key, metadata, extracted_path })
    }

    fn save(
        &self,
        identity: &SourceIdentity,
        extracted_path: &Path,
        etag: &str,
        commit_sha: Option<&str>,
    ) -> Result<CacheEntry, AppError> {
        let key = identity.cache_key();
        let cached_path = self.extracted_path(&key);
        let metadata_path = self.metadata_path(&key);

        fs::create_dir_all(&self.root)
            .map_err(|e| AppError::Cache(format!("create {}: {}", self.root.display(), e)))?;

        self.purge_entry(&key);
        copy_tree(extracted_path, &cached_path)
            .map_err(|e| AppError::Cache(format!("copy into {}: {}", cached_path.display(), e)))?;

        let metadata = CacheMetadata {
            owner: identity.owner.clone(),
            repo: identity.repo.clone(),
            branch: identity.branch.clone(),
            etag: etag.to_string(),
            cached_at: self.clock.now(),
            commit_sha: commit_sha.map(str::to_string),
        };
        let json = serde_json::to_string_pretty(&MetadataFile::from(&metadata))
            .map_err(|e| AppError::Cache(format!("serialize metadata: {}", e)))?;
        fs::write(&metadata_path, json)
            .map_err(|e| AppError::Cache(format!("write {}: {}", metadata_path.display(), e)))?;

        Ok(CacheEntry { key, metadata, extracted_path: cached_path })
    }

    fn purge_entry(&self, key: &str) {
        Self::remove_path(&self.metadata_path(key));
        Self::remove_path(&self.extracted_path(key));
    }

    fn purge_all(&self) -> usize {
        let Ok(entries) = fs::read_dir(&self.root) else {
            return 0;
        };

        let mut count = 0;
        for entry in entries.flatten() {
            Self::remove_path(&entry.path());
            count += 1;
        }
        count
    }

    fn list_all(&self) -> Vec<CacheEntry> {
        let Ok(entries) = fs::read_dir(&self.root) else {
            return Vec::new();
        };

        let mut cached = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(METADATA_EXTENSION) {
                continue;
            }
            let Some(key) = path.file_stem().and_then(|stem| stem.to_str()).map(str::to_string)
            else {
                continue;
            };

            let extracted_path = self.extracted_path(&key);
            if !extracted_path.is_dir() {
                continue;
            }
            let Some(metadata) =
                Self::read_metadata(&path).ok().and_then(|file| file.into_metadata(None))
            else {
                continue;
            };

            cached.push(CacheEntry { key, metadata, extracted_path });
        }

        cached.sort_by(|a, b| a.key.cmp(&b.key));
        cached
    }
}
