//! Cache store port.
//!
//! The cache is best-effort: lookups answer `None` instead of failing and
//! purges never fail. Only `save` reports errors, which callers log and ignore.

use std::path::Path;

use crate::domain::{AppError, CacheEntry, SourceIdentity};

pub trait CacheStore {
    /// Root directory holding every entry.
    fn root(&self) -> &Path;

    /// Find a valid entry, healing orphaned or corrupt metadata on the way.
    fn lookup(&self, identity: &SourceIdentity) -> Option<CacheEntry>;

    /// Store a copy of `extracted_path` and its metadata, replacing any prior entry.
    fn save(
        &self,
        identity: &SourceIdentity,
        extracted_path: &Path,
        etag: &str,
        commit_sha: Option<&str>,
    ) -> Result<CacheEntry, AppError>;

    /// Remove the metadata and extracted directory of `key`.
    fn purge_entry(&self, key: &str);

    /// Remove everything under the root; returns the number of top-level entries processed.
    fn purge_all(&self) -> usize;

    /// Every entry with well-formed metadata and an existing extracted directory.
    fn list_all(&self) -> Vec<CacheEntry>;
}
