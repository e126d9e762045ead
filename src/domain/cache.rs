//! Cache entry models and the on-disk metadata format.

use std::path::PathBuf;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::source::SourceIdentity;

/// Freshness marker recorded when the server did not send an ETag.
pub const UNKNOWN_ETAG: &str = "unknown";

/// Metadata describing one cached archive extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheMetadata {
    pub owner: String,
    pub repo: String,
    pub branch: String,
    pub etag: String,
    pub cached_at: DateTime<Utc>,
    pub commit_sha: Option<String>,
}

/// A cached extraction together with its metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    pub key: String,
    pub metadata: CacheMetadata,
    pub extracted_path: PathBuf,
}

/// JSON shape of `{key}.json`. Every field is optional on read so that
/// incomplete files can be recognised and purged instead of failing to parse.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cached_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_sha: Option<String>,
}

impl From<&CacheMetadata> for MetadataFile {
    fn from(metadata: &CacheMetadata) -> Self {
        Self {
            owner: Some(metadata.owner.clone()),
            repo: Some(metadata.repo.clone()),
            branch: Some(metadata.branch.clone()),
            etag: Some(metadata.etag.clone()),
            cached_at: Some(metadata.cached_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
            commit_sha: metadata.commit_sha.clone(),
        }
    }
}

impl MetadataFile {
    /// Freshness marker and timestamp, if both are present and usable.
    pub fn freshness(&self) -> Option<(String, DateTime<Utc>)> {
        let etag = self.etag.as_deref().filter(|etag| !etag.is_empty())?;
        let cached_at = self.cached_at.as_deref()?;
        let cached_at = DateTime::parse_from_rfc3339(cached_at).ok()?.with_timezone(&Utc);
        Some((etag.to_string(), cached_at))
    }

    /// Full metadata, filling a missing identity from `fallback`.
    pub fn into_metadata(self, fallback: Option<&SourceIdentity>) -> Option<CacheMetadata> {
        let (etag, cached_at) = self.freshness()?;
        let owner = self.owner.or_else(|| fallback.map(|id| id.owner.clone()))?;
        let repo = self.repo.or_else(|| fallback.map(|id| id.repo.clone()))?;
        let branch = self.branch.or_else(|| fallback.map(|id| id.branch.clone()))?;
        Some(CacheMetadata { owner, repo, branch, etag, cached_at, commit_sha: self.commit_sha })
    }
}
