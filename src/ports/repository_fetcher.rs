use std::path::PathBuf;

use crate::domain::{AppError, SourceIdentity};

/// Who owns the directory returned by a fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceOrigin {
    /// Served from the cache; the cache store owns the directory.
    Cache,
    /// Freshly downloaded into `work_dir`, which the caller must remove.
    Download { work_dir: PathBuf },
}

/// Local directory holding a fetched repository snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedSource {
    pub path: PathBuf,
    pub origin: SourceOrigin,
}

impl FetchedSource {
    /// Temporary directory to clean up once the caller is done, if any.
    pub fn disposable_dir(&self) -> Option<&PathBuf> {
        match &self.origin {
            SourceOrigin::Cache => None,
            SourceOrigin::Download { work_dir } => Some(work_dir),
        }
    }
}

/// Port resolving a remote source identity to a local directory.
pub trait RepositoryFetcher {
    fn fetch(&self, identity: &SourceIdentity, use_cache: bool) -> Result<FetchedSource, AppError>;
}
