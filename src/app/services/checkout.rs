//! Remote sources resolved to a local directory for the length of one command.

use std::path::Path;

use tracing::debug;

use crate::domain::{AppError, RepoSlug};
use crate::ports::{ConfigFilesystem, FetchedSource, RepositoryFetcher};

/// A fetched repository snapshot and the identifier it came from.
#[derive(Debug, Clone)]
pub struct RemoteCheckout {
    pub slug: RepoSlug,
    pub fetched: FetchedSource,
}

impl RemoteCheckout {
    /// Parse `repo` and fetch `branch` of it.
    pub fn open(
        fetcher: &dyn RepositoryFetcher,
        repo: &str,
        branch: &str,
        use_cache: bool,
    ) -> Result<Self, AppError> {
        let slug = RepoSlug::parse(repo)?;
        let fetched = fetcher.fetch(&slug.on_branch(branch), use_cache)?;
        Ok(Self { slug, fetched })
    }

    pub fn path(&self) -> &Path {
        &self.fetched.path
    }

    /// Remove the download work dir, if this checkout owns one.
    ///
    /// Cache-served directories are left alone.
    pub fn release(&self, fs: &dyn ConfigFilesystem) {
        if let Some(work_dir) = self.fetched.disposable_dir() {
            if let Err(err) = fs.remove_dir_all(work_dir) {
                debug!(%err, path = %work_dir.display(), "could not remove work dir");
            }
        }
    }
}
