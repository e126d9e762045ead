//! Archive fetcher with ETag revalidation against the local cache.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, info, warn};
use url::Url;

use crate::domain::{AppError, CacheEntry, Section, SourceIdentity, UNKNOWN_ETAG, t};
use crate::ports::{
    ArchiveExtractor, ArchiveTransport, CacheStore, ConfigFilesystem, Console, FetchedSource,
    RepositoryFetcher, SourceOrigin, TransportError,
};

/// Prefix of the temporary directory holding each download.
pub const WORK_DIR_PREFIX: &str = "teleprompter-";

const ARCHIVE_FILE: &str = "repo.tar.gz";
const EXTRACTED_DIR: &str = "extracted";

/// Fetcher downloading branch tarballs and caching their extraction.
pub struct ArchiveFetcher<'a> {
    transport: &'a dyn ArchiveTransport,
    extractor: &'a dyn ArchiveExtractor,
    fs: &'a dyn ConfigFilesystem,
    cache: &'a dyn CacheStore,
    console: &'a dyn Console,
    base_url: Url,
    timeout: Duration,
}

impl<'a> ArchiveFetcher<'a> {
    pub fn new(
        transport: &'a dyn ArchiveTransport,
        extractor: &'a dyn ArchiveExtractor,
        fs: &'a dyn ConfigFilesystem,
        cache: &'a dyn CacheStore,
        console: &'a dyn Console,
        base_url: Url,
        timeout: Duration,
    ) -> Self {
        Self { transport, extractor, fs, cache, console, base_url, timeout }
    }

    /// Whether the cached entry still matches the remote ETag.
    ///
    /// Any probe failure counts as stale.
    fn is_fresh(&self, url: &Url, entry: &CacheEntry) -> bool {
        match self.transport.probe(url) {
            Ok(response) if response.is_success() => {
                let fresh = response.etag.as_deref() == Some(entry.metadata.etag.as_str());
                debug!(
                    cached = %entry.metadata.etag,
                    remote = ?response.etag,
                    fresh,
                    "compared ETags"
                );
                fresh
            }
            Ok(response) => {
                debug!(status = response.status, "probe rejected, treating cache as stale");
                false
            }
            Err(err) => {
                debug!(?err, "probe failed, treating cache as stale");
                false
            }
        }
    }

    fn download_into(
        &self,
        identity: &SourceIdentity,
        url: &Url,
        work_dir: &Path,
    ) -> Result<(PathBuf, String), AppError> {
        self.console.info(&t(Section::Info, "downloading", &[("repo", &identity.to_string())]));
        info!(%url, "downloading archive");

        let response = self.transport.download(url, self.timeout).map_err(|err| match err {
            TransportError::Timeout => AppError::DownloadTimeout {
                owner: identity.owner.clone(),
                repo: identity.repo.clone(),
                secs: self.timeout.as_secs(),
            },
            TransportError::Failed(details) => AppError::Network {
                owner: identity.owner.clone(),
                repo: identity.repo.clone(),
                details,
            },
        })?;

        if !response.is_success() {
            return Err(AppError::ArchiveStatus {
                owner: identity.owner.clone(),
                repo: identity.repo.clone(),
                branch: identity.branch.clone(),
                status: response.status,
            });
        }

        let archive = work_dir.join(ARCHIVE_FILE);
        let extracted = work_dir.join(EXTRACTED_DIR);
        self.fs.write_bytes(&archive, &response.body)?;

        self.console.info(&t(Section::Info, "extracting", &[]));
        self.extractor.extract_tar_gz(&archive, &extracted, 1)?;

        if let Err(err) = self.fs.remove_file(&archive) {
            debug!(%err, "could not remove downloaded archive");
        }

        let etag = response
            .etag
            .filter(|etag| !etag.is_empty())
            .unwrap_or_else(|| UNKNOWN_ETAG.to_string());
        Ok((extracted, etag))
    }
}

impl RepositoryFetcher for ArchiveFetcher<'_> {
    fn fetch(&self, identity: &SourceIdentity, use_cache: bool) -> Result<FetchedSource, AppError> {
        let url = identity.archive_url(&self.base_url)?;

        if use_cache {
            self.console.info(&t(Section::Info, "checkingCache", &[("repo", &identity.to_string())]));
            if let Some(entry) = self.cache.lookup(identity) {
                if self.is_fresh(&url, &entry) {
                    let path = entry.extracted_path.display().to_string();
                    self.console.success(&t(Section::Success, "usingCache", &[("path", &path)]));
                    return Ok(FetchedSource {
                        path: entry.extracted_path,
                        origin: SourceOrigin::Cache,
                    });
                }
                self.console.info(&t(Section::Info, "cacheStale", &[]));
            }
        }

        let work_dir = self.fs.create_temp_dir(WORK_DIR_PREFIX)?;
        let (extracted, etag) = match self.download_into(identity, &url, &work_dir) {
            Ok(result) => result,
            Err(err) => {
                if let Err(cleanup) = self.fs.remove_dir_all(&work_dir) {
                    debug!(%cleanup, "could not remove work dir after failed download");
                }
                return Err(err);
            }
        };

        if use_cache {
            match self.cache.save(identity, &extracted, &etag, None) {
                Ok(entry) => {
                    debug!(key = %entry.key, "cache entry saved");
                    self.console.info(&t(Section::Info, "cacheSaved", &[]));
                }
                Err(err) => warn!(%err, "failed to save cache entry"),
            }
        }

        let path = extracted.display().to_string();
        self.console.success(&t(Section::Success, "downloaded", &[("path", &path)]));
        Ok(FetchedSource { path: extracted, origin: SourceOrigin::Download { work_dir } })
    }
}
