use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::domain::{AppError, SourceIdentity};
use crate::ports::{FetchedSource, RepositoryFetcher, SourceOrigin};

/// Fetcher handing back a prepared directory.
#[derive(Clone)]
pub struct FakeFetcher {
    source: FetchedSource,
    pub requests: Arc<Mutex<Vec<(SourceIdentity, bool)>>>,
}

impl FakeFetcher {
    pub fn from_cache(path: impl Into<PathBuf>) -> Self {
        Self::returning(FetchedSource { path: path.into(), origin: SourceOrigin::Cache })
    }

    pub fn downloaded(work_dir: impl Into<PathBuf>, path: impl Into<PathBuf>) -> Self {
        Self::returning(FetchedSource {
            path: path.into(),
            origin: SourceOrigin::Download { work_dir: work_dir.into() },
        })
    }

    fn returning(source: FetchedSource) -> Self {
        Self { source, requests: Arc::new(Mutex::new(vec![])) }
    }

    pub fn requested(&self) -> Vec<(SourceIdentity, bool)> {
        self.requests.lock().unwrap().clone()
    }
}

impl RepositoryFetcher for FakeFetcher {
    fn fetch(&self, identity: &SourceIdentity, use_cache: bool) -> Result<FetchedSource, AppError> {
        self.requests.lock().unwrap().push((identity.clone(), use_cache));
        Ok(self.source.clone())
    }
}
