//! Built-in configuration bundles compiled into the binary.

use std::cell::OnceCell;
use std::path::PathBuf;

use include_dir::{Dir, include_dir};
use tempfile::TempDir;
use tracing::debug;

use crate::domain::AppError;
use crate::ports::BundledConfigs;

static CONFIGS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/configs");

/// Embedded catalog, staged to a temporary directory on first use.
///
/// The staged copy lives as long as the catalog value.
#[derive(Debug, Default)]
pub struct EmbeddedConfigCatalog {
    staged: OnceCell<TempDir>,
}

impl EmbeddedConfigCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of the embedded bundles.
    fn bundle_names() -> Vec<String> {
        CONFIGS_DIR
            .dirs()
            .filter_map(|dir| dir.path().file_name())
            .map(|name| name.to_string_lossy().to_string())
            .collect()
    }

    fn stage() -> Result<TempDir, AppError> {
        let dir = tempfile::Builder::new().prefix("teleprompter-configs-").tempdir()?;
        CONFIGS_DIR.extract(dir.path())?;
        debug!(
            path = %dir.path().display(),
            bundles = ?Self::bundle_names(),
            "staged built-in configurations"
        );
        Ok(dir)
    }
}

impl BundledConfigs for EmbeddedConfigCatalog {
    fn root(&self) -> Result<PathBuf, AppError> {
        if self.staged.get().is_none() {
            let dir = Self::stage()?;
            let _ = self.staged.set(dir);
        }

        self.staged
            .get()
            .map(|dir| dir.path().to_path_buf())
            .ok_or_else(|| AppError::config_error("Built-in configurations could not be staged"))
    }
}
