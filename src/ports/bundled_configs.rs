use std::path::PathBuf;

use crate::domain::AppError;

/// Port for the built-in configuration catalog.
pub trait BundledConfigs {
    /// Directory holding the built-in bundles, one per subdirectory.
    fn root(&self) -> Result<PathBuf, AppError>;
}
