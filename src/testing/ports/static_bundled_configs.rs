use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::BundledConfigs;

/// Built-in catalog rooted at a fixed path.
#[derive(Clone, Debug)]
pub struct StaticBundledConfigs(pub PathBuf);

impl BundledConfigs for StaticBundledConfigs {
    fn root(&self) -> Result<PathBuf, AppError> {
        Ok(self.0.clone())
    }
}
