//! teleprompter: install agent configuration bundles into `.teleprompter/`.
//!
//! Bundles come from the built-in catalog, a local directory, or a GitHub
//! repository archive that is cached locally and revalidated by ETag.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    InstallOutcome, InstallRequest, InstalledConfig, ListRequest, bootstrap, cache_clear,
    cache_list, cache_path, install, list,
};
pub use domain::AppError;
