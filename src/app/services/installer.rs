use std::path::Path;

use tracing::debug;

use crate::domain::{AppError, Section, t};
use crate::ports::{ConfigFilesystem, Console};

/// Copy one bundle directory into its install location.
///
/// An occupied target is an error unless `force` is set, in which case it is
/// replaced.
pub fn copy_config(
    fs: &dyn ConfigFilesystem,
    console: &dyn Console,
    source: &Path,
    target: &Path,
    force: bool,
) -> Result<(), AppError> {
    if fs.exists(target) {
        if !force {
            return Err(AppError::ConfigExists(target.to_path_buf()));
        }
        let path = target.display().to_string();
        console.warning(&t(Section::Warning, "overwriting", &[("path", &path)]));
        fs.remove_dir_all(target)?;
    }

    if let Some(parent) = target.parent() {
        fs.create_dir_all(parent)?;
    }

    debug!(source = %source.display(), target = %target.display(), "copying configuration");
    fs.copy_dir_all(source, target)
}
