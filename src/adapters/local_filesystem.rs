//! `ConfigFilesystem` backed by `std::fs`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::AppError;
use crate::ports::ConfigFilesystem;

/// Local disk implementation of `ConfigFilesystem`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl ConfigFilesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_to_string(&self, path: &Path) -> Result<String, AppError> {
        fs::read_to_string(path).map_err(AppError::from)
    }

    fn list_subdirectories(&self, path: &Path) -> Result<Vec<PathBuf>, AppError> {
        let mut directories = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                directories.push(entry.path());
            }
        }
        Ok(directories)
    }

    fn write_bytes(&self, path: &Path, content: &[u8]) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content).map_err(AppError::from)
    }

    fn remove_file(&self, path: &Path) -> Result<(), AppError> {
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> Result<(), AppError> {
        if path.exists() {
            fs::remove_dir_all(path)?;
        }
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        fs::create_dir_all(path).map_err(AppError::from)
    }

    fn copy_dir_all(&self, source: &Path, target: &Path) -> Result<(), AppError> {
        copy_tree(source, target).map_err(AppError::from)
    }

    fn create_temp_dir(&self, prefix: &str) -> Result<PathBuf, AppError> {
        let dir = tempfile::Builder::new().prefix(prefix).tempdir()?;
        Ok(dir.keep())
    }
}

/// Recursively copy `source` into `target`, creating `target` if needed.
pub(crate) fn copy_tree(source: &Path, target: &Path) -> io::Result<()> {
    fs::create_dir_all(target)?;
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let destination = target.join(entry.file_name());
        if file_type.is_symlink() {
            debug!(path = %entry.path().display(), "not copying symlink");
        } else if file_type.is_dir() {
            copy_tree(&entry.path(), &destination)?;
        } else {
            fs::copy(entry.path(), &destination)?;
        }
    }
    Ok(())
}
