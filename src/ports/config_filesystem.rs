//! Filesystem operations used by discovery, installation, and fetching.

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for filesystem primitives.
///
/// All paths are absolute; implementations do not resolve against a root.
pub trait ConfigFilesystem {
    /// Check whether a file or directory exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check whether a path is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Read a file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> Result<String, AppError>;

    /// Immediate subdirectories of `path`, in the order the filesystem yields them.
    fn list_subdirectories(&self, path: &Path) -> Result<Vec<PathBuf>, AppError>;

    /// Write bytes to a file, creating parent directories as needed.
    fn write_bytes(&self, path: &Path, content: &[u8]) -> Result<(), AppError>;

    /// Remove a file. No-op if the file does not exist.
    fn remove_file(&self, path: &Path) -> Result<(), AppError>;

    /// Remove a directory and all its contents. No-op if absent.
    fn remove_dir_all(&self, path: &Path) -> Result<(), AppError>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> Result<(), AppError>;

    /// Recursively copy the contents of `source` into `target`.
    fn copy_dir_all(&self, source: &Path, target: &Path) -> Result<(), AppError>;

    /// Create a fresh, persistent temporary directory whose name starts with `prefix`.
    fn create_temp_dir(&self, prefix: &str) -> Result<PathBuf, AppError>;
}
