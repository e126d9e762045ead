//! In-memory `ConfigFilesystem` for unit tests.

use std::collections::{BTreeMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::ConfigFilesystem;

#[derive(Debug, Default)]
struct MemoryState {
    files: BTreeMap<PathBuf, Vec<u8>>,
    /// Directories in creation order; listing follows this order.
    dirs: Vec<PathBuf>,
    copies: Vec<(PathBuf, PathBuf)>,
    removed_dirs: Vec<PathBuf>,
    unreadable: HashSet<PathBuf>,
    failing_copy_targets: HashSet<PathBuf>,
    temp_counter: usize,
}

impl MemoryState {
    fn add_dir(&mut self, path: &Path) {
        let mut ancestors: Vec<&Path> = path.ancestors().collect();
        ancestors.reverse();
        for ancestor in ancestors {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            if !self.dirs.iter().any(|dir| dir == ancestor) {
                self.dirs.push(ancestor.to_path_buf());
            }
        }
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.iter().any(|dir| dir == path)
    }
}

/// Shared in-memory tree; clones observe the same state.
#[derive(Clone, Debug, Default)]
pub struct MemoryFilesystem {
    state: Arc<Mutex<MemoryState>>,
}

fn not_found(path: &Path) -> AppError {
    AppError::from(io::Error::new(
        io::ErrorKind::NotFound,
        format!("{} not found", path.display()),
    ))
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a text file, creating its parent directories.
    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        let path = path.as_ref();
        let mut state = self.state.lock().unwrap();
        if let Some(parent) = path.parent() {
            state.add_dir(parent);
        }
        state.files.insert(path.to_path_buf(), content.as_bytes().to_vec());
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        self.state.lock().unwrap().add_dir(path.as_ref());
    }

    /// Make reads of `path` fail with a permission error.
    pub fn deny_read(&self, path: impl AsRef<Path>) {
        self.state.lock().unwrap().unreadable.insert(path.as_ref().to_path_buf());
    }

    /// Make copies into `target` fail.
    pub fn fail_copy_to(&self, target: impl AsRef<Path>) {
        self.state.lock().unwrap().failing_copy_targets.insert(target.as_ref().to_path_buf());
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.state
            .lock()
            .unwrap()
            .files
            .get(path.as_ref())
            .map(|bytes| String::from_utf8_lossy(bytes).to_string())
    }

    pub fn copies(&self) -> Vec<(PathBuf, PathBuf)> {
        self.state.lock().unwrap().copies.clone()
    }

    pub fn removed_dirs(&self) -> Vec<PathBuf> {
        self.state.lock().unwrap().removed_dirs.clone()
    }
}

impl ConfigFilesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let state = self.state.lock().unwrap();
        state.files.contains_key(path) || state.is_dir(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.state.lock().unwrap().is_dir(path)
    }

    fn read_to_string(&self, path: &Path) -> Result<String, AppError> {
        let state = self.state.lock().unwrap();
        if state.unreadable.contains(path) {
            return Err(AppError::from(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{} is not readable", path.display()),
            )));
        }
        state
            .files
            .get(path)
            .ok_or_else(|| not_found(path))
            .and_then(|bytes| {
                String::from_utf8(bytes.clone()).map_err(|err| {
                    AppError::from(io::Error::new(io::ErrorKind::InvalidData, err))
                })
            })
    }

    fn list_subdirectories(&self, path: &Path) -> Result<Vec<PathBuf>, AppError> {
        let state = self.state.lock().unwrap();
        if state.unreadable.contains(path) {
            return Err(AppError::from(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{} is not listable", path.display()),
            )));
        }
        if !state.is_dir(path) {
            return Err(not_found(path));
        }
        Ok(state.dirs.iter().filter(|dir| dir.parent() == Some(path)).cloned().collect())
    }

    fn write_bytes(&self, path: &Path, content: &[u8]) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        if let Some(parent) = path.parent() {
            state.add_dir(parent);
        }
        state.files.insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> Result<(), AppError> {
        self.state.lock().unwrap().files.remove(path);
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        if !state.is_dir(path) {
            return Ok(());
        }
        state.files.retain(|file, _| !file.starts_with(path));
        state.dirs.retain(|dir| !dir.starts_with(path));
        state.removed_dirs.push(path.to_path_buf());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        self.state.lock().unwrap().add_dir(path);
        Ok(())
    }

    fn copy_dir_all(&self, source: &Path, target: &Path) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        if state.failing_copy_targets.contains(target) {
            return Err(AppError::from(io::Error::other(format!(
                "copy to {} failed",
                target.display()
            ))));
        }
        if !state.is_dir(source) {
            return Err(not_found(source));
        }

        let copied_dirs: Vec<PathBuf> = state
            .dirs
            .iter()
            .filter_map(|dir| dir.strip_prefix(source).ok().map(|rel| target.join(rel)))
            .collect();
        let copied_files: Vec<(PathBuf, Vec<u8>)> = state
            .files
            .iter()
            .filter_map(|(file, bytes)| {
                file.strip_prefix(source).ok().map(|rel| (target.join(rel), bytes.clone()))
            })
            .collect();

        state.add_dir(target);
        for dir in copied_dirs {
            state.add_dir(&dir);
        }
        state.files.extend(copied_files);
        state.copies.push((source.to_path_buf(), target.to_path_buf()));
        Ok(())
    }

    fn create_temp_dir(&self, prefix: &str) -> Result<PathBuf, AppError> {
        let mut state = self.state.lock().unwrap();
        state.temp_counter += 1;
        let dir = PathBuf::from(format!("/tmp/{}{}", prefix, state.temp_counter));
        state.add_dir(&dir);
        Ok(dir)
    }
}
