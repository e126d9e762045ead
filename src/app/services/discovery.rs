//! Discovery of configuration bundles on disk.
//!
//! A source path is either a bundle itself (it holds `script.yaml`) or a
//! folder whose immediate subdirectories are bundles.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::{
    AppError, ConfigurationDescriptor, SCRIPT_FILE, ScriptValidationError, Section, t,
    validate_script,
};
use crate::ports::{ConfigFilesystem, Console};

/// A candidate bundle that was found but rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedConfig {
    pub folder_name: String,
    pub path: PathBuf,
    pub error: ScriptValidationError,
}

/// Result of walking a source path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovery {
    pub configs: Vec<ConfigurationDescriptor>,
    pub skipped: Vec<SkippedConfig>,
}

impl Discovery {
    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    /// Warn about every skipped candidate.
    pub fn report_skipped(&self, console: &dyn Console) {
        for skipped in &self.skipped {
            let reason = skipped.error.to_string();
            console.warning(&t(
                Section::Warning,
                "configIgnored",
                &[("name", &skipped.folder_name), ("reason", &reason)],
            ));
        }
    }
}

/// Discover every valid configuration under `source_path`.
pub fn discover(
    fs: &dyn ConfigFilesystem,
    source_path: &Path,
) -> Result<Discovery, AppError> {
    if let Some(direct) = discover_direct(fs, source_path)? {
        return Ok(Discovery { configs: vec![direct], skipped: Vec::new() });
    }

    let mut discovery = Discovery::default();
    for candidate in fs.list_subdirectories(source_path)? {
        let folder_name = folder_name(&candidate);
        match load_descriptor(fs, &candidate)? {
            None => continue,
            Some(Ok(descriptor)) => discovery.configs.push(descriptor),
            Some(Err(error)) => {
                warn!(
                    folder = %folder_name,
                    field = error.field().unwrap_or("-"),
                    %error,
                    "skipping invalid configuration"
                );
                discovery.skipped.push(SkippedConfig { folder_name, path: candidate, error });
            }
        }
    }

    debug!(
        path = %source_path.display(),
        found = discovery.configs.len(),
        skipped = discovery.skipped.len(),
        "discovery finished"
    );
    Ok(discovery)
}

/// Case A: `source_path` is a bundle with a valid marker file.
///
/// An invalid marker at the root is not an error; the caller falls back to
/// scanning subdirectories.
fn discover_direct(
    fs: &dyn ConfigFilesystem,
    source_path: &Path,
) -> Result<Option<ConfigurationDescriptor>, AppError> {
    match load_descriptor(fs, source_path)? {
        Some(Ok(descriptor)) => Ok(Some(descriptor)),
        Some(Err(error)) => {
            debug!(path = %source_path.display(), %error, "root script.yaml invalid, scanning subfolders");
            Ok(None)
        }
        None => Ok(None),
    }
}

/// `None` when the marker is absent. A marker that is not UTF-8 counts as
/// malformed; other read failures propagate.
fn load_descriptor(
    fs: &dyn ConfigFilesystem,
    dir: &Path,
) -> Result<Option<Result<ConfigurationDescriptor, ScriptValidationError>>, AppError> {
    let marker = dir.join(SCRIPT_FILE);
    if !fs.exists(&marker) {
        return Ok(None);
    }
    let raw = match fs.read_to_string(&marker) {
        Ok(raw) => raw,
        Err(AppError::Io(err)) if err.kind() == io::ErrorKind::InvalidData => {
            return Ok(Some(Err(ScriptValidationError::Malformed(
                "file is not valid UTF-8".to_string(),
            ))));
        }
        Err(err) => return Err(err),
    };
    let descriptor = validate_script(&raw).and_then(|script| {
        ConfigurationDescriptor::new(folder_name(dir), dir.to_path_buf(), script)
    });
    Ok(Some(descriptor))
}

fn folder_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
