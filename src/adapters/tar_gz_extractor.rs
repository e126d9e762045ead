//! Gzip-compressed tar extraction using `flate2` and `tar`.

use std::fs::{self, File};
use std::path::{Component, Path, PathBuf};

use flate2::read::GzDecoder;
use tar::{Archive, EntryType};
use tracing::debug;

use crate::domain::AppError;
use crate::ports::ArchiveExtractor;

#[derive(Debug, Clone, Copy, Default)]
pub struct TarGzExtractor;

impl TarGzExtractor {
    pub fn new() -> Self {
        Self
    }
}

/// Drop the first `strip` components; `None` when nothing remains or the
/// path would leave the destination.
fn stripped_path(path: &Path, strip: usize) -> Option<PathBuf> {
    let mut kept = PathBuf::new();
    for component in path.components().skip(strip) {
        match component {
            Component::Normal(part) => kept.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    if kept.as_os_str().is_empty() { None } else { Some(kept) }
}

impl ArchiveExtractor for TarGzExtractor {
    fn extract_tar_gz(
        &self,
        archive: &Path,
        destination: &Path,
        strip_components: usize,
    ) -> Result<(), AppError> {
        let file = File::open(archive)?;
        let mut tarball = Archive::new(GzDecoder::new(file));
        fs::create_dir_all(destination)?;

        let entries = tarball.entries().map_err(|e| AppError::Archive(e.to_string()))?;
        for entry in entries {
            let mut entry = entry.map_err(|e| AppError::Archive(e.to_string()))?;

            if matches!(
                entry.header().entry_type(),
                EntryType::XGlobalHeader | EntryType::XHeader | EntryType::GNULongName
            ) {
                continue;
            }

            let path = entry.path().map_err(|e| AppError::Archive(e.to_string()))?.into_owned();
            let Some(relative) = stripped_path(&path, strip_components) else {
                if path.components().any(|c| matches!(c, Component::ParentDir)) {
                    return Err(AppError::Archive(format!(
                        "entry '{}' escapes the destination",
                        path.display()
                    )));
                }
                continue;
            };

            // Bundles are plain files; links could redirect later entries
            // outside the destination.
            if matches!(entry.header().entry_type(), EntryType::Symlink | EntryType::Link) {
                debug!(entry = %relative.display(), "skipping link entry");
                continue;
            }

            let target = destination.join(&relative);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            entry.unpack(&target).map_err(|e| {
                AppError::Archive(format!("failed to unpack '{}': {}", relative.display(), e))
            })?;
        }

        Ok(())
    }
}
