use std::path::Path;

use crate::domain::AppError;

/// Port for unpacking gzip-compressed tar archives.
pub trait ArchiveExtractor {
    /// Extract `archive` into `destination`, dropping the first
    /// `strip_components` path components of every entry.
    fn extract_tar_gz(
        &self,
        archive: &Path,
        destination: &Path,
        strip_components: usize,
    ) -> Result<(), AppError>;
}
