pub mod cache;
pub mod descriptor;
pub mod error;
pub mod messages;
pub mod script;
pub mod source;

pub use cache::{CacheEntry, CacheMetadata, UNKNOWN_ETAG};
pub use descriptor::{ConfigurationDescriptor, TELEPROMPTER_DIR, slugify};
pub use error::AppError;
pub use messages::{Section, t};
pub use script::{SCRIPT_FILE, ScriptDefinition, ScriptValidationError, validate_script};
pub use source::{DEFAULT_BRANCH, RepoSlug, SourceIdentity};
