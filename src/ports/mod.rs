mod archive_extractor;
mod archive_transport;
mod bundled_configs;
mod cache_store;
mod clock;
mod config_filesystem;
mod console;
mod prompter;
mod repository_fetcher;

pub use archive_extractor::ArchiveExtractor;
pub use archive_transport::{ArchiveResponse, ArchiveTransport, ProbeResponse, TransportError};
pub use bundled_configs::BundledConfigs;
pub use cache_store::CacheStore;
pub use clock::{Clock, SystemClock};
pub use config_filesystem::ConfigFilesystem;
pub use console::Console;
pub use prompter::Prompter;
pub use repository_fetcher::{FetchedSource, RepositoryFetcher, SourceOrigin};
