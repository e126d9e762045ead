mod fake_archive_transport;
mod fake_fetcher;
mod memory_cache_store;
mod memory_filesystem;
mod scripted_prompter;
mod static_bundled_configs;

pub use self::fake_archive_extractor::FakeExtractor;
pub use self::fake_archive_transport::FakeTransport;
pub use self::fake_fetcher::FakeFetcher;
pub use self::memory_cache_store::MemoryCacheStore;
pub use self::memory_filesystem::MemoryFilesystem;
pub use self::recording_console::{Level, RecordingConsole};
pub use self::scripted_prompter::ScriptedPrompter;
pub use self::static_bundled_configs::StaticBundledConfigs;
