pub mod checkout;
pub mod discovery;
pub mod fetcher;
pub mod installer;

pub use checkout::RemoteCheckout;
pub use discovery::{Discovery, SkippedConfig, discover};
pub use fetcher::ArchiveFetcher;
pub use installer::copy_config;
