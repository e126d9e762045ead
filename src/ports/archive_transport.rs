//! HTTP transport port for repository archives.

use std::time::Duration;

use url::Url;

/// Headers-only answer to a freshness probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResponse {
    pub status: u16,
    pub etag: Option<String>,
}

/// Full archive response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveResponse {
    pub status: u16,
    pub etag: Option<String>,
    pub body: Vec<u8>,
}

impl ProbeResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl ArchiveResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport-level failure, before any status code is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The bounded wait elapsed.
    Timeout,
    /// Any other connection or protocol failure.
    Failed(String),
}

/// Port for fetching repository archives.
pub trait ArchiveTransport {
    /// Issue a HEAD request; no body is transferred.
    fn probe(&self, url: &Url) -> Result<ProbeResponse, TransportError>;

    /// Issue a GET request, giving up after `timeout`.
    fn download(&self, url: &Url, timeout: Duration) -> Result<ArchiveResponse, TransportError>;
}
