//! Archive transport implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::{ETAG, HeaderMap, USER_AGENT};
use url::Url;

use crate::domain::AppError;
use crate::ports::{ArchiveResponse, ArchiveTransport, ProbeResponse, TransportError};

const USER_AGENT_VALUE: &str = concat!("teleprompter/", env!("CARGO_PKG_VERSION"));

/// HTTP transport for repository tarballs.
///
/// Performs exactly one request per call; retries are left to the operator.
#[derive(Debug, Clone)]
pub struct HttpArchiveClient {
    client: Client,
}

impl HttpArchiveClient {
    pub fn new() -> Result<Self, AppError> {
        let client = Client::builder().build().map_err(|e| {
            AppError::config_error(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self { client })
    }
}

fn etag_of(headers: &HeaderMap) -> Option<String> {
    headers.get(ETAG).and_then(|value| value.to_str().ok()).map(str::to_string)
}

fn classify(err: reqwest::Error) -> TransportError {
    if err.is_timeout() { TransportError::Timeout } else { TransportError::Failed(err.to_string()) }
}

fn read_body(response: Response) -> Result<Vec<u8>, TransportError> {
    response.bytes().map(|bytes| bytes.to_vec()).map_err(classify)
}

impl ArchiveTransport for HttpArchiveClient {
    fn probe(&self, url: &Url) -> Result<ProbeResponse, TransportError> {
        let response = self
            .client
            .head(url.clone())
            .header(USER_AGENT, USER_AGENT_VALUE)
            .send()
            .map_err(classify)?;

        Ok(ProbeResponse { status: response.status().as_u16(), etag: etag_of(response.headers()) })
    }

    fn download(&self, url: &Url, timeout: Duration) -> Result<ArchiveResponse, TransportError> {
        let response = self
            .client
            .get(url.clone())
            .header(USER_AGENT, USER_AGENT_VALUE)
            .timeout(timeout)
            .send()
            .map_err(classify)?;

        let status = response.status().as_u16();
        let etag = etag_of(response.headers());
        if !response.status().is_success() {
            return Ok(ArchiveResponse { status, etag, body: Vec::new() });
        }

        let body = read_body(response)?;
        Ok(ArchiveResponse { status, etag, body })
    }
}
