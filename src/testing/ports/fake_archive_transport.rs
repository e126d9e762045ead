use std::sync::{Arc, Mutex};
use std::time::Duration;

use url::Url;

use crate::ports::{ArchiveResponse, ArchiveTransport, ProbeResponse, TransportError};

/// Scripted archive transport recording every request.
#[derive(Clone)]
pub struct FakeTransport {
    probe_result: Arc<Mutex<Result<ProbeResponse, TransportError>>>,
    download_result: Arc<Mutex<Result<ArchiveResponse, TransportError>>>,
    pub probes: Arc<Mutex<Vec<Url>>>,
    pub downloads: Arc<Mutex<Vec<(Url, Duration)>>>,
}

impl FakeTransport {
    /// Transport answering 200 with `etag` to both probes and downloads.
    pub fn serving(etag: Option<&str>, body: &[u8]) -> Self {
        let etag = etag.map(str::to_string);
        Self {
            probe_result: Arc::new(Mutex::new(Ok(ProbeResponse { status: 200, etag: etag.clone() }))),
            download_result: Arc::new(Mutex::new(Ok(ArchiveResponse {
                status: 200,
                etag,
                body: body.to_vec(),
            }))),
            probes: Arc::new(Mutex::new(vec![])),
            downloads: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn set_probe(&self, result: Result<ProbeResponse, TransportError>) {
        *self.probe_result.lock().unwrap() = result;
    }

    pub fn set_download(&self, result: Result<ArchiveResponse, TransportError>) {
        *self.download_result.lock().unwrap() = result;
    }

    pub fn probe_count(&self) -> usize {
        self.probes.lock().unwrap().len()
    }

    pub fn download_count(&self) -> usize {
        self.downloads.lock().unwrap().len()
    }
}

impl ArchiveTransport for FakeTransport {
    fn probe(&self, url: &Url) -> Result<ProbeResponse, TransportError> {
        self.probes.lock().unwrap().push(url.clone());
        self.probe_result.lock().unwrap().clone()
    }

    fn download(&self, url: &Url, timeout: Duration) -> Result<ArchiveResponse, TransportError> {
        self.downloads.lock().unwrap().push((url.clone(), timeout));
        self.download_result.lock().unwrap().clone()
    }
}
