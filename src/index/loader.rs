//! Index loader.
//!
//! One retrieval per session: no caching, no retry, no client timeout.

use std::time::{Duration, Instant};

use reqwest::blocking::Client;
use reqwest::header::{CACHE_CONTROL, HeaderMap, HeaderValue, PRAGMA};
use tracing::{debug, info};

use super::{Index, IndexSource};
use crate::error::{Result, SiteError, UnavailableReason};

pub struct IndexLoader {
    source: IndexSource,
    client: Client,
}

impl IndexLoader {
    pub fn new(source: IndexSource) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache, no-store"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(concat!("sitesearch/", env!("CARGO_PKG_VERSION")))
            .timeout(None::<Duration>)
            .build()
            .map_err(|err| SiteError::Config(format!("index http client: {err}")))?;

        Ok(Self { source, client })
    }

    #[must_use]
    pub const fn source(&self) -> &IndexSource {
        &self.source
    }

    /// Retrieve and parse the index.
    ///
    /// Every failure (transport, non-2xx status, unreadable file, malformed
    /// body) is reported as [`SiteError::IndexUnavailable`].
    pub fn load(&self) -> Result<Index> {
        let start = Instant::now();
        debug!(location = %self.source, "loading search index");

        let body = match &self.source {
            IndexSource::Remote(url) => self.fetch(url.as_str())?,
            IndexSource::Local(path) => std::fs::read_to_string(path)
                .map_err(|err| self.source.unavailable(UnavailableReason::Read(err)))?,
        };

        let index = Index::from_json(&body)
            .map_err(|err| self.source.unavailable(UnavailableReason::Malformed(err)))?;

        info!(
            location = %self.source,
            entries = index.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "search index loaded"
        );
        Ok(index)
    }

    fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|err| self.source.unavailable(UnavailableReason::Transport(err)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self
                .source
                .unavailable(UnavailableReason::Status(status.as_u16())));
        }

        response
            .text()
            .map_err(|err| self.source.unavailable(UnavailableReason::Transport(err)))
    }
}
