use crate::error::SpantabError;
use crate::fetch::Fetcher;
use std::time::Duration;

const USER_AGENT: &str = concat!("spantab/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking HTTP(S) backend. No retries: a failed request is returned as is.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, SpantabError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, SpantabError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| SpantabError::HttpClient(e.to_string()))?;
        Ok(HttpFetcher { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, SpantabError> {
        tracing::debug!(url, "fetching page");

        let network = |e: reqwest::Error| SpantabError::Network {
            url: url.to_string(),
            reason: e.to_string(),
        };

        let response = self.client.get(url).send().map_err(network)?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url, status = status.as_u16(), "page fetch rejected");
            return Err(SpantabError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().map_err(network)?;
        tracing::debug!(url, bytes = body.len(), "fetched page");
        Ok(body.to_vec())
    }

    fn backend_name(&self) -> &str {
        "http"
    }
}
