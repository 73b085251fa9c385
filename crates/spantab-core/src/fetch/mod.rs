pub mod file;
pub mod http;

use crate::error::SpantabError;

/// Source of page bytes for a URL.
pub trait Fetcher: Send + Sync {
    /// Fetch the page at `url`. Unreachable pages and non-success responses are errors.
    fn fetch(&self, url: &str) -> Result<Vec<u8>, SpantabError>;

    /// Name of this backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Reads local files for `file://` URLs and existing paths, and goes over
/// HTTP for everything else.
pub struct AutoFetcher {
    http: http::HttpFetcher,
    file: file::FileFetcher,
}

impl AutoFetcher {
    pub fn new() -> Result<Self, SpantabError> {
        Ok(AutoFetcher {
            http: http::HttpFetcher::new()?,
            file: file::FileFetcher::new(),
        })
    }
}

impl Fetcher for AutoFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, SpantabError> {
        if file::FileFetcher::handles(url) {
            self.file.fetch(url)
        } else {
            self.http.fetch(url)
        }
    }

    fn backend_name(&self) -> &str {
        "auto"
    }
}
