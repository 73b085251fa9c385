use crate::error::SpantabError;
use crate::fetch::Fetcher;
use std::path::{Path, PathBuf};
use url::Url;

/// Reads pages from disk, for `file://` URLs or plain paths.
pub struct FileFetcher;

impl FileFetcher {
    pub fn new() -> Self {
        FileFetcher
    }

    /// Whether `url` names a local file rather than a web page.
    pub fn handles(url: &str) -> bool {
        url.starts_with("file://") || Path::new(url).exists()
    }

    fn path_of(url: &str) -> Option<PathBuf> {
        if url.starts_with("file://") {
            Url::parse(url).ok()?.to_file_path().ok()
        } else {
            Some(PathBuf::from(url))
        }
    }
}

impl Default for FileFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher for FileFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, SpantabError> {
        let path = Self::path_of(url).ok_or_else(|| SpantabError::Network {
            url: url.to_string(),
            reason: "not a local file URL".into(),
        })?;
        tracing::debug!(path = %path.display(), "reading page from disk");
        std::fs::read(&path).map_err(|e| SpantabError::Network {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }

    fn backend_name(&self) -> &str {
        "file"
    }
}
