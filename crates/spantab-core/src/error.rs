use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SpantabError {
    #[error("conflicting link-scope configuration: links can be followed across rows or columns, not both")]
    ConflictingLinkScope,

    #[error("invalid options: {0}")]
    InvalidOptions(String),

    #[error("failed to load options from {path}: {reason}")]
    OptionsLoad { path: PathBuf, reason: String },

    #[error("failed to fetch {url}: {reason}")]
    Network { url: String, reason: String },

    #[error("HTTP client setup failed: {0}")]
    HttpClient(String),

    #[error("fetching {url} returned HTTP status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("table index {index} is out of range: only {found} matching table(s) on the page")]
    TableNotFound { index: usize, found: usize },

    #[error("extraction offset for pattern '{pattern}' points outside the grid at ({row}, {col})")]
    ExtractionOutOfBounds { pattern: String, row: i64, col: i64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
