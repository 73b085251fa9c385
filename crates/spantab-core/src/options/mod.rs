pub mod presets;

use crate::error::SpantabError;
use crate::table::link::LinkFilter;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Attribute predicate used to pick candidate tables (`class` → `infobox`, ...).
pub type TableFilter = BTreeMap<String, String>;

/// Configuration for one table extraction.
///
/// Built once and passed by value; per-call changes go through
/// [`TableOptions::merged`], which returns a new record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    /// Page holding the table. Set per link for nested lookups.
    pub url: Option<String>,
    /// Which of the tables matching `table_filter` to read.
    pub table_index: usize,
    pub table_filter: TableFilter,
    /// Treat `<th>` cells of the first row as column labels.
    pub column_header: bool,
    /// Treat the `<th>` first cell of each body row as the row label.
    pub row_header: bool,
    /// Column positions to keep. `None` keeps all, an empty list keeps none.
    pub column_keep: Option<Vec<usize>>,
    /// Row positions to keep. `None` keeps all, an empty list keeps none.
    pub row_keep: Option<Vec<usize>>,
    /// Columns whose links are followed. Empty: not engaged. `None`: every column.
    pub column_link_scope: Option<Vec<usize>>,
    /// Rows whose links are followed. Empty: not engaged. `None`: every row.
    pub row_link_scope: Option<Vec<usize>>,
    /// When non-empty, the result is the list of values these specs pull out of the grid.
    pub extract: Vec<ExtractionSpec>,
    /// Lookup run against every followed link.
    pub on_link: Option<Box<TableOptions>>,
}

impl Default for TableOptions {
    fn default() -> Self {
        TableOptions {
            url: None,
            table_index: 0,
            table_filter: TableFilter::new(),
            column_header: false,
            row_header: false,
            column_keep: None,
            row_keep: None,
            column_link_scope: Some(Vec::new()),
            row_link_scope: Some(Vec::new()),
            extract: Vec::new(),
            on_link: None,
        }
    }
}

impl TableOptions {
    /// A copy of these options with `overrides` applied on top.
    pub fn merged(&self, overrides: &OptionOverrides) -> TableOptions {
        TableOptions {
            url: overrides.url.clone().or_else(|| self.url.clone()),
            table_index: overrides.table_index.unwrap_or(self.table_index),
            table_filter: overrides
                .table_filter
                .clone()
                .unwrap_or_else(|| self.table_filter.clone()),
            column_header: overrides.column_header.unwrap_or(self.column_header),
            row_header: overrides.row_header.unwrap_or(self.row_header),
            column_keep: overrides
                .column_keep
                .clone()
                .unwrap_or_else(|| self.column_keep.clone()),
            row_keep: overrides
                .row_keep
                .clone()
                .unwrap_or_else(|| self.row_keep.clone()),
            column_link_scope: overrides
                .column_link_scope
                .clone()
                .unwrap_or_else(|| self.column_link_scope.clone()),
            row_link_scope: overrides
                .row_link_scope
                .clone()
                .unwrap_or_else(|| self.row_link_scope.clone()),
            extract: overrides
                .extract
                .clone()
                .unwrap_or_else(|| self.extract.clone()),
            on_link: overrides
                .on_link
                .clone()
                .unwrap_or_else(|| self.on_link.clone()),
        }
    }

    /// A copy pointed at another page.
    pub fn with_url(&self, url: &str) -> TableOptions {
        TableOptions {
            url: Some(url.to_string()),
            ..self.clone()
        }
    }
}

/// One "find this pattern, take the cell at this offset" rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionSpec {
    pub pattern: String,
    #[serde(default)]
    pub row_offset: i64,
    #[serde(default)]
    pub col_offset: i64,
    /// Keep only the first N matches. Unbounded when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_matches: Option<usize>,
}

impl ExtractionSpec {
    pub fn new(pattern: &str) -> Self {
        ExtractionSpec {
            pattern: pattern.to_string(),
            row_offset: 0,
            col_offset: 0,
            max_matches: None,
        }
    }

    pub fn offset(mut self, row_offset: i64, col_offset: i64) -> Self {
        self.row_offset = row_offset;
        self.col_offset = col_offset;
        self
    }

    pub fn max_matches(mut self, max: usize) -> Self {
        self.max_matches = Some(max);
        self
    }
}

/// Per-call replacements for any [`TableOptions`] field. `None` leaves the field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionOverrides {
    pub url: Option<String>,
    pub table_index: Option<usize>,
    pub table_filter: Option<TableFilter>,
    pub column_header: Option<bool>,
    pub row_header: Option<bool>,
    pub column_keep: Option<Option<Vec<usize>>>,
    pub row_keep: Option<Option<Vec<usize>>>,
    pub column_link_scope: Option<Option<Vec<usize>>>,
    pub row_link_scope: Option<Option<Vec<usize>>>,
    pub extract: Option<Vec<ExtractionSpec>>,
    pub on_link: Option<Option<Box<TableOptions>>>,
}

impl OptionOverrides {
    pub fn is_empty(&self) -> bool {
        *self == OptionOverrides::default()
    }
}

/// Load options from a JSON file.
pub fn load_options(path: &Path) -> Result<TableOptions, SpantabError> {
    let content = std::fs::read_to_string(path).map_err(|e| SpantabError::OptionsLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_options(&content, path)
}

/// Parse options from a JSON string read from `source`.
pub fn parse_options(json: &str, source: &Path) -> Result<TableOptions, SpantabError> {
    let options: TableOptions =
        serde_json::from_str(json).map_err(|e| SpantabError::OptionsLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_options(&options)?;
    Ok(options)
}

/// Parse options from a JSON string (no file path context).
pub fn parse_options_str(json: &str) -> Result<TableOptions, SpantabError> {
    let options: TableOptions = serde_json::from_str(json)?;
    validate_options(&options)?;
    Ok(options)
}

/// Check options, and every nested `on_link` lookup, before any page is fetched.
pub fn validate_options(options: &TableOptions) -> Result<(), SpantabError> {
    let links = LinkFilter::from_options(options)?;

    if links.is_enabled() && options.on_link.is_none() {
        return Err(SpantabError::InvalidOptions(
            "a link scope is configured but there is no on_link lookup to run".into(),
        ));
    }

    for spec in &options.extract {
        Regex::new(&spec.pattern).map_err(|e| {
            SpantabError::InvalidOptions(format!("invalid pattern '{}': {}", spec.pattern, e))
        })?;
    }

    if let Some(nested) = &options.on_link {
        validate_options(nested)?;
    }

    Ok(())
}
