pub mod dom;
pub mod error;
pub mod fetch;
pub mod model;
pub mod options;
pub mod pattern;
pub mod table;

use dom::{list_tables, locate_table, TableSummary};
use error::SpantabError;
use fetch::Fetcher;
use model::Extraction;
use options::{validate_options, OptionOverrides, TableOptions};
use scraper::{ElementRef, Html};

/// Main API entry point: fetch `options.url`, locate the configured table and
/// reconstruct it.
///
/// Returns the grid, or the extracted values when `options.extract` is set.
/// Links inside the link scope are followed depth-first through `fetcher`,
/// each one running the nested `on_link` lookup. Options are validated before
/// anything is fetched.
pub fn extract(options: &TableOptions, fetcher: &dyn Fetcher) -> Result<Extraction, SpantabError> {
    validate_options(options)?;
    let url = options
        .url
        .as_deref()
        .ok_or_else(|| SpantabError::InvalidOptions("no url to fetch".into()))?;

    let bytes = fetcher.fetch(url)?;
    let html = String::from_utf8_lossy(&bytes);
    extract_from_html(options, &html, fetcher)
}

/// [`extract`] with per-call overrides applied to a copy of `options`.
pub fn extract_with(
    options: &TableOptions,
    overrides: &OptionOverrides,
    fetcher: &dyn Fetcher,
) -> Result<Extraction, SpantabError> {
    extract(&options.merged(overrides), fetcher)
}

/// Extract from an already fetched page. `options.url`, when set, is only
/// used to resolve relative links.
pub fn extract_document(
    options: &TableOptions,
    html: &str,
    fetcher: &dyn Fetcher,
) -> Result<Extraction, SpantabError> {
    validate_options(options)?;
    extract_from_html(options, html, fetcher)
}

/// Extract from a table element parsed elsewhere.
pub fn extract_table(
    options: &TableOptions,
    table: ElementRef<'_>,
    fetcher: &dyn Fetcher,
) -> Result<Extraction, SpantabError> {
    validate_options(options)?;
    table::reconstruct(table, options, fetcher)
}

/// Every `<table>` on the page at `url`, for picking `table_index` and `table_filter`.
pub fn tables(url: &str, fetcher: &dyn Fetcher) -> Result<Vec<TableSummary>, SpantabError> {
    let bytes = fetcher.fetch(url)?;
    let document = Html::parse_document(&String::from_utf8_lossy(&bytes));
    Ok(list_tables(&document))
}

fn extract_from_html(
    options: &TableOptions,
    html: &str,
    fetcher: &dyn Fetcher,
) -> Result<Extraction, SpantabError> {
    let document = Html::parse_document(html);
    let table = locate_table(&document, &options.table_filter, options.table_index)?;
    table::reconstruct(table, options, fetcher)
}

/// Persistent options plus the fetcher to run them with.
///
/// The options never change after construction; every `*_with` call works on
/// a merged copy.
pub struct TableScraper<F: Fetcher> {
    options: TableOptions,
    fetcher: F,
}

impl<F: Fetcher> TableScraper<F> {
    pub fn new(options: TableOptions, fetcher: F) -> Result<Self, SpantabError> {
        validate_options(&options)?;
        Ok(TableScraper { options, fetcher })
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn extract(&self) -> Result<Extraction, SpantabError> {
        extract(&self.options, &self.fetcher)
    }

    pub fn extract_with(&self, overrides: &OptionOverrides) -> Result<Extraction, SpantabError> {
        extract_with(&self.options, overrides, &self.fetcher)
    }

    pub fn extract_table_with(
        &self,
        table: ElementRef<'_>,
        overrides: &OptionOverrides,
    ) -> Result<Extraction, SpantabError> {
        extract_table(&self.options.merged(overrides), table, &self.fetcher)
    }
}
