//! Thin layer over the `scraper` tree: tag/attribute lookups and table location.

use crate::error::SpantabError;
use crate::options::TableFilter;
use scraper::{ElementRef, Html};
use serde::Serialize;

pub const CELL_TAGS: &[&str] = &["th", "td"];

/// Elements at or below `root` whose tag name is one of `tags`, in document order.
pub fn find_all<'a, 't>(
    root: ElementRef<'a>,
    tags: &'t [&'t str],
) -> impl Iterator<Item = ElementRef<'a>> + 't
where
    'a: 't,
{
    root.descendants()
        .filter_map(ElementRef::wrap)
        .filter(move |el| tags.contains(&el.value().name()))
}

/// First element at or below `root` with one of the given tag names.
pub fn find_first<'a>(root: ElementRef<'a>, tags: &[&str]) -> Option<ElementRef<'a>> {
    find_all(root, tags).next()
}

/// Check an element against an attribute filter.
///
/// `class` matches any one of the element's classes (or the whole attribute
/// value); every other attribute must match exactly.
pub fn matches_attributes(element: ElementRef<'_>, filter: &TableFilter) -> bool {
    let el = element.value();
    filter.iter().all(|(name, expected)| {
        if name == "class" {
            el.classes().any(|c| c == expected) || el.attr("class") == Some(expected.as_str())
        } else {
            el.attr(name) == Some(expected.as_str())
        }
    })
}

/// Largest `colspan` and `rowspan` a browser honours.
pub const MAX_COLSPAN: usize = 1000;
pub const MAX_ROWSPAN: usize = 65534;

/// Read a `rowspan`/`colspan` style attribute.
///
/// Returns `None` when the attribute is absent. Values that are not positive
/// integers count as 1, and values past the HTML limit are clamped to it.
pub fn span_attr(element: ElementRef<'_>, name: &str) -> Option<usize> {
    let raw = element.value().attr(name)?;
    let limit = if name == "colspan" { MAX_COLSPAN } else { MAX_ROWSPAN };
    let digits = raw.trim();
    let value = match digits.parse::<usize>() {
        Ok(0) => 1,
        Ok(n) => n,
        Err(_) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => usize::MAX,
        Err(_) => 1,
    };
    Some(value.min(limit))
}

pub fn is_header_cell(element: ElementRef<'_>) -> bool {
    element.value().name() == "th"
}

/// The `href` of the first hyperlink inside `element`, if that link has one.
pub fn first_link_href<'a>(element: ElementRef<'a>) -> Option<&'a str> {
    find_first(element, &["a"])?.value().attr("href")
}

/// Find the `index`-th `<table>` matching `filter`.
pub fn locate_table<'a>(
    document: &'a Html,
    filter: &TableFilter,
    index: usize,
) -> Result<ElementRef<'a>, SpantabError> {
    let tables: Vec<ElementRef<'a>> = find_all(document.root_element(), &["table"])
        .filter(|t| matches_attributes(*t, filter))
        .collect();
    let found = tables.len();
    tables
        .into_iter()
        .nth(index)
        .ok_or(SpantabError::TableNotFound { index, found })
}

/// Short description of one table on a page.
#[derive(Debug, Clone, Serialize)]
pub struct TableSummary {
    pub index: usize,
    pub class: Option<String>,
    pub id: Option<String>,
    pub rows: usize,
}

pub fn list_tables(document: &Html) -> Vec<TableSummary> {
    find_all(document.root_element(), &["table"])
        .enumerate()
        .map(|(index, table)| TableSummary {
            index,
            class: table.value().attr("class").map(str::to_string),
            id: table.value().attr("id").map(str::to_string),
            rows: find_all(table, &["tr"]).count(),
        })
        .collect()
}
