//! Integration tests for the extraction entry points.
//!
//! Pages are served by a MockFetcher from an in-memory URL map, so these
//! tests never touch the network. Every fetched URL is recorded to check
//! which links were followed.

use pretty_assertions::assert_eq;
use spantab_core::error::SpantabError;
use spantab_core::fetch::file::FileFetcher;
use spantab_core::fetch::Fetcher;
use spantab_core::model::{Extraction, Grid, Label};
use spantab_core::options::presets::load_preset;
use spantab_core::options::{ExtractionSpec, OptionOverrides, TableOptions};
use scraper::{Html, Selector};
use spantab_core::{
    extract, extract_document, extract_table, extract_with, tables, TableScraper,
};
use std::collections::HashMap;
use std::io::Write;
use std::sync::Mutex;

const LIST_URL: &str = "https://en.wikipedia.org/wiki/List_of_things";

struct MockFetcher {
    pages: HashMap<String, String>,
    fetched: Mutex<Vec<String>>,
}

impl MockFetcher {
    fn new(pages: Vec<(&str, String)>) -> Self {
        MockFetcher {
            pages: pages
                .into_iter()
                .map(|(url, html)| (url.to_string(), html))
                .collect(),
            fetched: Mutex::new(Vec::new()),
        }
    }

    fn single(html: &str) -> Self {
        Self::new(vec![(LIST_URL, html.to_string())])
    }

    fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

impl Fetcher for MockFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, SpantabError> {
        self.fetched.lock().unwrap().push(url.to_string());
        self.pages
            .get(url)
            .map(|html| html.as_bytes().to_vec())
            .ok_or_else(|| SpantabError::Network {
                url: url.to_string(),
                reason: "no such page".into(),
            })
    }

    fn backend_name(&self) -> &str {
        "mock"
    }
}

fn page(table: &str) -> String {
    format!("<html><body><p>Intro</p>{table}</body></html>")
}

fn options() -> TableOptions {
    TableOptions {
        url: Some(LIST_URL.into()),
        ..TableOptions::default()
    }
}

fn grid_of(extraction: Extraction) -> Grid {
    match extraction {
        Extraction::Grid(grid) => grid,
        Extraction::Values(values) => panic!("expected a grid, got values {values:?}"),
    }
}

fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
    data.iter()
        .map(|r| r.iter().map(|s| s.to_string()).collect())
        .collect()
}

const THREE_BY_THREE: &str = r#"<table>
    <tr><td>a</td><td>b</td><td>c</td></tr>
    <tr><td>d</td><td>e</td><td>f</td></tr>
    <tr><td>g</td><td>h</td><td>i</td></tr>
</table>"#;

// ---------------------------------------------------------------------------
// Plain tables
// ---------------------------------------------------------------------------
#[test]
fn plain_table_is_row_major_cell_text() {
    let fetcher = MockFetcher::single(&page(
        r#"<table>
            <tr><td> Lion <sup>[1]</sup></td><td>Africa &#8211; Asia</td></tr>
            <tr><td>Tiger</td><td>Asia<br/>
            </td></tr>
        </table>"#,
    ));

    let grid = grid_of(extract(&options(), &fetcher).unwrap());

    assert_eq!(grid.rows, rows(&[&["Lion", "Africa - Asia"], &["Tiger", "Asia"]]));
    assert_eq!(grid.columns, vec![Label::Position(0), Label::Position(1)]);
    assert_eq!(grid.index, vec![Label::Position(0), Label::Position(1)]);
    assert_eq!(fetcher.fetched(), vec![LIST_URL]);
}

#[test]
fn short_rows_are_padded() {
    let fetcher = MockFetcher::single(&page(
        "<table><tr><td>a</td><td>b</td><td>c</td></tr><tr><td>d</td></tr></table>",
    ));
    let grid = grid_of(extract(&options(), &fetcher).unwrap());
    assert_eq!(grid.rows, rows(&[&["a", "b", "c"], &["d", "", ""]]));
}

// ---------------------------------------------------------------------------
// Spans
// ---------------------------------------------------------------------------
#[test]
fn square_span_covers_four_coordinates() {
    let fetcher = MockFetcher::single(&page(
        r#"<table>
            <tr><td colspan="2" rowspan="2">S</td><td>A</td></tr>
            <tr><td>B</td></tr>
            <tr><td>C</td><td>D</td><td>E</td></tr>
        </table>"#,
    ));

    let grid = grid_of(extract(&options(), &fetcher).unwrap());

    for (r, c) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
        assert_eq!(grid.get(r, c), Some("S"), "at ({r}, {c})");
    }
    assert_eq!(grid.get(0, 2), Some("A"));
    assert_eq!(
        grid.rows,
        rows(&[&["S", "S", "A"], &["S", "S", "B"], &["C", "D", "E"]])
    );
}

#[test]
fn rowspan_and_colspan_on_one_cell_are_cross_applied() {
    // colspan=2 counts rows and rowspan=3 counts columns.
    let fetcher = MockFetcher::single(&page(
        r#"<table>
            <tr><td rowspan="3" colspan="2">X</td><td>a</td></tr>
            <tr><td>b</td></tr>
            <tr><td>c</td><td>d</td><td>e</td><td>f</td></tr>
        </table>"#,
    ));

    let grid = grid_of(extract(&options(), &fetcher).unwrap());

    assert_eq!(
        grid.rows,
        rows(&[
            &["X", "X", "X", "a"],
            &["X", "X", "X", "b"],
            &["c", "d", "e", "f"],
        ])
    );
}

#[test]
fn oversized_colspan_is_clamped() {
    let fetcher = MockFetcher::single(&page(
        r#"<table><tr><td colspan="18446744073709551615">a</td><td>b</td></tr></table>"#,
    ));

    let grid = grid_of(extract(&options(), &fetcher).unwrap());

    assert_eq!(grid.width(), 1001);
    assert_eq!(grid.get(0, 999), Some("a"));
    assert_eq!(grid.get(0, 1000), Some("b"));
}

#[test]
fn cells_after_colspan_keep_their_place() {
    let fetcher = MockFetcher::single(&page(
        r#"<table>
            <tr><td>1</td><td colspan="2">wide</td><td>4</td></tr>
            <tr><td>a</td><td>b</td><td>c</td><td>d</td></tr>
        </table>"#,
    ));
    let grid = grid_of(extract(&options(), &fetcher).unwrap());
    assert_eq!(
        grid.rows,
        rows(&[&["1", "wide", "wide", "4"], &["a", "b", "c", "d"]])
    );
}

// ---------------------------------------------------------------------------
// Keep filters
// ---------------------------------------------------------------------------
#[test]
fn column_keep_selects_columns() {
    let fetcher = MockFetcher::single(&page(THREE_BY_THREE));
    let opts = TableOptions {
        column_keep: Some(vec![0, 2]),
        ..options()
    };

    let grid = grid_of(extract(&opts, &fetcher).unwrap());

    assert_eq!(grid.rows, rows(&[&["a", "c"], &["d", "f"], &["g", "i"]]));
    assert_eq!(grid.columns, vec![Label::Position(0), Label::Position(2)]);
}

#[test]
fn row_keep_selects_rows() {
    let fetcher = MockFetcher::single(&page(THREE_BY_THREE));
    let opts = TableOptions {
        row_keep: Some(vec![0, 2]),
        ..options()
    };

    let grid = grid_of(extract(&opts, &fetcher).unwrap());

    assert_eq!(grid.rows, rows(&[&["a", "b", "c"], &["g", "h", "i"]]));
    assert_eq!(grid.index, vec![Label::Position(0), Label::Position(2)]);
}

#[test]
fn empty_keep_lists_keep_nothing() {
    let fetcher = MockFetcher::single(&page(THREE_BY_THREE));

    let no_rows = TableOptions {
        row_keep: Some(vec![]),
        ..options()
    };
    let grid = grid_of(extract(&no_rows, &fetcher).unwrap());
    assert!(grid.is_empty());

    let no_columns = TableOptions {
        column_keep: Some(vec![]),
        ..options()
    };
    let grid = grid_of(extract(&no_columns, &fetcher).unwrap());
    assert_eq!(grid.width(), 0);
    assert_eq!(grid.height(), 3);
}

#[test]
fn absent_keep_lists_keep_everything() {
    let fetcher = MockFetcher::single(&page(THREE_BY_THREE));
    let grid = grid_of(extract(&options(), &fetcher).unwrap());
    assert_eq!(grid.width(), 3);
    assert_eq!(grid.height(), 3);
}

// ---------------------------------------------------------------------------
// Headers
// ---------------------------------------------------------------------------
#[test]
fn column_header_labels() {
    let fetcher = MockFetcher::single(&page(
        r#"<table>
            <tr><th>Name</th><th>Age</th></tr>
            <tr><td>Ann</td><td>31</td></tr>
            <tr><td>Bob</td><td>42</td></tr>
        </table>"#,
    ));
    let opts = TableOptions {
        column_header: true,
        ..options()
    };

    let grid = grid_of(extract(&opts, &fetcher).unwrap());

    assert_eq!(grid.columns, vec![Label::from("Name"), Label::from("Age")]);
    assert_eq!(grid.rows, rows(&[&["Ann", "31"], &["Bob", "42"]]));
}

#[test]
fn row_header_labels() {
    let fetcher = MockFetcher::single(&page(
        r#"<table>
            <tr><th></th><th>Q1</th><th>Q2</th></tr>
            <tr><th>North</th><td>1</td><td>2</td></tr>
            <tr><th>South</th><td>3</td><td>4</td></tr>
        </table>"#,
    ));
    let opts = TableOptions {
        column_header: true,
        row_header: true,
        ..options()
    };

    let grid = grid_of(extract(&opts, &fetcher).unwrap());

    assert_eq!(grid.columns, vec![Label::from("Q1"), Label::from("Q2")]);
    assert_eq!(grid.index, vec![Label::from("North"), Label::from("South")]);
    assert_eq!(grid.rows, rows(&[&["1", "2"], &["3", "4"]]));
}

// ---------------------------------------------------------------------------
// Table location
// ---------------------------------------------------------------------------
#[test]
fn table_located_by_filter_and_index() {
    let fetcher = MockFetcher::single(&page(
        r#"<table class="nav"><tr><td>menu</td></tr></table>
        <table class="wikitable sortable"><tr><td>first</td></tr></table>
        <table class="wikitable"><tr><td>second</td></tr></table>"#,
    ));
    let mut opts = options();
    opts.table_filter.insert("class".into(), "wikitable".into());
    opts.table_index = 1;

    let grid = grid_of(extract(&opts, &fetcher).unwrap());
    assert_eq!(grid.rows, rows(&[&["second"]]));
}

#[test]
fn tables_lists_every_table_on_page() {
    let fetcher = MockFetcher::single(&page(
        r#"<table class="nav" id="top"><tr><td>menu</td></tr></table>
        <table class="wikitable"><tr><td>a</td></tr><tr><td>b</td></tr></table>"#,
    ));

    let summaries = tables(LIST_URL, &fetcher).unwrap();

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].id.as_deref(), Some("top"));
    assert_eq!(summaries[1].class.as_deref(), Some("wikitable"));
    assert_eq!(summaries[1].rows, 2);
}

#[test]
fn missing_table_is_lookup_error() {
    let fetcher = MockFetcher::single(&page(THREE_BY_THREE));
    let mut opts = options();
    opts.table_filter.insert("class".into(), "infobox".into());

    let err = extract(&opts, &fetcher).unwrap_err();
    assert!(matches!(
        err,
        SpantabError::TableNotFound { index: 0, found: 0 }
    ));
}

// ---------------------------------------------------------------------------
// Regex extraction
// ---------------------------------------------------------------------------
const INFOBOX: &str = r#"<table class="infobox">
    <tr><th colspan="2">Lion</th></tr>
    <tr><td>Kingdom:</td><td>Animalia</td></tr>
    <tr><td></td><td>Conservation status</td></tr>
    <tr><td></td><td>Vulnerable <sup>[2]</sup></td></tr>
</table>"#;

#[test]
fn value_below_conservation_status() {
    let fetcher = MockFetcher::single(&page(INFOBOX));
    let opts = TableOptions {
        extract: vec![ExtractionSpec::new("Conservation status")
            .offset(1, 0)
            .max_matches(1)],
        ..options()
    };

    let extraction = extract(&opts, &fetcher).unwrap();
    assert!(extraction.grid().is_none());
    assert_eq!(extraction.values(), Some(&["Vulnerable".to_string()][..]));
}

#[test]
fn offset_outside_grid_is_lookup_error() {
    let fetcher = MockFetcher::single(&page(INFOBOX));
    let opts = TableOptions {
        extract: vec![ExtractionSpec::new("Kingdom").offset(0, 5)],
        ..options()
    };
    assert!(matches!(
        extract(&opts, &fetcher),
        Err(SpantabError::ExtractionOutOfBounds { row: 1, col: 5, .. })
    ));
}

// ---------------------------------------------------------------------------
// Link following
// ---------------------------------------------------------------------------
fn species_page(status: &str) -> String {
    page(&format!(
        r#"<table class="infobox">
            <tr><td>Status</td><td>{status}</td></tr>
        </table>"#
    ))
}

fn status_lookup() -> Box<TableOptions> {
    let mut nested = TableOptions {
        extract: vec![ExtractionSpec::new("^Status$").offset(0, 1)],
        ..TableOptions::default()
    };
    nested.table_filter.insert("class".into(), "infobox".into());
    Box::new(nested)
}

fn linked_list() -> String {
    page(
        r#"<table>
            <tr><td><a href="/wiki/Africa">Africa</a></td><td><a href="/wiki/Lion">Lion</a></td></tr>
            <tr><td><a href="/wiki/Asia">Asia</a></td><td><a href="/wiki/Tiger">Tiger</a></td></tr>
        </table>"#,
    )
}

#[test]
fn column_links_followed_into_nested_lookup() {
    let fetcher = MockFetcher::new(vec![
        (LIST_URL, linked_list()),
        ("https://en.wikipedia.org/wiki/Lion", species_page("Vulnerable")),
        ("https://en.wikipedia.org/wiki/Tiger", species_page("Endangered")),
    ]);
    let opts = TableOptions {
        column_link_scope: Some(vec![1]),
        on_link: Some(status_lookup()),
        ..options()
    };

    let grid = grid_of(extract(&opts, &fetcher).unwrap());

    assert_eq!(
        grid.rows,
        rows(&[
            &["Africa", "Lion", "Vulnerable"],
            &["Asia", "Tiger", "Endangered"],
        ])
    );
    assert_eq!(
        fetcher.fetched(),
        vec![
            LIST_URL,
            "https://en.wikipedia.org/wiki/Lion",
            "https://en.wikipedia.org/wiki/Tiger",
        ]
    );
}

#[test]
fn row_links_followed_into_nested_lookup() {
    let fetcher = MockFetcher::new(vec![
        (LIST_URL, linked_list()),
        ("https://en.wikipedia.org/wiki/Asia", species_page("continent")),
        ("https://en.wikipedia.org/wiki/Tiger", species_page("Endangered")),
    ]);
    let opts = TableOptions {
        row_link_scope: Some(vec![1]),
        on_link: Some(status_lookup()),
        ..options()
    };

    let grid = grid_of(extract(&opts, &fetcher).unwrap());

    assert_eq!(
        grid.rows,
        rows(&[
            &["Africa", "Lion", "", ""],
            &["Asia", "Tiger", "continent", "Endangered"],
        ])
    );
}

#[test]
fn unrestricted_link_scope_follows_every_column() {
    let fetcher = MockFetcher::new(vec![
        (LIST_URL, linked_list()),
        ("https://en.wikipedia.org/wiki/Africa", species_page("a")),
        ("https://en.wikipedia.org/wiki/Lion", species_page("b")),
        ("https://en.wikipedia.org/wiki/Asia", species_page("c")),
        ("https://en.wikipedia.org/wiki/Tiger", species_page("d")),
    ]);
    let opts = TableOptions {
        column_link_scope: None,
        on_link: Some(status_lookup()),
        ..options()
    };

    let grid = grid_of(extract(&opts, &fetcher).unwrap());

    assert_eq!(
        grid.rows,
        rows(&[&["Africa", "Lion", "a", "b"], &["Asia", "Tiger", "c", "d"]])
    );
    assert_eq!(fetcher.fetched().len(), 5);
}

#[test]
fn empty_link_scopes_follow_nothing() {
    let fetcher = MockFetcher::single(&linked_list());
    let opts = TableOptions {
        column_link_scope: Some(vec![]),
        row_link_scope: Some(vec![]),
        on_link: Some(status_lookup()),
        ..options()
    };

    let grid = grid_of(extract(&opts, &fetcher).unwrap());

    assert_eq!(grid.width(), 2);
    assert_eq!(fetcher.fetched(), vec![LIST_URL]);
}

#[test]
fn nested_lookup_without_extraction_contributes_whole_grid() {
    let fetcher = MockFetcher::new(vec![
        (
            LIST_URL,
            page(r#"<table><tr><td><a href="/wiki/Lion">Lion</a></td></tr></table>"#),
        ),
        (
            "https://en.wikipedia.org/wiki/Lion",
            page("<table><tr><td>p</td><td>q</td></tr><tr><td>r</td><td>s</td></tr></table>"),
        ),
    ]);
    let opts = TableOptions {
        column_link_scope: Some(vec![0]),
        on_link: Some(Box::default()),
        ..options()
    };

    let grid = grid_of(extract(&opts, &fetcher).unwrap());
    assert_eq!(grid.rows, rows(&[&["Lion", "p", "q", "r", "s"]]));
}

#[test]
fn fragment_and_missing_links_are_skipped() {
    let fetcher = MockFetcher::single(&page(
        r##"<table>
            <tr><td><a href="#cite_note-1">note</a></td></tr>
            <tr><td><a>bare</a></td></tr>
            <tr><td>text</td></tr>
        </table>"##,
    ));
    let opts = TableOptions {
        column_link_scope: Some(vec![0]),
        on_link: Some(status_lookup()),
        ..options()
    };

    let grid = grid_of(extract(&opts, &fetcher).unwrap());

    assert_eq!(grid.rows, rows(&[&["note"], &["bare"], &["text"]]));
    assert_eq!(fetcher.fetched(), vec![LIST_URL]);
}

#[test]
fn nested_fetch_failure_propagates() {
    let fetcher = MockFetcher::new(vec![
        (LIST_URL, linked_list()),
        ("https://en.wikipedia.org/wiki/Lion", species_page("Vulnerable")),
    ]);
    let opts = TableOptions {
        column_link_scope: Some(vec![1]),
        on_link: Some(status_lookup()),
        ..options()
    };

    let err = extract(&opts, &fetcher).unwrap_err();
    match err {
        SpantabError::Network { url, .. } => {
            assert_eq!(url, "https://en.wikipedia.org/wiki/Tiger")
        }
        other => panic!("expected a network error, got {other:?}"),
    }
}

#[test]
fn nested_lookup_failure_propagates() {
    let fetcher = MockFetcher::new(vec![
        (LIST_URL, linked_list()),
        ("https://en.wikipedia.org/wiki/Lion", page("<p>no tables</p>")),
    ]);
    let opts = TableOptions {
        column_link_scope: Some(vec![1]),
        on_link: Some(status_lookup()),
        ..options()
    };

    assert!(matches!(
        extract(&opts, &fetcher),
        Err(SpantabError::TableNotFound { .. })
    ));
}

// ---------------------------------------------------------------------------
// Configuration errors come before any fetch
// ---------------------------------------------------------------------------
#[test]
fn conflicting_link_scopes_rejected_before_fetch() {
    let fetcher = MockFetcher::single(&linked_list());
    let opts = TableOptions {
        column_link_scope: Some(vec![1]),
        row_link_scope: Some(vec![0]),
        on_link: Some(status_lookup()),
        ..options()
    };

    assert!(matches!(
        extract(&opts, &fetcher),
        Err(SpantabError::ConflictingLinkScope)
    ));
    assert!(fetcher.fetched().is_empty());
}

#[test]
fn nested_conflict_rejected_before_fetch() {
    let fetcher = MockFetcher::single(&linked_list());
    let nested = TableOptions {
        column_link_scope: Some(vec![0]),
        row_link_scope: None,
        on_link: Some(status_lookup()),
        ..TableOptions::default()
    };
    let opts = TableOptions {
        column_link_scope: Some(vec![1]),
        on_link: Some(Box::new(nested)),
        ..options()
    };

    assert!(matches!(
        extract(&opts, &fetcher),
        Err(SpantabError::ConflictingLinkScope)
    ));
    assert!(fetcher.fetched().is_empty());
}

#[test]
fn missing_url_is_configuration_error() {
    let fetcher = MockFetcher::single(THREE_BY_THREE);
    assert!(matches!(
        extract(&TableOptions::default(), &fetcher),
        Err(SpantabError::InvalidOptions(_))
    ));
    assert!(fetcher.fetched().is_empty());
}

// ---------------------------------------------------------------------------
// Idempotence and scoped overrides
// ---------------------------------------------------------------------------
#[test]
fn repeated_extraction_is_identical() {
    let fetcher = MockFetcher::new(vec![
        (LIST_URL, linked_list()),
        ("https://en.wikipedia.org/wiki/Lion", species_page("Vulnerable")),
        ("https://en.wikipedia.org/wiki/Tiger", species_page("Endangered")),
    ]);
    let opts = TableOptions {
        column_header: true,
        column_link_scope: Some(vec![1]),
        on_link: Some(status_lookup()),
        ..options()
    };

    let first = extract(&opts, &fetcher).unwrap();
    let second = extract(&opts, &fetcher).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn overrides_do_not_leak_into_persistent_options() {
    let fetcher = MockFetcher::single(&page(THREE_BY_THREE));
    let scraper = TableScraper::new(options(), fetcher).unwrap();

    let narrowed = scraper
        .extract_with(&OptionOverrides {
            column_keep: Some(Some(vec![1])),
            ..OptionOverrides::default()
        })
        .unwrap();
    let full = scraper.extract().unwrap();

    assert_eq!(grid_of(narrowed).width(), 1);
    assert_eq!(full.grid().map(Grid::width), Some(3));
    assert!(full.values().is_none());
    assert_eq!(scraper.options().column_keep, None);
    assert_eq!(scraper.fetcher().fetched(), vec![LIST_URL, LIST_URL]);
}

#[test]
fn extract_with_merges_overrides() {
    let fetcher = MockFetcher::single(&page(THREE_BY_THREE));
    let overrides = OptionOverrides {
        row_keep: Some(Some(vec![1])),
        ..OptionOverrides::default()
    };
    let grid = grid_of(extract_with(&options(), &overrides, &fetcher).unwrap());
    assert_eq!(grid.rows, rows(&[&["d", "e", "f"]]));
}

#[test]
fn scraper_rejects_invalid_options() {
    let opts = TableOptions {
        row_link_scope: Some(vec![0]),
        ..options()
    };
    assert!(matches!(
        TableScraper::new(opts, MockFetcher::single("")),
        Err(SpantabError::InvalidOptions(_))
    ));
}

// ---------------------------------------------------------------------------
// Documents and files
// ---------------------------------------------------------------------------
#[test]
fn extract_from_already_fetched_document() {
    let fetcher = MockFetcher::new(vec![]);
    let grid = grid_of(extract_document(&TableOptions::default(), THREE_BY_THREE, &fetcher).unwrap());
    assert_eq!(grid.height(), 3);
    assert!(fetcher.fetched().is_empty());
}

#[test]
fn extract_from_parsed_table_element() {
    let document = Html::parse_document(&page(
        r#"<table><tr><td>skip</td></tr></table>
        <table id="wanted"><tr><td>x</td><td rowspan="2">y</td></tr><tr><td>z</td></tr></table>"#,
    ));
    let selector = Selector::parse("table#wanted").unwrap();
    let table = document.select(&selector).next().unwrap();
    let fetcher = MockFetcher::new(vec![]);

    let grid = grid_of(extract_table(&TableOptions::default(), table, &fetcher).unwrap());
    assert_eq!(grid.rows, rows(&[&["x", "y"], &["z", "y"]]));

    let scraper = TableScraper::new(TableOptions::default(), fetcher).unwrap();
    let overrides = OptionOverrides {
        column_keep: Some(Some(vec![1])),
        ..OptionOverrides::default()
    };
    let grid = grid_of(scraper.extract_table_with(table, &overrides).unwrap());
    assert_eq!(grid.rows, rows(&[&["y"], &["y"]]));
}

#[test]
fn extract_from_local_file() {
    let mut file = tempfile::Builder::new().suffix(".html").tempfile().unwrap();
    write!(file, "{}", page(THREE_BY_THREE)).unwrap();
    let opts = TableOptions {
        url: Some(file.path().to_string_lossy().into_owned()),
        row_keep: Some(vec![2]),
        ..TableOptions::default()
    };

    let grid = grid_of(extract(&opts, &FileFetcher::new()).unwrap());
    assert_eq!(grid.rows, rows(&[&["g", "h", "i"]]));
}

// ---------------------------------------------------------------------------
// Built-in presets
// ---------------------------------------------------------------------------
#[test]
fn animals_preset_end_to_end() {
    let list = page(
        r#"<table class="wikitable animal-table">
            <tr><th>Group</th><th>Animal</th></tr>
            <tr><td>Cats</td><td><a href="/wiki/Lion">Lion</a></td></tr>
            <tr><td>Cats</td><td><a href="/wiki/Tiger">Tiger</a></td></tr>
        </table>"#,
    );
    let infobox = |status: &str| {
        page(&format!(
            r#"<table class="infobox biota">
                <tr><th>Kingdom:</th><td>Animalia</td></tr>
                <tr><td colspan="2">Conservation status</td></tr>
                <tr><td colspan="2">{status}</td></tr>
            </table>"#
        ))
    };
    let fetcher = MockFetcher::new(vec![
        ("https://en.wikipedia.org/wiki/List_of_animal_names", list),
        ("https://en.wikipedia.org/wiki/Lion", infobox("Vulnerable")),
        ("https://en.wikipedia.org/wiki/Tiger", infobox("Endangered")),
    ]);

    let opts = load_preset("animals")
        .unwrap()
        .with_url("https://en.wikipedia.org/wiki/List_of_animal_names");
    let grid = grid_of(extract(&opts, &fetcher).unwrap());

    assert_eq!(
        grid.columns,
        vec![
            Label::from("Group"),
            Label::from("Animal"),
            Label::Position(2),
            Label::Position(3),
        ]
    );
    assert_eq!(
        grid.rows,
        rows(&[
            &["Cats", "Lion", "Vulnerable", "Vulnerable"],
            &["Cats", "Tiger", "Endangered", "Endangered"],
        ])
    );
}
