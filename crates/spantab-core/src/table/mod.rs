pub mod body;
pub mod filter;
pub mod header;
pub mod link;
pub mod span;
pub mod text;

use crate::dom::find_all;
use crate::error::SpantabError;
use crate::fetch::Fetcher;
use crate::model::{Extraction, Grid};
use crate::options::TableOptions;
use crate::pattern::extract_values;
use body::BodyRows;
use filter::filter_rows;
use scraper::ElementRef;

/// Reconstruct `table` into a grid and, when extraction specs are set,
/// reduce it to the extracted values.
///
/// Options are assumed validated.
pub fn reconstruct(
    table: ElementRef<'_>,
    options: &TableOptions,
    fetcher: &dyn Fetcher,
) -> Result<Extraction, SpantabError> {
    let grid = build_grid(table, options, fetcher)?;

    if options.extract.is_empty() {
        return Ok(Extraction::Grid(grid));
    }
    Ok(Extraction::Values(extract_values(&grid, &options.extract)?))
}

/// Labels first, then the body rows streamed through the keep filters.
pub fn build_grid(
    table: ElementRef<'_>,
    options: &TableOptions,
    fetcher: &dyn Fetcher,
) -> Result<Grid, SpantabError> {
    let rows: Vec<ElementRef<'_>> = find_all(table, &["tr"]).collect();
    let headers = header::resolve(&rows, options);

    let body = rows
        .get(header::body_start(options)..)
        .unwrap_or(&[])
        .to_vec();
    let generated = BodyRows::new(body, options, fetcher)?;
    let kept = filter_rows(
        generated,
        options.row_keep.as_deref(),
        options.column_keep.as_deref(),
    )
    .collect::<Result<Vec<_>, _>>()?;

    Ok(Grid::assemble(kept, headers.columns, headers.index))
}
