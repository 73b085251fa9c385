//! Pull individual values out of a finished grid by pattern and offset.

use crate::error::SpantabError;
use crate::model::Grid;
use crate::options::ExtractionSpec;
use regex::Regex;

/// Apply every spec in order and concatenate what they extract.
///
/// For each cell whose text contains a match of the spec's pattern, the cell
/// at the spec's row/column offset from it is extracted. An offset landing
/// outside the grid is an error.
pub fn extract_values(grid: &Grid, specs: &[ExtractionSpec]) -> Result<Vec<String>, SpantabError> {
    let mut values = Vec::new();

    for spec in specs {
        let re = Regex::new(&spec.pattern).map_err(|e| {
            SpantabError::InvalidOptions(format!("invalid pattern '{}': {}", spec.pattern, e))
        })?;

        let matches = find_matches(grid, &re);
        let limit = spec.max_matches.unwrap_or(matches.len());

        for (row, col) in matches.into_iter().take(limit) {
            values.push(cell_at_offset(grid, spec, row, col)?.to_string());
        }
    }

    Ok(values)
}

/// Coordinates of cells containing a match, column by column, top to bottom
/// within each column.
pub fn find_matches(grid: &Grid, re: &Regex) -> Vec<(usize, usize)> {
    (0..grid.width())
        .flat_map(|col| {
            grid.rows
                .iter()
                .enumerate()
                .filter(move |(_, row)| row.get(col).is_some_and(|text| re.is_match(text)))
                .map(move |(row, _)| (row, col))
        })
        .collect()
}

fn cell_at_offset<'g>(
    grid: &'g Grid,
    spec: &ExtractionSpec,
    row: usize,
    col: usize,
) -> Result<&'g str, SpantabError> {
    let target_row = row as i64 + spec.row_offset;
    let target_col = col as i64 + spec.col_offset;

    usize::try_from(target_row)
        .ok()
        .zip(usize::try_from(target_col).ok())
        .and_then(|(r, c)| grid.get(r, c))
        .ok_or_else(|| SpantabError::ExtractionOutOfBounds {
            pattern: spec.pattern.clone(),
            row: target_row,
            col: target_col,
        })
}
