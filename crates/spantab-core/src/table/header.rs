use crate::dom::{find_all, find_first, is_header_cell, CELL_TAGS};
use crate::model::{positions, Label};
use crate::options::TableOptions;
use crate::table::filter::keep_positions;
use crate::table::span::CellSpan;
use crate::table::text::clean_text;
use scraper::ElementRef;

/// Row and column labels, resolved before any body row is generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headers {
    pub columns: Vec<Label>,
    pub index: Vec<Label>,
}

pub fn resolve(rows: &[ElementRef<'_>], options: &TableOptions) -> Headers {
    Headers {
        columns: column_labels(rows, options),
        index: row_labels(rows, options),
    }
}

/// Index of the first body row.
pub fn body_start(options: &TableOptions) -> usize {
    usize::from(options.column_header)
}

/// Column labels from the first row.
///
/// The width is the sum of the first row's colspans. Positions default to
/// their number; in column-header mode a `<th>` cell puts its text at its own
/// position in the row. With a row header the first cell labels the row
/// index, not a column, and is left out.
pub fn column_labels(rows: &[ElementRef<'_>], options: &TableOptions) -> Vec<Label> {
    let Some(first) = rows.first() else {
        return Vec::new();
    };

    let skip = usize::from(options.row_header);
    let cells: Vec<ElementRef<'_>> = find_all(*first, CELL_TAGS).skip(skip).collect();

    let width: usize = cells
        .iter()
        .map(|cell| CellSpan::of(*cell).and_then(|s| s.colspan).unwrap_or(1))
        .sum();
    let mut labels = positions(width);

    if options.column_header {
        for (idx, cell) in cells.iter().enumerate() {
            if is_header_cell(*cell) {
                labels[idx] = Label::Text(clean_text(*cell));
            }
        }
    }

    keep_positions(labels, options.column_keep.as_deref())
}

/// Row labels for the body rows.
///
/// Positions count body rows only. In row-header mode a row whose first cell
/// is a `<th>` is labelled with that cell's text.
pub fn row_labels(rows: &[ElementRef<'_>], options: &TableOptions) -> Vec<Label> {
    let body = rows.get(body_start(options)..).unwrap_or(&[]);

    let labels = body.iter().enumerate().map(|(i, row)| {
        if options.row_header {
            if let Some(cell) = find_first(*row, CELL_TAGS).filter(|c| is_header_cell(*c)) {
                return Label::Text(clean_text(cell));
            }
        }
        Label::Position(i)
    });

    keep_positions(labels, options.row_keep.as_deref())
}
