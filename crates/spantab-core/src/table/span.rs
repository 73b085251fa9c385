use crate::dom::span_attr;
use scraper::ElementRef;
use std::collections::BTreeMap;

/// Span attributes present on a cell. An attribute counts as soon as it is
/// present, even with the value 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSpan {
    pub rowspan: Option<usize>,
    pub colspan: Option<usize>,
}

impl CellSpan {
    /// Read the span attributes of `cell`. `None` when it has neither.
    pub fn of(cell: ElementRef<'_>) -> Option<CellSpan> {
        let span = CellSpan {
            rowspan: span_attr(cell, "rowspan"),
            colspan: span_attr(cell, "colspan"),
        };
        if span.rowspan.is_none() && span.colspan.is_none() {
            None
        } else {
            Some(span)
        }
    }

    /// Number of (rows, columns) the cell projects into.
    ///
    /// When both attributes are present they are cross-applied: `colspan`
    /// counts rows and `rowspan` counts columns. A cell with only one of them
    /// extends along that attribute's own axis.
    pub fn extent(&self) -> (usize, usize) {
        match (self.rowspan, self.colspan) {
            (Some(rowspan), Some(colspan)) => (colspan, rowspan),
            (Some(rowspan), None) => (rowspan, 1),
            (None, Some(colspan)) => (1, colspan),
            (None, None) => (1, 1),
        }
    }
}

/// Text projected by spanning cells into the coordinates they cover.
///
/// Scoped to one table. Entries are never removed: every row a span covers
/// reads the same projection.
#[derive(Debug, Default)]
pub struct SpanTracker {
    projections: BTreeMap<(usize, usize), String>,
}

impl SpanTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Project `text` from a spanning cell at `(row, col)` into every
    /// coordinate of its extent, the origin included.
    pub fn register(&mut self, row: usize, col: usize, text: &str, span: CellSpan) {
        let (rows, cols) = span.extent();
        for r in row..row.saturating_add(rows) {
            for c in col..col.saturating_add(cols) {
                self.projections.insert((r, c), text.to_string());
            }
        }
    }

    pub fn is_covered(&self, row: usize, col: usize) -> bool {
        self.projections.contains_key(&(row, col))
    }

    /// Projected values in `row` forming the contiguous run that begins at
    /// `from` or, when `from` itself is free, at `from + 1`. Empty when
    /// neither is covered.
    pub fn take(&self, row: usize, from: usize) -> Vec<String> {
        if self.is_covered(row, from) {
            self.run_at(row, from)
        } else {
            self.run_at(row, from + 1)
        }
    }

    /// Projected values in `row` forming the contiguous run that begins exactly at `start`.
    pub fn run_at(&self, row: usize, start: usize) -> Vec<String> {
        self.projections
            .range((row, start)..)
            .enumerate()
            .take_while(|(i, ((r, c), _))| *r == row && *c == start + i)
            .map(|(_, (_, text))| text.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.projections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projections.is_empty()
    }
}
