use serde::{Deserialize, Serialize};
use std::fmt;

/// A row or column label: the positional default, or header text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Position(usize),
    Text(String),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Position(i) => write!(f, "{i}"),
            Label::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Label::Text(s.to_string())
    }
}

impl From<usize> for Label {
    fn from(i: usize) -> Self {
        Label::Position(i)
    }
}

/// Positional labels `0..n`.
pub fn positions(n: usize) -> Vec<Label> {
    (0..n).map(Label::Position).collect()
}

/// A reconstructed table: every row has `columns.len()` cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub columns: Vec<Label>,
    pub index: Vec<Label>,
    pub rows: Vec<Vec<String>>,
}

impl Grid {
    /// Build a rectangular grid from generated rows.
    ///
    /// Rows shorter than the widest row (or the column labels) are padded with
    /// empty cells. Column labels missing past the header width become their
    /// position, and the row index is sized to the number of rows the same way.
    pub fn assemble(mut rows: Vec<Vec<String>>, mut columns: Vec<Label>, mut index: Vec<Label>) -> Grid {
        let width = rows
            .iter()
            .map(Vec::len)
            .max()
            .unwrap_or(0)
            .max(columns.len());

        for row in &mut rows {
            row.resize(width, String::new());
        }

        extend_with_positions(&mut columns, width);
        extend_with_positions(&mut index, rows.len());
        index.truncate(rows.len());

        Grid {
            columns,
            index,
            rows,
        }
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell text at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// Every cell, row-major.
    pub fn into_values(self) -> Vec<String> {
        self.rows.into_iter().flatten().collect()
    }
}

fn extend_with_positions(labels: &mut Vec<Label>, len: usize) {
    let start = labels.len();
    labels.extend((start..len).map(Label::Position));
}

/// Result of one extraction call.
///
/// Without extraction specs the grid itself is the result; with them, the
/// flat list of values pulled out of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Extraction {
    Grid(Grid),
    Values(Vec<String>),
}

impl Extraction {
    pub fn grid(&self) -> Option<&Grid> {
        match self {
            Extraction::Grid(grid) => Some(grid),
            Extraction::Values(_) => None,
        }
    }

    pub fn values(&self) -> Option<&[String]> {
        match self {
            Extraction::Grid(_) => None,
            Extraction::Values(values) => Some(values),
        }
    }

    /// Flatten to the values a nested lookup contributes to an outer row.
    pub fn into_values(self) -> Vec<String> {
        match self {
            Extraction::Grid(grid) => grid.into_values(),
            Extraction::Values(values) => values,
        }
    }
}
