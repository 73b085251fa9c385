use spantab_core::model::{Extraction, Grid};

pub fn render(extraction: &Extraction) -> String {
    match extraction {
        Extraction::Grid(grid) => render_grid(grid),
        Extraction::Values(values) => values.iter().map(|v| format!("{v}\n")).collect(),
    }
}

/// Aligned text table, row labels in the first column.
pub fn render_grid(grid: &Grid) -> String {
    let header: Vec<String> = std::iter::once(String::new())
        .chain(grid.columns.iter().map(ToString::to_string))
        .collect();
    let body: Vec<Vec<String>> = grid
        .rows
        .iter()
        .zip(&grid.index)
        .map(|(row, label)| {
            std::iter::once(label.to_string())
                .chain(row.iter().cloned())
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &body {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let total = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    let mut lines = vec![format_line(&header, &widths), "-".repeat(total)];
    lines.extend(body.iter().map(|row| format_line(row, &widths)));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join("  ");
    line.trim_end().to_string()
}
