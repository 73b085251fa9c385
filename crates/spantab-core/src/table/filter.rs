use crate::error::SpantabError;

fn keeps(keep: Option<&[usize]>, position: usize) -> bool {
    keep.map_or(true, |k| k.contains(&position))
}

/// Items whose position is listed in `keep`, in their original order.
/// `None` keeps everything; an empty list keeps nothing.
pub fn keep_positions<T>(items: impl IntoIterator<Item = T>, keep: Option<&[usize]>) -> Vec<T> {
    items
        .into_iter()
        .enumerate()
        .filter(|(i, _)| keeps(keep, *i))
        .map(|(_, item)| item)
        .collect()
}

/// Trim generated rows to the kept row positions and, inside each kept row,
/// the kept column positions. Positions refer to the unfiltered rows.
///
/// Errors pass through whatever row they belong to.
pub fn filter_rows<'k, I>(
    rows: I,
    row_keep: Option<&'k [usize]>,
    column_keep: Option<&'k [usize]>,
) -> impl Iterator<Item = Result<Vec<String>, SpantabError>> + 'k
where
    I: Iterator<Item = Result<Vec<String>, SpantabError>> + 'k,
{
    rows.enumerate().filter_map(move |(i, row)| match row {
        Err(e) => Some(Err(e)),
        Ok(_) if !keeps(row_keep, i) => None,
        Ok(values) => Some(Ok(keep_positions(values, column_keep))),
    })
}
