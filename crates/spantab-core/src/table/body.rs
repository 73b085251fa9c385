use crate::dom::{find_all, CELL_TAGS};
use crate::error::SpantabError;
use crate::fetch::Fetcher;
use crate::options::TableOptions;
use crate::table::link::LinkFollower;
use crate::table::span::{CellSpan, SpanTracker};
use crate::table::text::clean_text;
use scraper::ElementRef;

/// Lazily generated body rows.
///
/// Each `next()` reconstructs one `<tr>`: values projected by earlier spans
/// are slotted in where they land, and values pulled from followed links are
/// appended after the row's own cells. Rows are not padded here.
///
/// The span state carries over from row to row, so the sequence can only be
/// consumed once and in order.
pub struct BodyRows<'a> {
    rows: std::iter::Enumerate<std::vec::IntoIter<ElementRef<'a>>>,
    spans: SpanTracker,
    skip_cells: usize,
    links: LinkFollower<'a>,
}

impl<'a> BodyRows<'a> {
    /// `rows` are the body rows only, header row excluded.
    pub fn new(
        rows: Vec<ElementRef<'a>>,
        options: &'a TableOptions,
        fetcher: &'a dyn Fetcher,
    ) -> Result<Self, SpantabError> {
        Ok(BodyRows {
            rows: rows.into_iter().enumerate(),
            spans: SpanTracker::new(),
            skip_cells: usize::from(options.row_header),
            links: LinkFollower::new(options, fetcher)?,
        })
    }

    fn build_row(&mut self, row: usize, tr: ElementRef<'a>) -> Result<Vec<String>, SpantabError> {
        let mut values = self.spans.run_at(row, 0);
        let mut linked = Vec::new();
        let mut cursor = values.len();

        for cell in find_all(tr, CELL_TAGS).skip(self.skip_cells) {
            let col = cursor;
            let text = clean_text(cell);

            if let Some(span) = CellSpan::of(cell) {
                self.spans.register(row, col, &text, span);
            }

            // A spanning cell covers its own origin and is emitted through the run below.
            if !self.spans.is_covered(row, col) {
                values.push(text);
                cursor += 1;
            }

            let run = self.spans.take(row, col);
            cursor += run.len();
            values.extend(run);

            linked.extend(self.links.follow(row, col, cell)?);
        }

        values.extend(linked);
        Ok(values)
    }
}

impl<'a> Iterator for BodyRows<'a> {
    type Item = Result<Vec<String>, SpantabError>;

    fn next(&mut self) -> Option<Self::Item> {
        let (row, tr) = self.rows.next()?;
        Some(self.build_row(row, tr))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}
