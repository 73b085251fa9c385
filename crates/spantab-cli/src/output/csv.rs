use csv::{QuoteStyle, WriterBuilder};
use spantab_core::error::SpantabError;
use spantab_core::model::Extraction;

/// Quote-all CSV. A grid gets its column labels as the header record; values
/// are written one per record under a `value` header.
pub fn render(extraction: &Extraction) -> Result<String, SpantabError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    match extraction {
        Extraction::Grid(grid) => {
            writer
                .write_record(grid.columns.iter().map(ToString::to_string))
                .map_err(std::io::Error::from)?;
            for row in &grid.rows {
                writer.write_record(row).map_err(std::io::Error::from)?;
            }
        }
        Extraction::Values(values) => {
            writer.write_record(["value"]).map_err(std::io::Error::from)?;
            for value in values {
                writer.write_record([value]).map_err(std::io::Error::from)?;
            }
        }
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
