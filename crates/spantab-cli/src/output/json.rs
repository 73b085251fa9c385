use spantab_core::error::SpantabError;
use spantab_core::model::Extraction;

pub fn render(extraction: &Extraction) -> Result<String, SpantabError> {
    let mut json = serde_json::to_string_pretty(extraction)?;
    json.push('\n');
    Ok(json)
}
