use crate::error::SpantabError;
use crate::options::{validate_options, TableOptions};

const ANIMALS_JSON: &str = include_str!("../../../../presets/animals.json");
const SINCLAIR_JSON: &str = include_str!("../../../../presets/sinclair.json");

/// Available built-in configurations.
pub const PRESETS: &[&str] = &["animals", "sinclair"];

/// One-line description of a preset, for listings.
pub fn describe(name: &str) -> Option<&'static str> {
    match name {
        "animals" => Some(
            "Animal table (class animal-table); follows column 1 links to the infobox conservation status",
        ),
        "sinclair" => Some(
            "Sinclair Broadcast Group station list (class toccolours); follows column 1 links to the infobox transmitter location",
        ),
        _ => None,
    }
}

/// Raw JSON of a preset.
pub fn preset_json(name: &str) -> Option<&'static str> {
    match name {
        "animals" => Some(ANIMALS_JSON),
        "sinclair" => Some(SINCLAIR_JSON),
        _ => None,
    }
}

/// Load a built-in configuration by name.
pub fn load_preset(name: &str) -> Result<TableOptions, SpantabError> {
    let json = preset_json(name).ok_or_else(|| {
        SpantabError::InvalidOptions(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))
    })?;
    let options: TableOptions = serde_json::from_str(json)?;
    validate_options(&options)?;
    Ok(options)
}
