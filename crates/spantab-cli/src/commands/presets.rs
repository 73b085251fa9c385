use spantab_core::error::SpantabError;
use spantab_core::options::presets;

pub fn list() -> Result<(), SpantabError> {
    println!("Available presets:\n");
    for name in presets::PRESETS {
        let options = presets::load_preset(name)?;
        println!("  {:<10} {}", name, presets::describe(name).unwrap_or(""));
        match options.url.as_deref() {
            Some(url) => println!("             {url}"),
            None => println!("             (pass the page URL to `spantab extract`)"),
        }
        println!();
    }
    Ok(())
}

pub fn show(name: &str) -> Result<(), SpantabError> {
    // Load first so unknown names fail with the list of presets.
    presets::load_preset(name)?;
    if let Some(json) = presets::preset_json(name) {
        print!("{json}");
    }
    Ok(())
}
