use spantab_core::error::SpantabError;
use spantab_core::fetch::AutoFetcher;

pub fn run(url: &str, output_format: &str) -> Result<(), SpantabError> {
    let fetcher = AutoFetcher::new()?;
    let summaries = spantab_core::tables(url, &fetcher)?;
    tracing::info!(tables = summaries.len(), url, "page scanned");

    if output_format == "json" {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    if summaries.is_empty() {
        println!("No tables found.");
        return Ok(());
    }

    println!("  {:<6} {:<6} {:<30} id", "index", "rows", "class");
    for table in &summaries {
        println!(
            "  {:<6} {:<6} {:<30} {}",
            table.index,
            table.rows,
            table.class.as_deref().unwrap_or("-"),
            table.id.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}
