use clap::Args;
use spantab_core::error::SpantabError;
use spantab_core::fetch::AutoFetcher;
use spantab_core::model::Extraction;
use spantab_core::options::presets::load_preset;
use spantab_core::options::{load_options, OptionOverrides, TableFilter, TableOptions};
use std::path::PathBuf;

use crate::output;

#[derive(Args)]
pub struct ExtractArgs {
    /// Page URL, file:// URL or local path (replaces the url of the config or preset)
    pub url: Option<String>,

    /// JSON option file
    #[arg(short, long, value_name = "FILE", conflicts_with = "preset")]
    pub config: Option<PathBuf>,

    /// Built-in configuration: animals, sinclair
    #[arg(short, long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Index of the table among those matching --filter
    #[arg(short, long, value_name = "N")]
    pub table: Option<usize>,

    /// Attribute the table must carry (repeatable), e.g. class=wikitable
    #[arg(short, long = "filter", value_name = "ATTR=VALUE", value_parser = parse_attribute)]
    pub filter: Vec<(String, String)>,

    /// Use the first row's <th> cells as column labels (`--column-header=false` turns it off)
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub column_header: Option<bool>,

    /// Use each row's leading <th> cell as the row label (`--row-header=false` turns it off)
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub row_header: Option<bool>,

    /// Columns to keep: comma list, "all", or "" for none
    #[arg(long, value_name = "LIST", value_parser = parse_positions)]
    pub columns: Option<Positions>,

    /// Rows to keep: comma list, "all", or "" for none
    #[arg(long, value_name = "LIST", value_parser = parse_positions)]
    pub rows: Option<Positions>,

    /// Columns whose links are followed: comma list, "all", or "" to disable
    #[arg(long, value_name = "LIST", value_parser = parse_positions, conflicts_with = "link_rows")]
    pub link_columns: Option<Positions>,

    /// Rows whose links are followed: comma list, "all", or "" to disable
    #[arg(long, value_name = "LIST", value_parser = parse_positions)]
    pub link_rows: Option<Positions>,

    /// Output format: table (default), json or csv
    #[arg(short, long, default_value = "table")]
    pub output: String,

    /// Write the output to a file instead of stdout
    #[arg(short = 'O', long = "out", value_name = "FILE")]
    pub out: Option<PathBuf>,
}

/// A position list given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Positions {
    All,
    Only(Vec<usize>),
}

impl Positions {
    fn into_option(self) -> Option<Vec<usize>> {
        match self {
            Positions::All => None,
            Positions::Only(list) => Some(list),
        }
    }
}

fn parse_positions(raw: &str) -> Result<Positions, String> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("all") {
        return Ok(Positions::All);
    }
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<usize>()
                .map_err(|_| format!("'{s}' is not a row or column position"))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Positions::Only)
}

fn parse_attribute(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected ATTR=VALUE, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing attribute name in '{raw}'"));
    }
    Ok((name.to_string(), value.trim().to_string()))
}

impl ExtractArgs {
    fn base_options(&self) -> Result<TableOptions, SpantabError> {
        match (&self.config, &self.preset) {
            (Some(path), _) => load_options(path),
            (None, Some(name)) => load_preset(name),
            (None, None) => Ok(TableOptions::default()),
        }
    }

    fn overrides(&self, base: &TableOptions) -> OptionOverrides {
        let table_filter = (!self.filter.is_empty()).then(|| {
            let mut filter: TableFilter = base.table_filter.clone();
            filter.extend(self.filter.iter().cloned());
            filter
        });

        OptionOverrides {
            url: self.url.clone(),
            table_index: self.table,
            table_filter,
            column_header: self.column_header,
            row_header: self.row_header,
            column_keep: self.columns.clone().map(Positions::into_option),
            row_keep: self.rows.clone().map(Positions::into_option),
            column_link_scope: link_scope(&self.link_columns, &self.link_rows),
            row_link_scope: link_scope(&self.link_rows, &self.link_columns),
            ..OptionOverrides::default()
        }
    }
}

/// Scope override for one axis. Setting one axis switches the other off so a
/// config's scope never collides with the flag.
fn link_scope(own: &Option<Positions>, other: &Option<Positions>) -> Option<Option<Vec<usize>>> {
    match (own, other) {
        (Some(positions), _) => Some(positions.clone().into_option()),
        (None, Some(_)) => Some(Some(Vec::new())),
        (None, None) => None,
    }
}

pub fn run(args: ExtractArgs) -> Result<(), SpantabError> {
    let base = args.base_options()?;
    let overrides = args.overrides(&base);
    let fetcher = AutoFetcher::new()?;

    let extraction = spantab_core::extract_with(&base, &overrides, &fetcher)?;
    match &extraction {
        Extraction::Grid(grid) => {
            tracing::info!(rows = grid.height(), columns = grid.width(), "table extracted")
        }
        Extraction::Values(values) => tracing::info!(values = values.len(), "values extracted"),
    }

    let rendered = match args.output.as_str() {
        "json" => output::json::render(&extraction)?,
        "csv" => output::csv::render(&extraction)?,
        _ => output::table::render(&extraction),
    };

    match args.out {
        Some(path) => {
            std::fs::write(&path, rendered)?;
            eprintln!("Written to {}", path.display());
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
