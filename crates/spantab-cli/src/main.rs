mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "spantab",
    version,
    about = "Reconstruct HTML tables with merged cells into clean grids"
)]
struct Cli {
    /// Raise the log level (-v info, -vv debug, -vvv trace). Defaults to RUST_LOG, else warn
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a table (and any linked lookups) from a page
    Extract(commands::extract::ExtractArgs),
    /// List the tables on a page with their index, class, id and row count
    Tables {
        /// Page URL, file:// URL or local path
        url: String,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Inspect the built-in configurations
    Presets {
        #[command(subcommand)]
        action: PresetsAction,
    },
    /// Option file reference and validation
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum PresetsAction {
    /// List built-in configurations
    List,
    /// Print a built-in configuration as JSON
    Show {
        /// Preset name (e.g., "animals")
        name: String,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the option file reference with an example
    Schema,
    /// Validate an option file
    Validate {
        /// Path to JSON option file
        file: PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Extract(args) => commands::extract::run(args),
        Commands::Tables { url, output } => commands::tables::run(&url, &output),
        Commands::Presets { action } => match action {
            PresetsAction::List => commands::presets::list(),
            PresetsAction::Show { name } => commands::presets::show(&name),
        },
        Commands::Config { action } => match action {
            ConfigAction::Schema => commands::config::schema(),
            ConfigAction::Validate { file } => commands::config::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
