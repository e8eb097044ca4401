use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use finboard::cli::{handle_list_command, handle_report_command, ListArgs, ReportArgs};
use finboard::config::{FinboardPaths, Settings};
use finboard::storage::initialize_database;

#[derive(Parser)]
#[command(
    name = "finboard",
    author = "Kaylee Beyene",
    version,
    about = "Financial dashboard reports from the command line",
    long_about = "finboard reads clients, payables, receivables and ledger entries \
                  from a SQLite database or a JSON dataset and prints cash flow, \
                  supplier, settlement, client, monthly and forecast reports."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a report
    Report(ReportArgs),

    /// List stored records
    List(ListArgs),

    /// Create the database tables if they are missing
    Init {
        /// Database file (defaults to the configured data directory)
        #[arg(long)]
        db: Option<PathBuf>,
    },

    /// Show current configuration and paths
    Config,
}

fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = FinboardPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings);

    match cli.command {
        Some(Commands::Report(args)) => {
            handle_report_command(&paths, &settings, args)?;
        }
        Some(Commands::List(args)) => {
            handle_list_command(&paths, &settings, args)?;
        }
        Some(Commands::Init { db }) => {
            let db = db.unwrap_or_else(|| paths.database_file());
            println!("Initializing finboard database at: {}", db.display());
            initialize_database(&db)?;
            if !paths.is_initialized() {
                settings.save(&paths)?;
            }
            println!("Initialization complete!");
            println!();
            println!("Tables: clients, payables, receivables, ledger_entries");
            println!("Run 'finboard report all' to see the dashboard.");
        }
        Some(Commands::Config) => {
            println!("finboard Configuration");
            println!("======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Database:         {}", paths.database_file().display());
            println!("Dataset:          {}", paths.dataset_file().display());
            println!();
            println!("Settings:");
            println!("  Top suppliers:   {}", settings.top_suppliers);
            println!("  Top clients:     {}", settings.top_clients);
            println!("  Forecast days:   {}", settings.forecast_days);
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Locale:          {}", settings.locale);
            println!("  Log level:       {}", settings.log_level);
        }
        None => {
            println!("finboard - financial dashboard reports");
            println!();
            println!("Run 'finboard --help' for usage information.");
            println!("Run 'finboard report all' to see every report.");
        }
    }

    Ok(())
}
