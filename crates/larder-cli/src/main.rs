mod catalog;
mod inventory;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "larder")]
#[command(about = "Kitchen inventory: product lookup, expiry flags, and waste totals")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Look up a barcode in the product catalog and classify it
    Lookup {
        /// EAN-8 or EAN-13 barcode
        barcode: String,
    },
    /// Classify a saved catalog payload without touching the network
    Classify {
        /// JSON file holding `{"product": {...}}` or a bare product object
        #[arg(long)]
        file: PathBuf,
        /// Also print the rule that decided each category
        #[arg(long)]
        explain: bool,
    },
    /// List inventory items that expire soon or have expired
    Expiring {
        /// JSON file holding an array of inventory item documents
        #[arg(long)]
        file: PathBuf,
        /// Warning window in days (defaults to `LARDER_EXPIRY_WARNING_DAYS`)
        #[arg(long)]
        days: Option<i64>,
        /// Reference date as YYYY-MM-DD (defaults to today, UTC)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Total removed quantities by removal reason
    Waste {
        /// JSON file holding an array of inventory log documents
        #[arg(long)]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(larder_core::config::load_log_level()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Lookup { barcode } => {
            let config = larder_core::load_app_config()?;
            catalog::run_lookup(&config, &barcode).await
        }
        Commands::Classify { file, explain } => catalog::run_classify(&file, explain),
        Commands::Expiring { file, days, today } => {
            let days = match days {
                Some(days) => days,
                None => larder_core::load_app_config()?.expiry_warning_days,
            };
            let today = today.unwrap_or_else(|| chrono::Utc::now().date_naive());
            inventory::run_expiring(&file, today, days)
        }
        Commands::Waste { file } => inventory::run_waste(&file),
    }
}
