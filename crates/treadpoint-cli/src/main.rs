mod pricing;
mod search;
mod validate;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "treadpoint")]
#[command(about = "Treadpoint fixture toolkit: directory search and pricing lookups")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Filter the location directory by a free-text query.
    Search {
        #[arg(default_value = "")]
        query: String,
        /// Read query edits from stdin and refilter after each pause.
        #[arg(long)]
        watch: bool,
    },
    /// Show the price table for a category, resolved to the nearest diameter.
    Pricing {
        #[arg(long)]
        category: String,
        #[arg(long)]
        diameter: Option<u32>,
    },
    /// Parse every fixture and report what the site would serve.
    Validate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = treadpoint_core::load_app_config()?;
    match cli.command {
        Commands::Search { query, watch } => search::run(&config, &query, watch).await,
        Commands::Pricing { category, diameter } => {
            pricing::run(&config, &category, diameter).await
        }
        Commands::Validate => validate::run(&config).await,
    }
}
