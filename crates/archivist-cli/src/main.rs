use std::path::PathBuf;

use anyhow::Result;
use archivist_cli::cli::{load_config, render_page, route_json};
use archivist_core::tracing_setup::init_tracing;
use archivist_core::ViewerConfig;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "archivist-viewer")]
#[command(about = "Headless viewer for the image archive")]
struct Cli {
    /// Path to JSON config file (contains baseUrl, timeoutSecs)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Archive server base URL, e.g. http://localhost:8080
    #[arg(long)]
    base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a page and print the populated document
    Render {
        /// Page location, e.g. /gallery/42?tag=cats or /record/42/7
        location: String,
    },

    /// Print the navigation context a location resolves to
    Route {
        location: String,

        /// Pretty-print JSON output
        #[arg(long, short)]
        pretty: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Render { location } => {
            let overrides = ViewerConfig {
                base_url: cli.base_url,
                timeout_secs: cli.timeout,
            };
            let config = load_config(cli.config.as_deref(), overrides)?;
            tracing::debug!(base_url = config.base_url(), "rendering {}", location);
            print!("{}", render_page(&config, &location).await?);
        }
        Commands::Route { location, pretty } => {
            println!("{}", route_json(&location, pretty)?);
        }
    }
    Ok(())
}
