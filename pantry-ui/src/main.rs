//! pantry-ui - Ingredient picker and recipe client
//!
//! Terminal front end: reads commands from stdin, prints panels to stdout,
//! logs to stderr.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use pantry_common::config::{ClientConfig, ConfigOverrides};
use pantry_ui::catalog::Catalog;
use pantry_ui::terminal::{self, TerminalView, HELP_TEXT};
use pantry_ui::{runtime, App, HttpRecipeClient, RecipeService};
use tokio::io::BufReader;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for pantry-ui
#[derive(Parser, Debug)]
#[command(name = "pantry-ui")]
#[command(about = "Pick ingredients and generate recipes")]
#[command(version)]
struct Args {
    /// Recipe generation endpoint URL (overrides PANTRY_ENDPOINT and config file)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Path to TOML config file (overrides PANTRY_CONFIG)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = ClientConfig::resolve(ConfigOverrides {
        endpoint: args.endpoint,
        config_path: args.config,
        log_level: args.log_level,
    })
    .context("Failed to load configuration")?;

    // Initialize tracing; stdout is reserved for rendered panels
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting pantry-ui v{}", env!("CARGO_PKG_VERSION"));
    info!("Recipe endpoint: {}", config.endpoint);

    let client = HttpRecipeClient::new(&config.endpoint)
        .context("Failed to initialize recipe client")?;
    let service: Arc<dyn RecipeService> = Arc::new(client);

    let app = App::new(Catalog::new(config.catalog));

    println!("{}", HELP_TEXT);

    let (ui_tx, ui_rx) = mpsc::channel(32);
    tokio::spawn(terminal::read_commands(
        BufReader::new(tokio::io::stdin()),
        std::io::stdout(),
        ui_tx,
    ));

    runtime::run(app, service, TerminalView::stdout(), ui_rx).await;

    info!("pantry-ui shutdown complete");
    Ok(())
}
