//! Event Swipe API server entry point.

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use event_swipe_api::api::serve;
use event_swipe_api::config::Config;

/// Event Swipe API server.
#[derive(Parser, Debug)]
#[command(name = "event-swipe-api")]
#[command(about = "HTTP API server for the Event Swipe backend")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration
    let config = Config::load()?;

    // Initialize logging
    let filter = if args.verbose || config.verbose {
        EnvFilter::new("event_swipe_api=debug,info")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.rust_log))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    info!("Configuration loaded");

    serve(&config).await?;

    Ok(())
}
