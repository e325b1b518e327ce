use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber;

use navscan::cli::Cli;
use navscan::core::Engine;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let max_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    info!("Starting navscan v{}", env!("CARGO_PKG_VERSION"));

    // Create the analysis engine with configuration
    let engine = Engine::new(cli.config.as_deref())?;

    // Run the analysis
    cli.execute(engine).await
}
