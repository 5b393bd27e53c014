//! tictactoe - two players, one terminal.

use anyhow::Result;
use clap::Parser;
use tictactoe_tui::{Cli, ViewConfig, logging, shell};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ViewConfig::resolve(&cli)?;

    logging::init(config.log_file())?;
    info!(?config, "Configuration resolved");

    shell::run(config).await
}
