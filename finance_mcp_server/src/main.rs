mod protocol;
mod server;
mod tools;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use finance_mcp_lib::Config;
use tracing_subscriber::EnvFilter;

use crate::server::Server;
use crate::tools::Tools;

#[derive(Parser)]
#[command(name = "finance-mcp")]
#[command(about = "Serve stock market data tools over stdio")]
struct Cli {
    /// Base URL of the quotes API (overrides API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// API key for the quotes API (overrides API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Log level for this server's crates: error, warn, info, debug or trace
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let filter = match &cli.log_level {
        Some(level) => EnvFilter::try_new(format!(
            "finance_mcp={level},alphavantage_api={level}"
        ))
        .with_context(|| format!("invalid log level '{}'", level))?,
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("finance_mcp=info,alphavantage_api=info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let mut config = Config::from_env()?;
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }
    if let Some(api_key) = cli.api_key {
        config.api_key = api_key;
    }
    tracing::info!(
        "Starting {} {} against {}",
        config.name,
        config.version,
        config.api_url
    );

    let tools = Tools::from_config(&config)?;
    let server = Arc::new(Server::new(&config, tools));
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    server.serve(stdin, tokio::io::stdout()).await?;

    tracing::info!("Input closed, shutting down");
    Ok(())
}
