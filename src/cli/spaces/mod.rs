//! Spaces command - one-shot fetch used to check connection settings

use clap::Args;

use crate::config::AppConfig;
use crate::domain::ContentSource;
use crate::infrastructure::confluence::ConfluenceClient;
use crate::infrastructure::logging::init_logging;

#[derive(Args, Debug, Clone, Default)]
pub struct SpacesArgs {
    /// Print on a single line instead of pretty-printing
    #[arg(long)]
    pub compact: bool,
}

/// Fetch the space list straight from the wiki and print it to stdout
pub async fn run(args: SpacesArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    init_logging(&config.logging);

    let client = ConfluenceClient::from_config(&config.confluence)?;
    let spaces = client.fetch_spaces().await?;

    tracing::info!(count = spaces.len(), "Fetched spaces");

    let output = if args.compact {
        serde_json::to_string(&spaces)?
    } else {
        serde_json::to_string_pretty(&spaces)?
    };

    println!("{}", output);

    Ok(())
}
