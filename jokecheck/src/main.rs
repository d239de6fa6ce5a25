#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;
mod checks;

use args::{Args, Endpoint};
use clap::Parser;
use jokeapi_client::JokeApiClient;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string())),
        )
        .init();

    let client = JokeApiClient::new(&args.base_url)?;
    tracing::info!(base_url = %args.base_url, "starting contract checks");

    let selected = args.selected_endpoints();
    let mut failed = 0_usize;
    for endpoint in &selected {
        let result = match endpoint {
            Endpoint::Jokes => checks::jokes(&client).await,
            Endpoint::Languages => checks::languages(&client).await,
            Endpoint::Langcode => checks::langcode(&client).await,
            Endpoint::Flags => checks::flags(&client).await,
        };

        match result {
            Ok(()) => tracing::info!(%endpoint, "check passed"),
            Err(e) => {
                failed += 1;
                tracing::error!(%endpoint, error = format!("{e:#}"), "check failed");
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} checks failed", selected.len());
    }

    tracing::info!(total = selected.len(), "all checks passed");
    Ok(())
}
