use anyhow::{Context, Result};
use drivehub::{Provider, config};
use tracing_subscriber::EnvFilter;
use trip::ActiveTripFetcher;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let token = config::get_session_token()
        .with_context(|| format!("`{}` is not set", config::SESSION_TOKEN))?;
    let provider = Provider::new().context("creating provider")?;
    let fetcher = ActiveTripFetcher::from_config(provider).await.context("configuring fetcher")?;

    let trip = fetcher.fetch(&token).await?;
    let json = serde_json::to_string_pretty(&trip).context("serializing trip")?;
    println!("{json}");

    Ok(())
}
