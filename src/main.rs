//! Pokedex - an interactive explorer for the Pokemon catalog API
//!
//! Pages through location areas, explores them and catches what lives there.

use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::cli::Cli;
use pokedex::client::HttpFetcher;
use pokedex::repl::{self, Readline};
use pokedex::{Caches, Config, Explorer};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr, so it never mixes
///    with REPL output)
/// 2. Load configuration from environment variables and CLI flags
/// 3. Create the response caches and start their reclaim tasks
/// 4. Run the REPL until `exit`, Ctrl+C or Ctrl+D
/// 5. Cancel the reclaim tasks and wait for them to stop, even if the REPL
///    failed
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so the prompt stays readable, override with RUST_LOG
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().merge_cli(&cli);
    config.validate()?;
    info!(
        "Configuration loaded: api_base={}, cache_ttl={}s, sweep_interval={:?}, page_size={}",
        config.api_base, config.cache_ttl, config.sweep_interval, config.page_size
    );

    let caches = Caches::new(config.cache_options())?;
    let input = Readline::new()?;
    let shutdown = CancellationToken::new();
    let reclaimers = caches.spawn_reclaimers(&shutdown);
    info!("Reclaim tasks started");

    let mut explorer = Explorer::new(HttpFetcher::new(), config.endpoints(), caches);
    let mut output = std::io::stdout();

    repl::run_with_shutdown(&mut explorer, input, &mut output, shutdown, reclaimers).await?;
    info!("Shutdown complete");

    Ok(())
}
