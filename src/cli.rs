//! Command-line interface parsing
//!
//! Flags override the matching `POKEDEX_*` environment variables.

use clap::Parser;

/// Pokedex - explore location areas and catch what you find
#[derive(Parser, Debug, Default)]
#[command(name = "pokedex")]
#[command(about = "Interactive explorer for the Pokemon catalog API")]
#[command(version)]
pub struct Cli {
    /// Root address of the catalog API
    #[arg(long, value_name = "URL")]
    pub api_base: Option<String>,

    /// How long fetched responses stay cached, in seconds
    #[arg(long, value_name = "SECS")]
    pub cache_ttl: Option<u64>,

    /// How often expired responses are swept, in seconds (default: the TTL)
    #[arg(long, value_name = "SECS")]
    pub sweep_interval: Option<u64>,

    /// Number of areas listed per `map` page
    #[arg(long, value_name = "N")]
    pub page_size: Option<u32>,
}
