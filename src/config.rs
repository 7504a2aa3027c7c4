//! Configuration Module
//!
//! Loads explorer settings from environment variables, with command-line
//! flags taking precedence.

use std::env;
use std::time::Duration;

use crate::cache::{CacheOptions, DEFAULT_TTL_SECS};
use crate::cli::Cli;
use crate::client::Endpoints;
use crate::error::ConfigError;

/// Default API root
pub const DEFAULT_API_BASE: &str = "https://pokeapi.co/api/v2";

/// Default number of areas per `map` page
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Explorer configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root address of the catalog API
    pub api_base: String,
    /// Cache entry lifetime in seconds
    pub cache_ttl: u64,
    /// Reclaim sweep interval in seconds; None = same as TTL
    pub sweep_interval: Option<u64>,
    /// Number of areas per page
    pub page_size: u32,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_API_BASE` - API root (default: https://pokeapi.co/api/v2)
    /// - `POKEDEX_CACHE_TTL` - Cache TTL in seconds (default: 300)
    /// - `POKEDEX_SWEEP_INTERVAL` - Reclaim interval in seconds (default: TTL)
    /// - `POKEDEX_PAGE_SIZE` - Areas per page (default: 20)
    pub fn from_env() -> Self {
        Self {
            api_base: env::var("POKEDEX_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            cache_ttl: env::var("POKEDEX_CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TTL_SECS),
            sweep_interval: env::var("POKEDEX_SWEEP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok()),
            page_size: env::var("POKEDEX_PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }

    /// Overrides values with any flags given on the command line.
    pub fn merge_cli(mut self, cli: &Cli) -> Self {
        if let Some(base) = &cli.api_base {
            self.api_base = base.clone();
        }
        if let Some(ttl) = cli.cache_ttl {
            self.cache_ttl = ttl;
        }
        if let Some(interval) = cli.sweep_interval {
            self.sweep_interval = Some(interval);
        }
        if let Some(size) = cli.page_size {
            self.page_size = size;
        }
        self
    }

    /// Checks the values before any cache is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::InvalidPageSize(self.page_size));
        }
        if self.api_base.trim().is_empty() {
            return Err(ConfigError::EmptyApiBase);
        }
        self.cache_options().validate()?;
        Ok(())
    }

    pub fn cache_options(&self) -> CacheOptions {
        let options = CacheOptions::new(Duration::from_secs(self.cache_ttl));
        match self.sweep_interval {
            Some(secs) => options.with_sweep_interval(Duration::from_secs(secs)),
            None => options,
        }
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(self.api_base.clone(), self.page_size)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            cache_ttl: DEFAULT_TTL_SECS,
            sweep_interval: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
