//! Command handlers
//!
//! [`Explorer`] owns the caches, the fetcher and the session, and runs one
//! command at a time against them.

use std::io::Write;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::cache::{CacheOptions, ExpiringCache};
use crate::client::{fetch_json, Endpoints, Fetcher};
use crate::error::{CommandError, Result};
use crate::models::{LocationArea, LocationAreaPage, Pokemon};
use crate::repl::{Command, Session};
use crate::tasks::{spawn_reclaim_task, ReclaimHandle};

/// Catch attempts whose roll lands above this escape.
const CATCH_THRESHOLD: u32 = 40;

/// One response cache per resource class.
#[derive(Debug, Clone)]
pub struct Caches {
    /// Location-area listing pages
    pub locations: ExpiringCache,
    /// Single location areas
    pub areas: ExpiringCache,
    /// Creature details
    pub pokemon: ExpiringCache,
}

impl Caches {
    pub fn new(options: CacheOptions) -> Result<Self> {
        Ok(Self {
            locations: ExpiringCache::with_options(options)?,
            areas: ExpiringCache::with_options(options)?,
            pokemon: ExpiringCache::with_options(options)?,
        })
    }

    /// Starts one reclaim task per cache, each stopped by a child of `token`.
    pub fn spawn_reclaimers(&self, token: &CancellationToken) -> Vec<ReclaimHandle> {
        self.named()
            .into_iter()
            .map(|(name, cache)| spawn_reclaim_task(name, cache.clone(), token.child_token()))
            .collect()
    }

    fn named(&self) -> [(&'static str, &ExpiringCache); 3] {
        [
            ("locations", &self.locations),
            ("areas", &self.areas),
            ("pokemon", &self.pokemon),
        ]
    }
}

/// What the REPL should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Runs REPL commands against the catalog API.
pub struct Explorer<F> {
    fetcher: F,
    endpoints: Endpoints,
    caches: Caches,
    session: Session,
    rng: StdRng,
}

impl<F: Fetcher> Explorer<F> {
    pub fn new(fetcher: F, endpoints: Endpoints, caches: Caches) -> Self {
        Self {
            fetcher,
            endpoints,
            caches,
            session: Session::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Replaces the random source used by `catch`.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn caches(&self) -> &Caches {
        &self.caches
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Runs `command` with `args`, writing user-facing output to `out`.
    pub async fn execute<W: Write>(
        &mut self,
        command: Command,
        args: &[String],
        out: &mut W,
    ) -> std::result::Result<Flow, CommandError> {
        debug!(command = command.name(), ?args, "executing");
        match command {
            Command::Help => self.help(out)?,
            Command::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Flow::Exit);
            }
            Command::Map => self.map(out).await?,
            Command::Mapb => self.mapb(out).await?,
            Command::Explore => {
                let area = joined_arg(args, "explore", "area")?;
                self.explore(&area, out).await?
            }
            Command::Catch => {
                let name = joined_arg(args, "catch", "pokemon")?;
                self.catch(&name, out).await?
            }
            Command::Inspect => {
                let name = joined_arg(args, "inspect", "pokemon")?;
                self.inspect(&name, out)?
            }
            Command::Pokedex => self.pokedex(out)?,
            Command::Stats => self.stats(out).await?,
        }
        Ok(Flow::Continue)
    }

    fn help<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "Welcome to the Pokedex!")?;
        writeln!(out, "Usage:")?;
        writeln!(out)?;
        for command in Command::ALL {
            writeln!(out, "{}: {}", command.name(), command.description())?;
        }
        Ok(())
    }

    async fn map<W: Write>(&mut self, out: &mut W) -> std::result::Result<(), CommandError> {
        let url = match self.session.cursor() {
            None => self.endpoints.first_location_page(),
            Some(cursor) => cursor.next.clone().ok_or(CommandError::NoNextPage)?,
        };
        self.show_page(&url, out).await
    }

    async fn mapb<W: Write>(&mut self, out: &mut W) -> std::result::Result<(), CommandError> {
        let url = self
            .session
            .cursor()
            .and_then(|cursor| cursor.previous.clone())
            .ok_or(CommandError::NoPreviousPage)?;
        self.show_page(&url, out).await
    }

    async fn show_page<W: Write>(
        &mut self,
        url: &str,
        out: &mut W,
    ) -> std::result::Result<(), CommandError> {
        let page: LocationAreaPage = fetch_json(&self.caches.locations, url, &self.fetcher).await?;
        self.session.record_page(&page);

        for area in &page.results {
            writeln!(out, "{}", area.name)?;
        }
        Ok(())
    }

    async fn explore<W: Write>(
        &mut self,
        area: &str,
        out: &mut W,
    ) -> std::result::Result<(), CommandError> {
        writeln!(out, "Exploring {}...", area)?;

        let url = self.endpoints.location_area(area);
        let location: LocationArea = fetch_json(&self.caches.areas, &url, &self.fetcher).await?;
        self.session.enter_area(location.pokemon_names());

        writeln!(out, "Found Pokemon:")?;
        for name in location.pokemon_names() {
            writeln!(out, "\t- {}", name)?;
        }
        Ok(())
    }

    async fn catch<W: Write>(
        &mut self,
        name: &str,
        out: &mut W,
    ) -> std::result::Result<(), CommandError> {
        if !self.session.is_in_area(name) {
            writeln!(out, "Pokemon {} not found in current location", name)?;
            return Ok(());
        }

        let url = self.endpoints.pokemon(name);
        let pokemon: Pokemon = fetch_json(&self.caches.pokemon, &url, &self.fetcher).await?;

        writeln!(out, "Throwing a Pokeball at {}...", name)?;
        let difficulty = pokemon.base_experience.unwrap_or(0).max(1);
        let roll = self.rng.gen_range(0..difficulty);
        if roll > CATCH_THRESHOLD {
            writeln!(out, "{} escaped!", name)?;
            return Ok(());
        }

        info!(pokemon = name, "caught");
        writeln!(out, "{} was caught!", name)?;
        writeln!(out, "You may now inspect it with the inspect command.")?;
        self.session.catch(pokemon);
        Ok(())
    }

    fn inspect<W: Write>(&self, name: &str, out: &mut W) -> std::io::Result<()> {
        let Some(caught) = self.session.caught(name) else {
            return writeln!(out, "you have not caught that pokemon");
        };
        let pokemon = &caught.pokemon;

        writeln!(out, "Name: {}", pokemon.name)?;
        writeln!(out, "Height: {}", pokemon.height)?;
        writeln!(out, "Weight: {}", pokemon.weight)?;
        writeln!(out, "Stats:")?;
        for stat in &pokemon.stats {
            writeln!(out, "  -{}: {}", stat.stat.name, stat.base_stat)?;
        }
        writeln!(out, "Types:")?;
        for kind in pokemon.type_names() {
            writeln!(out, "  - {}", kind)?;
        }
        writeln!(out, "Caught: {}", caught.caught_at.format("%Y-%m-%d %H:%M:%S UTC"))?;
        Ok(())
    }

    fn pokedex<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "Your Pokedex:")?;
        for name in self.session.pokedex_names() {
            writeln!(out, "\t- {}", name)?;
        }
        Ok(())
    }

    async fn stats<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for (name, cache) in self.caches.named() {
            let stats = cache.stats().await;
            writeln!(
                out,
                "{}: entries={} hits={} misses={} expired={} reclaimed={} hit_rate={:.2}",
                name,
                stats.total_entries,
                stats.hits,
                stats.misses,
                stats.expired,
                stats.reclaimed,
                stats.hit_rate()
            )?;
        }
        Ok(())
    }
}

/// Joins multi-word arguments with `-`, the API's naming convention.
fn joined_arg(
    args: &[String],
    command: &'static str,
    argument: &'static str,
) -> std::result::Result<String, CommandError> {
    if args.is_empty() {
        return Err(CommandError::MissingArgument { command, argument });
    }
    Ok(args.join("-"))
}
