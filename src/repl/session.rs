//! Per-run explorer state

use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Utc};

use crate::models::{LocationAreaPage, Pokemon};

/// Paging position in the location-area listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageCursor {
    pub next: Option<String>,
    pub previous: Option<String>,
}

/// A creature in the user's pokedex.
#[derive(Debug, Clone)]
pub struct CaughtPokemon {
    pub pokemon: Pokemon,
    pub caught_at: DateTime<Utc>,
}

/// State carried between commands.
#[derive(Debug, Default)]
pub struct Session {
    /// None until the first page has been shown
    cursor: Option<PageCursor>,
    /// Creatures found by the last `explore`
    area_pokemon: HashSet<String>,
    /// Caught creatures, listed alphabetically
    pokedex: BTreeMap<String, CaughtPokemon>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> Option<&PageCursor> {
        self.cursor.as_ref()
    }

    /// Remembers the neighbours of the page just shown.
    pub fn record_page(&mut self, page: &LocationAreaPage) {
        self.cursor = Some(PageCursor {
            next: page.next.clone(),
            previous: page.previous.clone(),
        });
    }

    /// Replaces the catchable set with the creatures of a new area.
    pub fn enter_area<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) {
        self.area_pokemon = names.into_iter().map(str::to_string).collect();
    }

    pub fn is_in_area(&self, name: &str) -> bool {
        self.area_pokemon.contains(name)
    }

    pub fn catch(&mut self, pokemon: Pokemon) {
        let caught = CaughtPokemon {
            pokemon,
            caught_at: Utc::now(),
        };
        self.pokedex.insert(caught.pokemon.name.clone(), caught);
    }

    pub fn caught(&self, name: &str) -> Option<&CaughtPokemon> {
        self.pokedex.get(name)
    }

    /// Caught creature names in alphabetical order.
    pub fn pokedex_names(&self) -> impl Iterator<Item = &str> {
        self.pokedex.keys().map(String::as_str)
    }
}
