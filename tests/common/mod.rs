//! Shared fixtures for integration tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;
use pokedex::client::{Endpoints, Fetcher};
use pokedex::error::FetchError;

pub const BASE: &str = "http://catalog.test/api/v2";

/// Serves canned bodies by address and counts calls per address.
#[derive(Default)]
pub struct StubFetcher {
    bodies: HashMap<String, String>,
    calls: Mutex<HashMap<String, usize>>,
    total: AtomicUsize,
}

impl StubFetcher {
    pub fn with(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.bodies.insert(url.into(), body.into());
        self
    }

    pub fn calls(&self, url: &str) -> usize {
        self.calls.lock().unwrap().get(url).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.total.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetcher for StubFetcher {
    async fn fetch(&self, url: &str) -> Result<Bytes, FetchError> {
        self.total.fetch_add(1, Ordering::SeqCst);
        *self.calls.lock().unwrap().entry(url.to_string()).or_default() += 1;

        match self.bodies.get(url) {
            Some(body) => Ok(Bytes::from(body.clone())),
            None => Err(FetchError::Status {
                status: 404,
                body: "Not Found".to_string(),
            }),
        }
    }
}

pub fn endpoints() -> Endpoints {
    Endpoints::new(BASE, 2)
}

pub fn page_url(offset: u32) -> String {
    format!("{}/location-area/?offset={}&limit=2", BASE, offset)
}

pub fn page(offset: u32, names: &[&str], last: bool) -> String {
    let next = if last {
        "null".to_string()
    } else {
        format!("\"{}\"", page_url(offset + 2))
    };
    let previous = if offset == 0 {
        "null".to_string()
    } else {
        format!("\"{}\"", page_url(offset - 2))
    };
    let results: Vec<String> = names
        .iter()
        .map(|n| format!(r#"{{"name":"{}","url":"{}/location-area/{}/"}}"#, n, BASE, n))
        .collect();
    format!(
        r#"{{"count":4,"next":{},"previous":{},"results":[{}]}}"#,
        next,
        previous,
        results.join(",")
    )
}

pub fn area(name: &str, pokemon: &[&str]) -> String {
    let encounters: Vec<String> = pokemon
        .iter()
        .map(|p| format!(r#"{{"pokemon":{{"name":"{}","url":"u"}},"version_details":[]}}"#, p))
        .collect();
    format!(
        r#"{{"id":1,"name":"{}","pokemon_encounters":[{}]}}"#,
        name,
        encounters.join(",")
    )
}

pub fn pokemon(name: &str, base_experience: u32) -> String {
    format!(
        r#"{{
            "id": 7,
            "name": "{}",
            "base_experience": {},
            "height": 5,
            "weight": 90,
            "stats": [{{"base_stat": 44, "effort": 0, "stat": {{"name": "hp", "url": "u"}}}}],
            "types": [{{"slot": 1, "type": {{"name": "water", "url": "u"}}}}]
        }}"#,
        name, base_experience
    )
}

/// A catalog with two pages of areas, one explorable area and two creatures.
pub fn catalog() -> StubFetcher {
    StubFetcher::default()
        .with(page_url(0), page(0, &["canalave-city-area", "eterna-city-area"], false))
        .with(page_url(2), page(2, &["pastoria-city-area", "sunyshore-city-area"], true))
        .with(
            format!("{}/location-area/canalave-city-area", BASE),
            area("canalave-city-area", &["tentacool", "wingull"]),
        )
        .with(format!("{}/pokemon/tentacool", BASE), pokemon("tentacool", 40))
        .with(format!("{}/pokemon/wingull", BASE), pokemon("wingull", 1_000_000))
}
