//! API endpoint construction

/// Builds request addresses against a PokeAPI-compatible base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
    page_size: u32,
}

impl Endpoints {
    /// `base` is the API root, e.g. `https://pokeapi.co/api/v2`.
    pub fn new(base: impl Into<String>, page_size: u32) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self { base, page_size }
    }

    /// First page of the location-area listing.
    pub fn first_location_page(&self) -> String {
        format!(
            "{}/location-area/?offset=0&limit={}",
            self.base, self.page_size
        )
    }

    pub fn location_area(&self, name: &str) -> String {
        format!("{}/location-area/{}", self.base, name)
    }

    pub fn pokemon(&self, name: &str) -> String {
        format!("{}/pokemon/{}", self.base, name)
    }
}
