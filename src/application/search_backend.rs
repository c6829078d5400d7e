// Backend trait for property availability search
use async_trait::async_trait;

/// One listing in a search response.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchListing {
    pub name: String,
    pub distance_miles: f64,
    pub available: bool,
}

impl SearchListing {
    pub fn new(name: &str, distance_miles: f64, available: bool) -> Self {
        Self {
            name: name.to_string(),
            distance_miles,
            available,
        }
    }
}

/// Fetch-like seam between the search widget and whatever answers postcode
/// queries. The shipped implementation simulates the network; a real HTTP
/// backend slots in behind the same trait.
#[async_trait]
pub trait PropertySearchBackend: Send + Sync {
    async fn search_by_postcode(&self, postcode: &str) -> anyhow::Result<Vec<SearchListing>>;
}
