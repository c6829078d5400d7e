// Simulated search backend - stands in for the future availability API
use crate::application::search_backend::{PropertySearchBackend, SearchListing};
use async_trait::async_trait;
use std::time::Duration;

const DEFAULT_LATENCY: Duration = Duration::from_millis(1500);

/// Canned backend answering every postcode with the same three listings
/// after a configurable delay.
pub struct SimulatedPropertySearch {
    latency: Duration,
}

impl SimulatedPropertySearch {
    pub fn new() -> Self {
        Self {
            latency: DEFAULT_LATENCY,
        }
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for SimulatedPropertySearch {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PropertySearchBackend for SimulatedPropertySearch {
    async fn search_by_postcode(&self, postcode: &str) -> anyhow::Result<Vec<SearchListing>> {
        tracing::debug!("simulating availability search for postcode {}", postcode);
        tokio::time::sleep(self.latency).await;
        Ok(vec![
            SearchListing::new("Maison Serviced Apartments", 0.5, true),
            SearchListing::new("Crystal Property Shortlets", 1.2, false),
            SearchListing::new("London Aspect Apartments", 2.1, true),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_search_yields_fixed_listings() {
        let backend = SimulatedPropertySearch::new();
        let listings = backend.search_by_postcode("SW1A 1AA").await.unwrap();

        assert_eq!(listings.len(), 3);
        let available = listings.iter().filter(|l| l.available).count();
        assert_eq!(available, 2);
        assert_eq!(listings[0].name, "Maison Serviced Apartments");
        assert_eq!(listings[0].distance_miles, 0.5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_searches_are_independent() {
        let first = SimulatedPropertySearch::new();
        let second = SimulatedPropertySearch::with_latency(Duration::from_millis(300));

        let (a, b) = tokio::join!(
            first.search_by_postcode("SW1A 1AA"),
            second.search_by_postcode("M1 1AE"),
        );
        assert_eq!(a.unwrap().len(), 3);
        assert_eq!(b.unwrap().len(), 3);
    }
}
