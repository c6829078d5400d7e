// Property search widget
use crate::application::registry::CustomComponent;
use crate::application::search_backend::{PropertySearchBackend, SearchListing};
use crate::domain::config::AppConfig;
use crate::domain::fragment::Fragment;
use async_trait::async_trait;
use std::sync::Arc;

/// Transient interactive state for one render lifetime of the search widget.
/// The bundle never sees it; the host owns it for as long as the tab is up.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub postcode: String,
    pub loading: bool,
    /// `None` until the first search completes; `Some(vec![])` is the normal
    /// empty-result state, not an error.
    pub results: Option<Vec<SearchListing>>,
}

/// The `search` tab override: a postcode box in front of the availability
/// backend.
pub struct PropertySearch {
    backend: Arc<dyn PropertySearchBackend>,
    property_types: Vec<String>,
}

impl PropertySearch {
    /// `property_types` comes from the tenant data bag (`propertyTypes`);
    /// an empty list just drops the filter hint row.
    pub fn new(backend: Arc<dyn PropertySearchBackend>, property_types: Vec<String>) -> Self {
        Self {
            backend,
            property_types,
        }
    }

    /// Runs one search. A backend failure degrades to an empty result list.
    pub async fn search(&self, postcode: &str) -> Vec<SearchListing> {
        tracing::debug!("dispatching property search for {}", postcode);
        match self.backend.search_by_postcode(postcode).await {
            Ok(listings) => listings,
            Err(e) => {
                tracing::warn!("property search failed, showing no results: {}", e);
                Vec::new()
            }
        }
    }

    /// Drives `state` through one search round trip.
    pub async fn submit(&self, state: &mut SearchState) {
        state.loading = true;
        let results = self.search(&state.postcode).await;
        state.results = Some(results);
        state.loading = false;
    }

    pub fn render_state(&self, _config: &AppConfig, state: &SearchState) -> Fragment {
        let mut children = vec![
            Fragment::TextInput {
                placeholder: "Enter postcode".to_string(),
                value: state.postcode.clone(),
            },
            Fragment::Button {
                label: if state.loading {
                    "Searching...".to_string()
                } else {
                    "Search".to_string()
                },
                enabled: !state.loading,
            },
        ];

        if !self.property_types.is_empty() {
            children.push(Fragment::text(format!(
                "Property types: {}",
                self.property_types.join(", ")
            )));
        }

        match &state.results {
            None => {}
            Some(results) if results.is_empty() => {
                children.push(Fragment::text(format!(
                    "No properties found near {}",
                    state.postcode
                )));
            }
            Some(results) => {
                children.push(Fragment::List {
                    items: results.iter().map(listing_fragment).collect(),
                });
            }
        }

        Fragment::section("Property Search", children)
    }
}

fn listing_fragment(listing: &SearchListing) -> Fragment {
    Fragment::text(format!(
        "{} - {} miles - {}",
        listing.name,
        listing.distance_miles,
        if listing.available {
            "Available"
        } else {
            "Not available"
        }
    ))
}

#[async_trait]
impl CustomComponent for PropertySearch {
    async fn render(&self, config: &AppConfig) -> Fragment {
        self.render_state(config, &SearchState::default())
    }
}
