// Component registry - Tenant overrides keyed by tab id
use crate::domain::config::AppConfig;
use crate::domain::fragment::Fragment;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A tenant-supplied renderable unit.
///
/// The host invokes it with the current config as its only input; whatever
/// transient interactive state the unit keeps lives inside one render
/// lifetime and is never visible to the bundle. A unit may await its own
/// async work (the search widget does) without coordinating with siblings.
#[async_trait]
pub trait CustomComponent: Send + Sync {
    async fn render(&self, config: &AppConfig) -> Fragment;
}

/// Maps identifiers (typically tab ids) to override components.
///
/// Registration fails fast on a duplicate id; lookup of an unknown id is a
/// plain `None`, leaving fallback rendering to the host.
#[derive(Default)]
pub struct ComponentRegistry {
    entries: BTreeMap<String, Arc<dyn CustomComponent>>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        id: impl Into<String>,
        component: Arc<dyn CustomComponent>,
    ) -> Result<(), RegistryError> {
        let id = id.into();
        if self.entries.contains_key(&id) {
            return Err(RegistryError::DuplicateComponentId(id));
        }
        self.entries.insert(id, component);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<Arc<dyn CustomComponent>> {
        self.entries.get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("ids", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("component id already registered: {0}")]
    DuplicateComponentId(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Placeholder;

    #[async_trait]
    impl CustomComponent for Placeholder {
        async fn render(&self, _config: &AppConfig) -> Fragment {
            Fragment::Empty
        }
    }

    #[test]
    fn test_lookup_returns_registered_component() {
        let mut registry = ComponentRegistry::new();
        registry
            .register("search", Arc::new(Placeholder))
            .expect("first registration");

        assert!(registry.contains("search"));
        assert!(registry.get("search").is_some());
    }

    #[test]
    fn test_lookup_is_idempotent() {
        let mut registry = ComponentRegistry::new();
        registry
            .register("search", Arc::new(Placeholder))
            .expect("first registration");

        let first = registry.get("search").unwrap();
        let second = registry.get("search").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_missing_id_yields_no_override() {
        let registry = ComponentRegistry::new();
        assert!(registry.get("emailTemplate").is_none());
    }

    #[test]
    fn test_duplicate_registration_is_rejected() {
        let mut registry = ComponentRegistry::new();
        registry
            .register("search", Arc::new(Placeholder))
            .expect("first registration");
        let err = registry
            .register("search", Arc::new(Placeholder))
            .expect_err("duplicate must fail");
        assert_eq!(err, RegistryError::DuplicateComponentId("search".to_string()));
    }
}
