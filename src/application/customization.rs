// Customization bundle - the contract surface a host shell consumes
use crate::application::registry::{ComponentRegistry, CustomComponent};
use crate::application::validation::{validate, ValidationError, ValidationIssue};
use crate::domain::config::AppConfig;
use crate::domain::data::CustomData;
use serde_json::Value;
use std::sync::Arc;

/// The tenant-supplied triple: settings, component overrides, reference data.
///
/// Built once at startup and immutable afterwards. The host reads `config`
/// for navigation/charts/branding, queries `components` by tab id, and
/// queries `data` by agreed keys. None of the lookups can fail; anything
/// absent reads as "no override" / empty.
#[derive(Debug)]
pub struct Customization {
    pub config: AppConfig,
    pub components: ComponentRegistry,
    pub data: CustomData,
}

impl Customization {
    pub fn builder(config: AppConfig) -> CustomizationBuilder {
        CustomizationBuilder::new(config)
    }

    /// Override lookup for one tab id. `None` means the host falls back to
    /// its default rendering.
    pub fn component(&self, id: &str) -> Option<Arc<dyn CustomComponent>> {
        self.components.get(id)
    }

    /// Re-checks the cross-entity invariants on an already-built bundle.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let issues = validate(&self.config, &self.components);
        if issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { issues })
        }
    }
}

/// Assembles a bundle. `build` validates eagerly so a malformed tenant
/// package fails at startup instead of rendering with silent gaps;
/// `build_unchecked` keeps the tolerate-everything path for hosts that
/// prefer degrading at render time.
pub struct CustomizationBuilder {
    config: AppConfig,
    registrations: Vec<(String, Arc<dyn CustomComponent>)>,
    data: CustomData,
}

impl CustomizationBuilder {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            registrations: Vec::new(),
            data: CustomData::new(),
        }
    }

    pub fn component(mut self, id: impl Into<String>, component: Arc<dyn CustomComponent>) -> Self {
        self.registrations.push((id.into(), component));
        self
    }

    pub fn data_entry(mut self, key: impl Into<String>, value: Value) -> Self {
        self.data.insert(key, value);
        self
    }

    pub fn build(self) -> Result<Customization, ValidationError> {
        let (bundle, mut issues) = self.assemble();
        issues.extend(validate(&bundle.config, &bundle.components));
        if issues.is_empty() {
            Ok(bundle)
        } else {
            Err(ValidationError { issues })
        }
    }

    pub fn build_unchecked(self) -> Customization {
        self.assemble().0
    }

    fn assemble(self) -> (Customization, Vec<ValidationIssue>) {
        let mut components = ComponentRegistry::new();
        let mut issues = Vec::new();
        for (id, component) in self.registrations {
            if components.register(id.clone(), component).is_err() {
                issues.push(ValidationIssue::DuplicateComponentId(id));
            }
        }
        (
            Customization {
                config: self.config,
                components,
                data: self.data,
            },
            issues,
        )
    }
}
