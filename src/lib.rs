//! Tenant customization layer for a multi-tenant dashboard host.
//!
//! A tenant package exports one [`Customization`] bundle: an [`AppConfig`]
//! describing navigation, branding and chart data, a [`ComponentRegistry`]
//! of override components keyed by tab id, and a free-form [`CustomData`]
//! bag of reference lists. The host shell composes these without any
//! compile-time knowledge of the tenant's widgets.
//!
//! The shipped tenant is Bonjour Investments ([`tenant::customization`]).

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod logging;
pub mod presentation;
pub mod tenant;

pub use application::customization::{Customization, CustomizationBuilder};
pub use application::registry::{ComponentRegistry, CustomComponent, RegistryError};
pub use application::search_backend::{PropertySearchBackend, SearchListing};
pub use application::validation::{ValidationError, ValidationIssue};
pub use domain::config::{
    AnalyticsConfig, AppConfig, ChartConfig, ChartKind, ClientConfig, DashboardConfig, FieldValue,
    TabConfig,
};
pub use domain::data::CustomData;
pub use domain::fragment::Fragment;
