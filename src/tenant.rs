// Bonjour Investments tenant package
use crate::application::customization::Customization;
use crate::application::validation::ValidationError;
use crate::domain::config::{
    AnalyticsConfig, AppConfig, ChartConfig, ChartKind, ClientConfig, DashboardConfig, FieldValue,
    TabConfig,
};
use crate::infrastructure::simulated_search::SimulatedPropertySearch;
use crate::presentation::email_template::EmailTemplate;
use crate::presentation::search::PropertySearch;
use crate::presentation::supplier_directory::{Supplier, SupplierDirectory};
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;

fn tab(id: &str, label: &str, description: &str, icon: &str) -> TabConfig {
    TabConfig {
        id: id.to_string(),
        label: label.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
    }
}

fn record<const N: usize>(fields: [(&str, FieldValue); N]) -> BTreeMap<String, FieldValue> {
    fields
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

fn chart(
    kind: ChartKind,
    data_keys: &[&str],
    colors: &[&str],
    data: Vec<BTreeMap<String, FieldValue>>,
) -> ChartConfig {
    ChartConfig {
        kind,
        data_keys: data_keys.iter().map(|k| k.to_string()).collect(),
        colors: colors.iter().map(|c| c.to_string()).collect(),
        data,
    }
}

/// The full Bonjour Investments settings record.
pub fn app_config() -> AppConfig {
    AppConfig {
        title: "Bonjour Investments - Property Management".to_string(),
        company_name: "Bonjour Investments".to_string(),
        logo: "/path/to/bonjour-logo.png".to_string(),
        primary_color: "#3B82F6".to_string(),
        secondary_color: "#93C5FD".to_string(),
        user_name: "Fan Zhang".to_string(),
        dashboard: DashboardConfig {
            tabs: vec![
                tab("search", "Property Search", "Find suitable properties", "search"),
                tab("emailTemplate", "Email Template", "Generate supplier emails", "mail"),
                tab(
                    "supplierDatabase",
                    "Supplier Database",
                    "Manage supplier information",
                    "home",
                ),
            ],
            charts: BTreeMap::from([
                (
                    "supplierResponseTime".to_string(),
                    chart(
                        ChartKind::Bar,
                        &["avgResponseTime"],
                        &["#3B82F6"],
                        vec![
                            record([
                                ("supplier", "Maison".into()),
                                ("avgResponseTime", 1.5.into()),
                            ]),
                            record([
                                ("supplier", "Crystal".into()),
                                ("avgResponseTime", 2.1.into()),
                            ]),
                            record([
                                ("supplier", "London Aspect".into()),
                                ("avgResponseTime", 1.8.into()),
                            ]),
                        ],
                    ),
                ),
                (
                    "bookingsByLocation".to_string(),
                    chart(
                        ChartKind::Pie,
                        &["value"],
                        &["#3B82F6", "#93C5FD", "#BFDBFE"],
                        vec![
                            record([("name", "London".into()), ("value", 60.into())]),
                            record([("name", "Manchester".into()), ("value", 25.into())]),
                            record([("name", "Birmingham".into()), ("value", 15.into())]),
                        ],
                    ),
                ),
            ]),
        },
        analytics: AnalyticsConfig {
            charts: BTreeMap::from([
                (
                    "monthlyBookings".to_string(),
                    chart(
                        ChartKind::Line,
                        &["bookings"],
                        &["#3B82F6"],
                        vec![
                            record([("month", "Jan".into()), ("bookings", 45.into())]),
                            record([("month", "Feb".into()), ("bookings", 52.into())]),
                            record([("month", "Mar".into()), ("bookings", 61.into())]),
                            record([("month", "Apr".into()), ("bookings", 58.into())]),
                        ],
                    ),
                ),
                (
                    "averageStayDuration".to_string(),
                    chart(
                        ChartKind::Bar,
                        &["avgDays"],
                        &["#93C5FD"],
                        vec![
                            record([("year", "2021".into()), ("avgDays", 14.into())]),
                            record([("year", "2022".into()), ("avgDays", 16.into())]),
                            record([("year", "2023".into()), ("avgDays", 18.into())]),
                        ],
                    ),
                ),
            ]),
        },
        clients: vec![
            ClientConfig {
                id: "amazon".to_string(),
                name: "Amazon".to_string(),
                industry: "E-commerce".to_string(),
            },
            ClientConfig {
                id: "insuranceco".to_string(),
                name: "InsuranceCo".to_string(),
                industry: "Insurance".to_string(),
            },
        ],
        features: BTreeMap::from([
            ("propertySearch".to_string(), true),
            ("emailTemplates".to_string(), true),
            ("supplierDatabase".to_string(), true),
            ("booking".to_string(), true),
            ("reporting".to_string(), true),
        ]),
    }
}

/// The tenant's accommodation suppliers, as shown in the directory tab.
pub fn suppliers() -> Vec<Supplier> {
    vec![
        Supplier::new(1, "Maison Serviced Apartments", "London", "info@maison.com"),
        Supplier::new(
            2,
            "Crystal Property Shortlets",
            "Manchester",
            "bookings@crystal.com",
        ),
        Supplier::new(
            3,
            "London Aspect Apartments",
            "London",
            "reservations@londonaspect.com",
        ),
    ]
}

/// Assembles the exported bundle: config, component overrides for all three
/// tabs, and the reference-data bag. Validates eagerly, so shipping a config
/// with a gap fails at startup rather than rendering a blank tab.
pub fn customization() -> Result<Customization, ValidationError> {
    let config = app_config();

    let data = json_data();
    let property_types: Vec<String> = serde_json::from_value(data["propertyTypes"].clone())
        .unwrap_or_default();

    let search = PropertySearch::new(Arc::new(SimulatedPropertySearch::new()), property_types);

    let mut builder = Customization::builder(config)
        .component("search", Arc::new(search))
        .component("emailTemplate", Arc::new(EmailTemplate::new()))
        .component(
            "supplierDatabase",
            Arc::new(SupplierDirectory::new(suppliers())),
        );
    for (key, value) in json_data().as_object().into_iter().flatten() {
        builder = builder.data_entry(key.clone(), value.clone());
    }
    builder.build()
}

fn json_data() -> serde_json::Value {
    json!({
        "propertyTypes": ["Apartment", "House", "Studio"],
        "amenities": ["Parking", "Pet-friendly", "Elevator", "Ground floor"],
        "clientTypes": ["Corporate", "Insurance"],
    })
}
