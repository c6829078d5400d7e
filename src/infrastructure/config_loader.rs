// File-based tenant configuration loading
use crate::domain::config::AppConfig;

/// Loads an `AppConfig` from a TOML file, letting a deployment override the
/// in-code tenant config without a rebuild. `name` is a path without
/// extension, e.g. `config/tenant`.
pub fn load_app_config(name: &str) -> anyhow::Result<AppConfig> {
    tracing::debug!("loading tenant config from {}", name);
    let settings = config::Config::builder()
        .add_source(config::File::with_name(name))
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Parses an `AppConfig` from in-memory TOML.
pub fn parse_app_config(toml_text: &str) -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::from_str(
            toml_text,
            config::FileFormat::Toml,
        ))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::ChartKind;

    const TENANT_TOML: &str = r##"
title = "Bonjour Investments - Property Management"
company_name = "Bonjour Investments"
logo = "/path/to/bonjour-logo.png"
primary_color = "#3B82F6"
secondary_color = "#93C5FD"
user_name = "Fan Zhang"

[[dashboard.tabs]]
id = "search"
label = "Property Search"
description = "Find suitable properties"
icon = "search"

[dashboard.charts.bookings_by_location]
kind = "pie"
data_keys = ["value"]
colors = ["#3B82F6", "#93C5FD", "#BFDBFE"]

[[dashboard.charts.bookings_by_location.data]]
name = "London"
value = 60

[[dashboard.charts.bookings_by_location.data]]
name = "Manchester"
value = 40

[analytics]

[[clients]]
id = "amazon"
name = "Amazon"
industry = "E-commerce"

[features]
booking = true
reporting = false
"##;

    #[test]
    fn test_parse_app_config_from_toml() {
        let config = parse_app_config(TENANT_TOML).unwrap();

        assert_eq!(config.company_name, "Bonjour Investments");
        assert_eq!(config.dashboard.tabs.len(), 1);
        assert_eq!(config.dashboard.tabs[0].id, "search");
        assert!(config.feature_enabled("booking"));
        assert!(!config.feature_enabled("reporting"));

        let chart = config.chart("bookings_by_location").unwrap();
        assert_eq!(chart.kind, ChartKind::Pie);
        assert_eq!(chart.sum_of("value"), 100.0);
        assert_eq!(chart.data[0]["name"].as_str(), Some("London"));
    }

    #[test]
    fn test_in_code_config_round_trips_through_toml() {
        let config = crate::tenant::app_config();
        let serialized = toml::to_string(&config).unwrap();
        let reparsed = parse_app_config(&serialized).unwrap();

        assert_eq!(reparsed.title, config.title);
        assert_eq!(reparsed.dashboard.tabs.len(), config.dashboard.tabs.len());
        assert_eq!(
            reparsed.analytics.charts.len(),
            config.analytics.charts.len()
        );
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        assert!(parse_app_config("title = ").is_err());
    }
}
