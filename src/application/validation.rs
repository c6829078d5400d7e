// Eager bundle validation - catches silent UI gaps before the host sees them
use crate::application::registry::ComponentRegistry;
use crate::domain::config::AppConfig;
use std::collections::BTreeSet;

/// One defect found in a tenant configuration.
///
/// These are exactly the cross-entity invariants the schema itself does not
/// enforce: a host rendering a config with any of them gets a silent gap (a
/// tab with no content, a series with no color, a hole in a chart).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationIssue {
    #[error("duplicate tab id: {0}")]
    DuplicateTabId(String),
    #[error("duplicate client id: {0}")]
    DuplicateClientId(String),
    #[error("component id registered twice: {0}")]
    DuplicateComponentId(String),
    #[error("tab {0} has no registered component")]
    UnregisteredTab(String),
    #[error("chart {chart}: {colors} color(s) for {series} series")]
    InsufficientColors {
        chart: String,
        colors: usize,
        series: usize,
    },
    #[error("chart {chart}: record {index} is missing data key {key}")]
    MissingDataKey {
        chart: String,
        index: usize,
        key: String,
    },
}

#[derive(Debug, thiserror::Error)]
#[error("tenant configuration has {} validation issue(s)", .issues.len())]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

/// Checks a config/registry pair and reports every issue found.
///
/// Never short-circuits: a malformed tenant package should surface all of
/// its defects in one pass.
pub fn validate(config: &AppConfig, components: &ComponentRegistry) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let mut seen_tabs = BTreeSet::new();
    for tab in &config.dashboard.tabs {
        if !seen_tabs.insert(tab.id.as_str()) {
            issues.push(ValidationIssue::DuplicateTabId(tab.id.clone()));
        }
        if !components.contains(&tab.id) {
            issues.push(ValidationIssue::UnregisteredTab(tab.id.clone()));
        }
    }

    let mut seen_clients = BTreeSet::new();
    for client in &config.clients {
        if !seen_clients.insert(client.id.as_str()) {
            issues.push(ValidationIssue::DuplicateClientId(client.id.clone()));
        }
    }

    let dashboard_charts = config.dashboard.charts.iter();
    let analytics_charts = config.analytics.charts.iter();
    for (id, chart) in dashboard_charts.chain(analytics_charts) {
        if chart.colors.len() < chart.data_keys.len() {
            issues.push(ValidationIssue::InsufficientColors {
                chart: id.clone(),
                colors: chart.colors.len(),
                series: chart.data_keys.len(),
            });
        }
        for (index, record) in chart.data.iter().enumerate() {
            for key in &chart.data_keys {
                if !record.contains_key(key) {
                    issues.push(ValidationIssue::MissingDataKey {
                        chart: id.clone(),
                        index,
                        key: key.clone(),
                    });
                }
            }
        }
    }

    if !issues.is_empty() {
        tracing::warn!("tenant configuration has {} issue(s)", issues.len());
    }
    issues
}
