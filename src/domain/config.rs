// Tenant configuration domain model
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level settings for one tenant deployment.
///
/// Assembled in code by the tenant module or deserialized from a TOML file;
/// either way it is plain data with no construction-time validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub title: String,
    pub company_name: String,
    pub logo: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub user_name: String,
    pub dashboard: DashboardConfig,
    pub analytics: AnalyticsConfig,
    #[serde(default)]
    pub clients: Vec<ClientConfig>,
    #[serde(default)]
    pub features: BTreeMap<String, bool>,
}

impl AppConfig {
    /// An absent flag reads as disabled; the host gates optional UI on this.
    pub fn feature_enabled(&self, name: &str) -> bool {
        self.features.get(name).copied().unwrap_or(false)
    }

    /// Looks up a chart by id across the dashboard section first, then
    /// analytics.
    pub fn chart(&self, id: &str) -> Option<&ChartConfig> {
        self.dashboard
            .charts
            .get(id)
            .or_else(|| self.analytics.charts.get(id))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Navigation tabs, in display order.
    #[serde(default)]
    pub tabs: Vec<TabConfig>,
    #[serde(default)]
    pub charts: BTreeMap<String, ChartConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    #[serde(default)]
    pub charts: BTreeMap<String, ChartConfig>,
}

/// One navigation tab. The `id` doubles as the component registry lookup key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabConfig {
    pub id: String,
    pub label: String,
    pub description: String,
    /// Opaque icon identifier; resolving it to an asset is the host's job.
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub id: String,
    pub name: String,
    pub industry: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

/// One chart definition: which fields to plot, with which colors, over which
/// records. `colors[i]` pairs positionally with `data_keys[i]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub data_keys: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub data: Vec<BTreeMap<String, FieldValue>>,
}

impl ChartConfig {
    /// Color assigned to the series at `index`, when the tenant supplied one.
    pub fn color_for(&self, index: usize) -> Option<&str> {
        self.colors.get(index).map(String::as_str)
    }

    /// Sums the numeric values of `key` across all records, skipping records
    /// where the key is absent or non-numeric.
    pub fn sum_of(&self, key: &str) -> f64 {
        self.data
            .iter()
            .filter_map(|record| record.get(key))
            .filter_map(FieldValue::as_f64)
            .sum()
    }
}

/// A single cell in a chart record: numeric or categorical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            Self::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v.as_str()),
            _ => None,
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart_with_values() -> ChartConfig {
        ChartConfig {
            kind: ChartKind::Pie,
            data_keys: vec!["value".to_string()],
            colors: vec!["#3B82F6".to_string(), "#93C5FD".to_string()],
            data: vec![
                BTreeMap::from([
                    ("name".to_string(), FieldValue::from("London")),
                    ("value".to_string(), FieldValue::from(60)),
                ]),
                BTreeMap::from([
                    ("name".to_string(), FieldValue::from("Manchester")),
                    ("value".to_string(), FieldValue::from(40.0)),
                ]),
            ],
        }
    }

    #[test]
    fn test_feature_enabled_defaults_to_false() {
        let config = crate::tenant::app_config();
        assert!(config.feature_enabled("booking"));
        assert!(!config.feature_enabled("no_such_flag"));
    }

    #[test]
    fn test_color_for_pairs_positionally() {
        let chart = chart_with_values();
        assert_eq!(chart.color_for(0), Some("#3B82F6"));
        assert_eq!(chart.color_for(1), Some("#93C5FD"));
        assert_eq!(chart.color_for(2), None);
    }

    #[test]
    fn test_sum_of_mixes_int_and_float() {
        let chart = chart_with_values();
        assert_eq!(chart.sum_of("value"), 100.0);
        // Categorical fields do not contribute.
        assert_eq!(chart.sum_of("name"), 0.0);
        assert_eq!(chart.sum_of("missing"), 0.0);
    }

    #[test]
    fn test_chart_lookup_spans_dashboard_and_analytics() {
        let config = crate::tenant::app_config();
        assert!(config.chart("bookingsByLocation").is_some());
        assert!(config.chart("monthlyBookings").is_some());
        assert!(config.chart("nonexistent").is_none());
    }
}
