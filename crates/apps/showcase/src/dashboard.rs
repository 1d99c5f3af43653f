//! Mock dashboard content loaded from the bundled JSON fixture.

use mw_ui::{deserialize_variant, AlertVariant, BadgeTone};
use serde::Deserialize;
use thiserror::Error;

const DASHBOARD_FIXTURE: &str = include_str!("../fixtures/dashboard.json");

/// Failure to load dashboard content.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The fixture is not valid JSON or names an unknown variant.
    #[error("dashboard fixture is malformed: {0}")]
    Fixture(#[from] serde_json::Error),
    /// The fixture parsed but has no stat cards to show.
    #[error("dashboard fixture has no stats")]
    NoStats,
}

/// Everything the dashboard page renders besides static chrome.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DashboardData {
    /// Initials shown in the signed-in user's avatar.
    pub user_initials: String,
    /// Top navigation entries.
    pub nav: Vec<String>,
    /// Banners shown under the page header.
    #[serde(default)]
    pub alerts: Vec<DashboardAlert>,
    /// Headline metric cards.
    pub stats: Vec<StatCard>,
    /// Recent orders table rows.
    #[serde(default)]
    pub orders: Vec<OrderRow>,
}

/// Alert banner content.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DashboardAlert {
    /// Banner variant.
    #[serde(deserialize_with = "deserialize_variant")]
    pub variant: AlertVariant,
    /// Banner heading.
    pub title: String,
    /// Banner body.
    pub description: String,
}

/// One headline metric.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatCard {
    /// Metric name.
    pub label: String,
    /// Formatted metric value.
    pub value: String,
    /// Glyph shown in the accent well.
    pub glyph: String,
    /// Background class of the accent well.
    pub accent: String,
    /// Formatted change since the previous period.
    pub change: String,
    /// Badge tone for the change.
    #[serde(deserialize_with = "deserialize_variant")]
    pub tone: BadgeTone,
}

/// One row of the recent orders table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderRow {
    /// Customer initials for the avatar fallback.
    pub initials: String,
    /// Customer display name.
    pub customer: String,
    /// Product name.
    pub product: String,
    /// Order status label.
    pub status: String,
    /// Badge tone for the status.
    #[serde(deserialize_with = "deserialize_variant")]
    pub tone: BadgeTone,
    /// Formatted order amount.
    pub amount: String,
}

/// Parses dashboard content from a JSON payload.
pub fn parse_dashboard(raw: &str) -> Result<DashboardData, DashboardError> {
    let data: DashboardData = serde_json::from_str(raw)?;
    if data.stats.is_empty() {
        return Err(DashboardError::NoStats);
    }
    Ok(data)
}

/// Loads the bundled dashboard fixture.
pub fn load_dashboard() -> Result<DashboardData, DashboardError> {
    parse_dashboard(DASHBOARD_FIXTURE)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bundled_fixture_parses() {
        let data = load_dashboard().expect("bundled fixture");
        assert_eq!(data.user_initials, "CK");
        assert_eq!(data.nav, vec!["Dashboard", "Orders", "Products", "Analytics"]);
        assert_eq!(data.stats.len(), 4);
        assert_eq!(data.orders.len(), 4);
        assert_eq!(data.alerts[1].variant, AlertVariant::Warning);
        assert_eq!(data.stats[3].tone, BadgeTone::Warning);
        assert_eq!(data.orders[1].tone, BadgeTone::Info);
    }

    #[test]
    fn unknown_tone_is_rejected() {
        let raw = r#"{
            "user_initials": "CK",
            "nav": [],
            "stats": [{
                "label": "Orders", "value": "1", "glyph": "📦",
                "accent": "bg-mw-green/10", "change": "+1%", "tone": "urgent"
            }]
        }"#;
        let err = parse_dashboard(raw).expect_err("unknown tone");
        assert!(matches!(err, DashboardError::Fixture(_)));
        assert!(err.to_string().contains("unknown badge tone `urgent`"));
    }

    #[test]
    fn empty_stats_are_rejected() {
        let raw = r#"{ "user_initials": "CK", "nav": [], "stats": [] }"#;
        let err = parse_dashboard(raw).expect_err("no stats");
        assert_eq!(err.to_string(), "dashboard fixture has no stats");
    }

    #[test]
    fn optional_sections_default_to_empty() {
        let raw = r#"{
            "user_initials": "CK",
            "nav": ["Dashboard"],
            "stats": [{
                "label": "Orders", "value": "1", "glyph": "📦",
                "accent": "bg-mw-green/10", "change": "+1%", "tone": "success"
            }]
        }"#;
        let data = parse_dashboard(raw).expect("minimal fixture");
        assert!(data.alerts.is_empty());
        assert!(data.orders.is_empty());
    }
}
