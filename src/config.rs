//! Dashboard configuration
//!
//! Everything here is passed through to the rendering layer untouched:
//! titles, axis labels, palettes and the table colormap. Defaults reproduce
//! the stock "Girls Cycling Race Tracker" page.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Plotly `Set3` qualitative palette.
pub const SET3: [&str; 12] = [
    "#8dd3c7", "#ffffb3", "#bebada", "#fb8072", "#80b1d3", "#fdb462", "#b3de69", "#fccde5",
    "#d9d9d9", "#bc80bd", "#ccebc5", "#ffed6f",
];

/// Plotly `Set2` qualitative palette.
pub const SET2: [&str; 8] = [
    "#66c2a5", "#fc8d62", "#8da0cb", "#e78ac3", "#a6d854", "#ffd92f", "#e5c494", "#b3b3b3",
];

/// Colormap used for the distance column gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Colormap {
    /// Red (low) through yellow to green (high).
    #[default]
    RdYlGn,
}

/// Per-chart configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Chart title
    pub title: String,
    /// Horizontal axis label
    pub x_label: String,
    /// Vertical axis label
    pub y_label: String,
    /// Colours assigned to categories in order of first appearance
    pub palette: Vec<String>,
    /// Draw the vertical axis top-down (rank 1 highest)
    pub reverse_y_axis: bool,
}

impl ChartConfig {
    fn new(title: &str, x_label: &str, y_label: &str, palette: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            palette: palette.iter().map(ToString::to_string).collect(),
            reverse_y_axis: false,
        }
    }

    /// Palette colour for the `index`-th category, cycling when exhausted.
    #[must_use]
    pub fn color(&self, index: usize) -> &str {
        if self.palette.is_empty() {
            return "";
        }
        &self.palette[index % self.palette.len()]
    }
}

/// Labels for the three summary metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricLabels {
    /// Distinct participant count
    pub participants: String,
    /// Distinct race count
    pub races: String,
    /// Mean distance
    pub average_distance: String,
}

impl Default for MetricLabels {
    fn default() -> Self {
        Self {
            participants: "Total Participants".to_string(),
            races: "Total Races".to_string(),
            average_distance: "Average Race Distance".to_string(),
        }
    }
}

/// Dashboard configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Page title
    pub page_title: String,
    /// Position bar chart
    pub position_chart: ChartConfig,
    /// Distance box chart
    pub distance_chart: ChartConfig,
    /// Gradient applied to the table's distance column
    pub table_colormap: Colormap,
    /// Summary metric labels
    pub metric_labels: MetricLabels,
    /// Shown instead of every view while the store is empty
    pub placeholder_message: String,
    /// Shown after a submission is accepted
    pub success_message: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        let mut position_chart =
            ChartConfig::new("Race Positions by Participant", "Participant", "Position", &SET3);
        position_chart.reverse_y_axis = true;

        Self {
            page_title: "Girls Cycling Race Tracker".to_string(),
            position_chart,
            distance_chart: ChartConfig::new(
                "Distance Distribution by Age Category",
                "Age Category",
                "Distance (km)",
                &SET2,
            ),
            table_colormap: Colormap::RdYlGn,
            metric_labels: MetricLabels::default(),
            placeholder_message: "No race data available. Add race entries using the sidebar!"
                .to_string(),
            success_message: "Race entry added successfully!".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Create a new config builder
    #[must_use]
    pub fn builder() -> DashboardConfigBuilder {
        DashboardConfigBuilder::default()
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns error if the JSON is malformed or the config fails
    /// [`DashboardConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that both charts have at least one palette colour.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` naming the chart with an empty palette.
    pub fn validate(&self) -> Result<()> {
        for (name, chart) in [
            ("position_chart", &self.position_chart),
            ("distance_chart", &self.distance_chart),
        ] {
            if chart.palette.is_empty() {
                return Err(Error::Config(format!("{name}.palette must not be empty")));
            }
        }
        Ok(())
    }
}

/// Dashboard config builder
#[derive(Debug, Default)]
pub struct DashboardConfigBuilder {
    config: DashboardConfig,
}

impl DashboardConfigBuilder {
    /// Set the page title
    #[must_use]
    pub fn page_title(mut self, title: impl Into<String>) -> Self {
        self.config.page_title = title.into();
        self
    }

    /// Replace the position chart config
    #[must_use]
    pub fn position_chart(mut self, chart: ChartConfig) -> Self {
        self.config.position_chart = chart;
        self
    }

    /// Replace the distance chart config
    #[must_use]
    pub fn distance_chart(mut self, chart: ChartConfig) -> Self {
        self.config.distance_chart = chart;
        self
    }

    /// Set the placeholder shown while the store is empty
    #[must_use]
    pub fn placeholder_message(mut self, message: impl Into<String>) -> Self {
        self.config.placeholder_message = message.into();
        self
    }

    /// Set the message shown after a successful submission
    #[must_use]
    pub fn success_message(mut self, message: impl Into<String>) -> Self {
        self.config.success_message = message.into();
        self
    }

    /// Build the config
    ///
    /// # Errors
    ///
    /// Returns error if a chart palette is empty
    pub fn build(self) -> Result<DashboardConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_page() {
        let config = DashboardConfig::default();
        assert_eq!(config.page_title, "Girls Cycling Race Tracker");
        assert!(config.position_chart.reverse_y_axis);
        assert!(!config.distance_chart.reverse_y_axis);
        assert_eq!(config.position_chart.palette.len(), SET3.len());
        assert_eq!(config.distance_chart.palette[0], "#66c2a5");
    }

    #[test]
    fn test_palette_cycles() {
        let chart = DashboardConfig::default().distance_chart;
        assert_eq!(chart.color(0), chart.color(SET2.len()));
    }

    #[test]
    fn test_from_json_partial() {
        let config = DashboardConfig::from_json(r#"{"page_title": "Club Results"}"#).unwrap();
        assert_eq!(config.page_title, "Club Results");
        assert_eq!(config.success_message, "Race entry added successfully!");
    }

    #[test]
    fn test_empty_palette_rejected() {
        let mut chart = DashboardConfig::default().position_chart;
        chart.palette.clear();
        let err = DashboardConfig::builder().position_chart(chart).build();
        assert!(matches!(err, Err(Error::Config(_))));
    }
}
