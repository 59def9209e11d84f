//! Position series - one bar per race entry

use serde::Serialize;

use super::{categories_in_order, LegendEntry};
use crate::config::ChartConfig;
use crate::entry::{AgeCategory, RaceEntry};

/// One bar of the position chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionBar {
    /// Bar label
    pub participant: String,
    /// Bar height; rank 1 is drawn highest when the axis is reversed
    pub position: u32,
    /// Colour group
    pub age_category: AgeCategory,
    /// Fill colour of the bar's category
    pub color: String,
}

/// Input for the "positions by participant" bar chart.
///
/// Entries are not aggregated: a participant with three results gets three
/// bars under the same label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionSeries {
    /// Chart titles, labels and axis orientation
    pub chart: ChartConfig,
    /// Category colours in order of first appearance
    pub legend: Vec<LegendEntry>,
    /// Bars in insertion order
    pub bars: Vec<PositionBar>,
}

impl PositionSeries {
    /// Derive the series from every entry.
    #[must_use]
    pub fn derive(entries: &[RaceEntry], chart: &ChartConfig) -> Self {
        let legend = LegendEntry::for_categories(&categories_in_order(entries), chart);

        let bars = entries
            .iter()
            .map(|entry| PositionBar {
                participant: entry.participant().to_string(),
                position: entry.position(),
                age_category: entry.age_category(),
                color: LegendEntry::color_of(&legend, entry.age_category()).to_string(),
            })
            .collect();

        Self {
            chart: chart.clone(),
            legend,
            bars,
        }
    }
}
