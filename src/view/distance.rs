//! Distance distribution - raw distances partitioned by age category

use serde::Serialize;

use super::{categories_in_order, LegendEntry};
use crate::config::ChartConfig;
use crate::entry::{AgeCategory, RaceEntry};

/// Five-number summary of one group, linear-interpolation quartiles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoxStats {
    /// Smallest value
    pub min: f64,
    /// First quartile
    pub q1: f64,
    /// Median
    pub median: f64,
    /// Third quartile
    pub q3: f64,
    /// Largest value
    pub max: f64,
}

impl BoxStats {
    /// Summarise `values`. `None` when empty.
    #[must_use]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        Some(Self {
            min: sorted[0],
            q1: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q3: quantile(&sorted, 0.75),
            max: sorted[sorted.len() - 1],
        })
    }
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn quantile(sorted: &[f64], p: f64) -> f64 {
    let h = (sorted.len() - 1) as f64 * p;
    let lower = h.floor() as usize;
    let upper = (lower + 1).min(sorted.len() - 1);
    (sorted[upper] - sorted[lower]).mul_add(h - lower as f64, sorted[lower])
}

/// Distances of every entry in one age category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceGroup {
    /// Group key
    pub age_category: AgeCategory,
    /// Box colour
    pub color: String,
    /// Raw distances, insertion order, duplicates kept
    pub distances: Vec<f64>,
    /// Convenience summary of `distances`
    pub stats: BoxStats,
}

/// Input for the "distance by age category" box chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceDistribution {
    /// Chart titles and labels
    pub chart: ChartConfig,
    /// Non-empty groups in order of first appearance
    pub groups: Vec<DistanceGroup>,
}

impl DistanceDistribution {
    /// Partition every entry's distance by age category.
    #[must_use]
    pub fn derive(entries: &[RaceEntry], chart: &ChartConfig) -> Self {
        let legend = LegendEntry::for_categories(&categories_in_order(entries), chart);

        let groups = legend
            .into_iter()
            .filter_map(|item| {
                let distances: Vec<f64> = entries
                    .iter()
                    .filter(|entry| entry.age_category() == item.age_category)
                    .map(RaceEntry::distance_km)
                    .collect();
                let stats = BoxStats::from_values(&distances)?;
                Some(DistanceGroup {
                    age_category: item.age_category,
                    color: item.color,
                    distances,
                    stats,
                })
            })
            .collect();

        Self {
            chart: chart.clone(),
            groups,
        }
    }

    /// Group for `category`, if any entry falls in it.
    #[must_use]
    pub fn group(&self, category: AgeCategory) -> Option<&DistanceGroup> {
        self.groups.iter().find(|g| g.age_category == category)
    }
}
