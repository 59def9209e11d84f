//! Summary metrics

use std::collections::HashSet;

use serde::Serialize;

use crate::config::MetricLabels;
use crate::entry::RaceEntry;

/// Headline numbers shown under the charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryMetrics {
    /// Distinct participant names (exact match, empty name counts once)
    pub participants: usize,
    /// Distinct race names
    pub races: usize,
    /// Mean distance in km, rounded to 2 decimals
    pub average_distance_km: f64,
}

/// One labelled metric widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricTile {
    /// Widget label
    pub label: String,
    /// Display value
    pub value: String,
}

impl SummaryMetrics {
    /// Compute metrics over every entry. `None` when there are no entries,
    /// since the mean is undefined.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn derive(entries: &[RaceEntry]) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }

        let participants: HashSet<&str> = entries.iter().map(RaceEntry::participant).collect();
        let races: HashSet<&str> = entries.iter().map(RaceEntry::race_name).collect();
        let total: f64 = entries.iter().map(RaceEntry::distance_km).sum();
        let mean = total / entries.len() as f64;

        Some(Self {
            participants: participants.len(),
            races: races.len(),
            average_distance_km: round2(mean),
        })
    }

    /// Average distance as shown on the page, e.g. `10.0 km`.
    #[must_use]
    pub fn average_distance_label(&self) -> String {
        // Debug keeps the trailing ".0" on whole numbers
        format!("{:?} km", self.average_distance_km)
    }

    /// The three metric widgets, in display order.
    #[must_use]
    pub fn tiles(&self, labels: &MetricLabels) -> Vec<MetricTile> {
        vec![
            MetricTile {
                label: labels.participants.clone(),
                value: self.participants.to_string(),
            },
            MetricTile {
                label: labels.races.clone(),
                value: self.races.to_string(),
            },
            MetricTile {
                label: labels.average_distance.clone(),
                value: self.average_distance_label(),
            },
        ]
    }
}

/// Two-decimal rounding, exact halves to even.
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
