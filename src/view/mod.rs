//! View Deriver - presentation inputs computed from the whole store
//!
//! Every render recomputes all four views from scratch:
//!
//! ```text
//! RecordStore ──derive()──> Dashboard
//!                             ├── Placeholder            (no entries)
//!                             └── Ready(ViewModel)
//!                                   ├── PositionSeries       [bar chart]
//!                                   ├── DistanceDistribution [box chart]
//!                                   ├── TableView            [sorted, styled]
//!                                   └── SummaryMetrics       [3 scalars]
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use race_tracker::config::DashboardConfig;
//! use race_tracker::entry::{AgeCategory, RaceEntry};
//! use race_tracker::store::RecordStore;
//! use race_tracker::view::{derive, Dashboard};
//!
//! let config = DashboardConfig::default();
//! let mut store = RecordStore::new();
//! assert!(matches!(derive(&store, &config), Dashboard::Placeholder { .. }));
//!
//! let date = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
//! store.append(
//!     RaceEntry::builder(date, "City Loop", "Cid")
//!         .age_category(AgeCategory::Junior)
//!         .distance_km(5.0)
//!         .build()?,
//! );
//!
//! let Dashboard::Ready(view) = derive(&store, &config) else {
//!     unreachable!()
//! };
//! assert_eq!(view.metrics.participants, 1);
//! # Ok::<(), race_tracker::Error>(())
//! ```

mod distance;
pub mod gradient;
mod positions;
mod summary;
mod table;

pub use distance::{BoxStats, DistanceDistribution, DistanceGroup};
pub use positions::{PositionBar, PositionSeries};
pub use summary::{MetricTile, SummaryMetrics};
pub use table::{CellStyle, TableRow, TableView};

use serde::Serialize;
use tracing::debug;

use crate::config::{ChartConfig, DashboardConfig};
use crate::entry::{AgeCategory, RaceEntry};
use crate::store::RecordStore;

/// Category-to-colour assignment shared by both charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    /// Category
    pub age_category: AgeCategory,
    /// Assigned palette colour
    pub color: String,
}

impl LegendEntry {
    fn for_categories(categories: &[AgeCategory], chart: &ChartConfig) -> Vec<Self> {
        categories
            .iter()
            .enumerate()
            .map(|(i, &age_category)| Self {
                age_category,
                color: chart.color(i).to_string(),
            })
            .collect()
    }

    fn color_of(legend: &[Self], category: AgeCategory) -> &str {
        legend
            .iter()
            .find(|item| item.age_category == category)
            .map_or("", |item| item.color.as_str())
    }
}

/// Distinct categories in the order they first occur.
fn categories_in_order(entries: &[RaceEntry]) -> Vec<AgeCategory> {
    let mut seen = Vec::with_capacity(AgeCategory::ALL.len());
    for entry in entries {
        if !seen.contains(&entry.age_category()) {
            seen.push(entry.age_category());
        }
    }
    seen
}

/// Everything the page draws when there is data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    /// Page title
    pub page_title: String,
    /// Position bar chart input
    pub positions: PositionSeries,
    /// Distance box chart input
    pub distances: DistanceDistribution,
    /// Results table
    pub table: TableView,
    /// Summary metrics
    pub metrics: SummaryMetrics,
    /// Labelled metric widgets
    pub metric_tiles: Vec<MetricTile>,
}

impl ViewModel {
    /// Derive all views from `entries`. `None` when empty.
    #[must_use]
    pub fn derive(entries: &[RaceEntry], config: &DashboardConfig) -> Option<Self> {
        let metrics = SummaryMetrics::derive(entries)?;

        Some(Self {
            page_title: config.page_title.clone(),
            positions: PositionSeries::derive(entries, &config.position_chart),
            distances: DistanceDistribution::derive(entries, &config.distance_chart),
            table: TableView::derive(entries, config.table_colormap),
            metric_tiles: metrics.tiles(&config.metric_labels),
            metrics,
        })
    }
}

/// What the page shows after a render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Dashboard {
    /// No entries yet: only an explanatory message
    Placeholder {
        /// Message to display
        message: String,
    },
    /// Charts, table and metrics
    Ready(Box<ViewModel>),
}

impl Dashboard {
    /// Check if this is the empty-store placeholder.
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }

    /// The view model, if any.
    #[must_use]
    pub fn view(&self) -> Option<&ViewModel> {
        match self {
            Self::Placeholder { .. } => None,
            Self::Ready(view) => Some(view),
        }
    }
}

/// Derive the dashboard from the full store.
///
/// An empty store skips every derivation and yields the placeholder.
#[must_use]
pub fn derive(store: &RecordStore, config: &DashboardConfig) -> Dashboard {
    debug!(entries = store.len(), "deriving dashboard");

    ViewModel::derive(store.all(), config).map_or_else(
        || Dashboard::Placeholder {
            message: config.placeholder_message.clone(),
        },
        |view| Dashboard::Ready(Box::new(view)),
    )
}
