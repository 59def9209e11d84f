//! Sorted results table with a colour-scaled distance column

use std::sync::Arc;

use arrow::array::{ArrayRef, Date32Array, Float64Array, StringArray, UInt32Array};
use arrow::datatypes::{DataType, Date32Type, Field, Schema};
use arrow::record_batch::RecordBatch;
use chrono::NaiveDate;
use serde::Serialize;

use super::gradient::{Normalizer, Rgb};
use crate::config::Colormap;
use crate::entry::{AgeCategory, RaceEntry};
use crate::Result;

/// Background and foreground of one styled cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellStyle {
    /// Gradient colour
    pub background: Rgb,
    /// Readable text colour on `background`
    pub color: &'static str,
}

/// One row of the results table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    /// Race date
    pub date: NaiveDate,
    /// Race name
    pub race_name: String,
    /// Participant name
    pub participant: String,
    /// Age category
    pub age_category: AgeCategory,
    /// Distance in km
    pub distance: f64,
    /// `HH:MM:SS`
    pub completion_time: String,
    /// Final position
    pub position: u32,
    /// Style of the distance cell
    pub distance_style: CellStyle,
}

/// Results table sorted by date, then position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    /// Colormap the distance styles were sampled from
    pub colormap: Colormap,
    /// Rows in display order
    pub rows: Vec<TableRow>,
}

impl TableView {
    /// Sort entries by `(date, position)` ascending and style the distance
    /// column.
    ///
    /// The sort is stable, so entries sharing a date and position keep their
    /// insertion order. The gradient is fitted to the whole column and does
    /// not depend on row order.
    #[must_use]
    pub fn derive(entries: &[RaceEntry], colormap: Colormap) -> Self {
        let norm = Normalizer::fit(entries.iter().map(RaceEntry::distance_km));

        let mut sorted: Vec<&RaceEntry> = entries.iter().collect();
        sorted.sort_by_key(|entry| (entry.date(), entry.position()));

        let rows = sorted
            .into_iter()
            .map(|entry| {
                let t = norm.map_or(0.0, |n| n.normalize(entry.distance_km()));
                let background = colormap.sample(t);
                TableRow {
                    date: entry.date(),
                    race_name: entry.race_name().to_string(),
                    participant: entry.participant().to_string(),
                    age_category: entry.age_category(),
                    distance: entry.distance_km(),
                    completion_time: entry.completion_time_label(),
                    position: entry.position(),
                    distance_style: CellStyle {
                        background,
                        color: background.text_color(),
                    },
                }
            })
            .collect();

        Self { colormap, rows }
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Arrow schema of [`TableView::to_record_batch`].
    #[must_use]
    pub fn schema() -> Schema {
        Schema::new(vec![
            Field::new("date", DataType::Date32, false),
            Field::new("race_name", DataType::Utf8, false),
            Field::new("participant", DataType::Utf8, false),
            Field::new("age_category", DataType::Utf8, false),
            Field::new("distance", DataType::Float64, false),
            Field::new("completion_time", DataType::Utf8, false),
            Field::new("position", DataType::UInt32, false),
        ])
    }

    /// Export the rows, in display order, as an Arrow record batch.
    ///
    /// # Errors
    ///
    /// Returns error if Arrow rejects the assembled columns.
    pub fn to_record_batch(&self) -> Result<RecordBatch> {
        let dates: Vec<i32> = self
            .rows
            .iter()
            .map(|r| Date32Type::from_naive_date(r.date))
            .collect();
        let columns: Vec<ArrayRef> = vec![
            Arc::new(Date32Array::from(dates)),
            Arc::new(StringArray::from_iter_values(self.rows.iter().map(|r| r.race_name.as_str()))),
            Arc::new(StringArray::from_iter_values(self.rows.iter().map(|r| r.participant.as_str()))),
            Arc::new(StringArray::from_iter_values(self.rows.iter().map(|r| r.age_category.label()))),
            Arc::new(Float64Array::from_iter_values(self.rows.iter().map(|r| r.distance))),
            Arc::new(StringArray::from_iter_values(
                self.rows.iter().map(|r| r.completion_time.as_str()),
            )),
            Arc::new(UInt32Array::from_iter_values(self.rows.iter().map(|r| r.position))),
        ];

        Ok(RecordBatch::try_new(Arc::new(Self::schema()), columns)?)
    }
}
