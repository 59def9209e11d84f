//! Race form - raw sidebar submission to a validated `RaceEntry`
//!
//! Mirrors the input widgets of the entry form: the distance widget clamps
//! to `[0, 100]` in 0.1 km steps and the position widget accepts integers
//! from 1. Dates and times arrive as text and are parsed here.

use chrono::{Local, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::entry::{AgeCategory, RaceEntry, MAX_DISTANCE_KM};
use crate::{Error, Result};

/// One submission of the "Add New Race Data" form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RaceForm {
    /// Race date, `YYYY-MM-DD`. Today when absent.
    pub race_date: Option<String>,
    /// Race name
    pub race_name: String,
    /// Participant name
    pub participant_name: String,
    /// Age category label, e.g. `"Teen (13-16)"`
    pub age_category: String,
    /// Distance in kilometres
    pub distance: f64,
    /// Completion time, `HH:MM` or `HH:MM:SS`
    pub completion_time: String,
    /// Final position
    pub position: i64,
}

impl Default for RaceForm {
    fn default() -> Self {
        Self {
            race_date: None,
            race_name: String::new(),
            participant_name: String::new(),
            age_category: AgeCategory::Junior.label().to_string(),
            distance: 0.0,
            completion_time: "00:00:00".to_string(),
            position: 1,
        }
    }
}

impl RaceForm {
    /// Coerce the submission into a `RaceEntry`.
    ///
    /// # Errors
    ///
    /// Returns error if the date, time or age category cannot be parsed,
    /// or if the position is below 1.
    pub fn into_entry(self) -> Result<RaceEntry> {
        let date = match self.race_date.as_deref().map(str::trim) {
            None | Some("") => Local::now().date_naive(),
            Some(raw) => parse_date(raw)?,
        };
        let age_category: AgeCategory = self.age_category.parse()?;
        let completion_time = parse_time(&self.completion_time)?;

        RaceEntry::builder(date, self.race_name, self.participant_name)
            .age_category(age_category)
            .distance_km(clamp_distance(self.distance))
            .completion_time(completion_time)
            .position(self.position)
            .build()
    }
}

impl TryFrom<RaceForm> for RaceEntry {
    type Error = Error;

    fn try_from(form: RaceForm) -> Result<Self> {
        form.into_entry()
    }
}

/// Parse a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns `Error::InvalidDate` if the text is not a calendar date.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| Error::InvalidDate(raw.to_string()))
}

/// Parse an `HH:MM:SS` or `HH:MM` time of day.
///
/// # Errors
///
/// Returns `Error::InvalidTime` if neither format matches.
pub fn parse_time(raw: &str) -> Result<NaiveTime> {
    let trimmed = raw.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|_| Error::InvalidTime(raw.to_string()))
}

/// Clamp to the widget range and snap to its 0.1 km step.
///
/// Non-finite input is passed through so the entry builder rejects it.
#[must_use]
pub fn clamp_distance(distance: f64) -> f64 {
    if !distance.is_finite() {
        return distance;
    }
    (distance.clamp(0.0, MAX_DISTANCE_KM) * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> RaceForm {
        RaceForm {
            race_date: Some("2024-05-01".to_string()),
            race_name: "Spring Sprint".to_string(),
            participant_name: "Amy".to_string(),
            age_category: "Teen (13-16)".to_string(),
            distance: 12.5,
            completion_time: "00:42:10".to_string(),
            position: 2,
        }
    }

    #[test]
    fn test_form_into_entry() {
        let entry = form().into_entry().unwrap();
        assert_eq!(entry.date(), NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(entry.age_category(), AgeCategory::Teen);
        assert_eq!(entry.completion_time_label(), "00:42:10");
        assert_eq!(entry.position(), 2);
    }

    #[test]
    fn test_missing_date_defaults_to_today() {
        let entry = RaceForm { race_date: None, ..form() }.into_entry().unwrap();
        assert_eq!(entry.date(), Local::now().date_naive());
    }

    #[test]
    fn test_time_without_seconds() {
        assert_eq!(parse_time("07:30").unwrap(), NaiveTime::from_hms_opt(7, 30, 0).unwrap());
        assert!(matches!(parse_time("7h30"), Err(Error::InvalidTime(_))));
    }

    #[test]
    fn test_distance_widget_clamping() {
        assert!((clamp_distance(150.0) - 100.0).abs() < f64::EPSILON);
        assert!(clamp_distance(-2.0).abs() < f64::EPSILON);
        assert!((clamp_distance(12.34) - 12.3).abs() < 1e-9);
        assert!(clamp_distance(f64::NAN).is_nan());
    }

    #[test]
    fn test_bad_date() {
        let err = RaceForm { race_date: Some("01/05/2024".to_string()), ..form() }.into_entry();
        assert!(matches!(err, Err(Error::InvalidDate(_))));
    }
}
