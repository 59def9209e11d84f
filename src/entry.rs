//! Race Entry - one submitted race result

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Upper bound of the distance widget, in kilometres.
pub const MAX_DISTANCE_KM: f64 = 100.0;

/// Fixed age band a participant races in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgeCategory {
    /// Ages 8 to 12.
    Junior,
    /// Ages 13 to 16.
    Teen,
    /// Ages 17 to 19.
    Youth,
}

impl AgeCategory {
    /// All categories in form order.
    pub const ALL: [Self; 3] = [Self::Junior, Self::Teen, Self::Youth];

    /// Bare category name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Junior => "Junior",
            Self::Teen => "Teen",
            Self::Youth => "Youth",
        }
    }

    /// Label shown in the form select box, including the age range.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Junior => "Junior (8-12)",
            Self::Teen => "Teen (13-16)",
            Self::Youth => "Youth (17-19)",
        }
    }
}

impl fmt::Display for AgeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AgeCategory {
    type Err = Error;

    /// Accepts either the form label or the bare name, case-insensitive.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| {
                trimmed.eq_ignore_ascii_case(category.label())
                    || trimmed.eq_ignore_ascii_case(category.name())
            })
            .ok_or_else(|| Error::UnknownAgeCategory(s.to_string()))
    }
}

/// Race Entry represents a single race result for one participant.
///
/// Entries are immutable once built. Range checks on distance and position
/// happen in [`RaceEntryBuilder::build`], so every `RaceEntry` in a store is
/// well-formed. Names are free text and may be empty; no cross-field
/// consistency is enforced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RaceEntry {
    date: NaiveDate,
    race_name: String,
    participant: String,
    age_category: AgeCategory,
    #[serde(rename = "distance")]
    distance_km: f64,
    completion_time: NaiveTime,
    position: u32,
}

impl RaceEntry {
    /// Create a builder with the identifying fields.
    ///
    /// # Arguments
    ///
    /// * `date` - Calendar date of the race
    /// * `race_name` - Name of the race (may be empty)
    /// * `participant` - Participant name (may be empty)
    #[must_use]
    pub fn builder(
        date: NaiveDate,
        race_name: impl Into<String>,
        participant: impl Into<String>,
    ) -> RaceEntryBuilder {
        RaceEntryBuilder::new(date, race_name, participant)
    }

    /// Get the race date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Get the race name.
    #[must_use]
    pub fn race_name(&self) -> &str {
        &self.race_name
    }

    /// Get the participant name.
    #[must_use]
    pub fn participant(&self) -> &str {
        &self.participant
    }

    /// Get the age category.
    #[must_use]
    pub const fn age_category(&self) -> AgeCategory {
        self.age_category
    }

    /// Get the race distance in kilometres.
    #[must_use]
    pub const fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Get the completion time (whole seconds).
    #[must_use]
    pub const fn completion_time(&self) -> NaiveTime {
        self.completion_time
    }

    /// Completion time formatted as `HH:MM:SS`.
    #[must_use]
    pub fn completion_time_label(&self) -> String {
        self.completion_time.format("%H:%M:%S").to_string()
    }

    /// Get the final position (1 = winner).
    #[must_use]
    pub const fn position(&self) -> u32 {
        self.position
    }
}

/// Builder for `RaceEntry`.
///
/// Unset fields default to a Junior entry over 0 km, finishing first with a
/// completion time of `00:00:00`.
#[derive(Debug)]
pub struct RaceEntryBuilder {
    date: NaiveDate,
    race_name: String,
    participant: String,
    age_category: AgeCategory,
    distance_km: f64,
    completion_time: NaiveTime,
    position: i64,
}

impl RaceEntryBuilder {
    /// Create a new builder with required fields.
    #[must_use]
    pub fn new(date: NaiveDate, race_name: impl Into<String>, participant: impl Into<String>) -> Self {
        Self {
            date,
            race_name: race_name.into(),
            participant: participant.into(),
            age_category: AgeCategory::Junior,
            distance_km: 0.0,
            completion_time: NaiveTime::MIN,
            position: 1,
        }
    }

    /// Set the age category.
    #[must_use]
    pub const fn age_category(mut self, age_category: AgeCategory) -> Self {
        self.age_category = age_category;
        self
    }

    /// Set the distance in kilometres.
    #[must_use]
    pub const fn distance_km(mut self, distance_km: f64) -> Self {
        self.distance_km = distance_km;
        self
    }

    /// Set the completion time. Sub-second precision is dropped on build.
    #[must_use]
    pub const fn completion_time(mut self, completion_time: NaiveTime) -> Self {
        self.completion_time = completion_time;
        self
    }

    /// Set the final position.
    #[must_use]
    pub const fn position(mut self, position: i64) -> Self {
        self.position = position;
        self
    }

    /// Build the `RaceEntry`.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Distance is not finite or lies outside `[0, 100]`
    /// - Position is below 1 (or exceeds `u32::MAX`)
    pub fn build(self) -> Result<RaceEntry> {
        if !self.distance_km.is_finite() || !(0.0..=MAX_DISTANCE_KM).contains(&self.distance_km) {
            return Err(Error::InvalidDistance(self.distance_km));
        }

        let position = u32::try_from(self.position)
            .ok()
            .filter(|p| *p >= 1)
            .ok_or(Error::InvalidPosition(self.position))?;

        let completion_time = self
            .completion_time
            .with_nanosecond(0)
            .unwrap_or(self.completion_time);

        Ok(RaceEntry {
            date: self.date,
            race_name: self.race_name,
            participant: self.participant,
            age_category: self.age_category,
            distance_km: self.distance_km,
            completion_time,
            position,
        })
    }
}
