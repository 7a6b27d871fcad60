use crate::chart::ChartError;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";
/// Clock time substituted when the birth time is unknown
pub const UNKNOWN_BIRTH_TIME: &str = "11:00";

/// Birth data as supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartRequest {
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`, 24-hour
    pub time: String,
    /// Free-text place name
    pub location: String,
}

impl ChartRequest {
    pub fn new(date: impl Into<String>, time: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            location: location.into(),
        }
    }

    /// Replace the clock time, for births with no recorded time.
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    /// Local clock time read with a fixed UTC offset of zero. The location's
    /// timezone is never consulted.
    pub fn birth_datetime(&self) -> Result<DateTime<Utc>, ChartError> {
        let date = NaiveDate::parse_from_str(&self.date, DATE_FORMAT).map_err(|source| {
            ChartError::InvalidDate {
                value: self.date.clone(),
                source,
            }
        })?;
        let time = NaiveTime::parse_from_str(&self.time, TIME_FORMAT).map_err(|source| {
            ChartError::InvalidTime {
                value: self.time.clone(),
                source,
            }
        })?;
        Ok(date.and_time(time).and_utc())
    }
}
