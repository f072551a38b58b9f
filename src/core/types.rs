//! Session record shared by the store, the aggregators and import/export
//!
//! The JSON field names match the data files written by earlier versions of
//! the tracker, so exported files can be imported unchanged.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::clock::ClockTime;

/// One logged work session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Session {
    pub(crate) id: i64,
    #[serde(with = "date_string")]
    pub(crate) date: NaiveDate,
    pub(crate) start_time: ClockTime,
    pub(crate) duration_min: u32,
    /// Rating, usually 1-10; values outside that range are kept as-is
    #[serde(default)]
    pub(crate) quality: Option<i64>,
}

impl Session {
    pub(crate) fn hours(&self) -> f64 {
        f64::from(self.duration_min) / 60.0
    }

    pub(crate) fn is_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }
}

/// Strict `YYYY-MM-DD` (de)serialization for session dates
mod date_string {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::utils::{format_date, parse_date};

    pub(super) fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_date(*date))
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_date(&raw).map_err(serde::de::Error::custom)
    }
}
